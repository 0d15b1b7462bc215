//! Pointer-driven create/move/resize state machine.
//!
//! Three mutually exclusive modes: idle, drawing a new region, or
//! manipulating an existing one (move, or one of eight resize handles).
//! The machine consumes pointer events in raw client coordinates, converts
//! them through the viewport transform, and produces region store
//! mutations. Mutations are applied incrementally during the gesture;
//! pointer-up has no separate commit step for manipulation.
//!
//! Exits are deterministic: every path out of `Drawing` or `Manipulating`
//! (pointer-up and pointer-cancel alike) returns the machine to `Idle` by
//! replacing the state value, so an abnormal exit can never leave a stale
//! gesture behind.

use serde::{Deserialize, Serialize};

use crate::geometry::{
    clamp_point, viewport_point_to_display, Dimensions, DisplayRect, Point,
};
use crate::region::{RegionId, RegionPatch, RegionStore, MIN_REGION_SIZE};

/// One of the eight resize handles around a selected region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    N,
    S,
    E,
    W,
    Ne,
    Nw,
    Se,
    Sw,
}

/// Which edges a handle engages per axis: `-1` = leading edge (north or
/// west: position moves, size shrinks as the delta grows), `+1` = trailing
/// edge (south or east: size grows with the delta), `0` = axis untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleEffects {
    pub x_edge: i8,
    pub y_edge: i8,
}

impl Handle {
    pub const ALL: [Handle; 8] = [
        Handle::N,
        Handle::S,
        Handle::E,
        Handle::W,
        Handle::Ne,
        Handle::Nw,
        Handle::Se,
        Handle::Sw,
    ];

    /// Fixed effect tuple consumed by the one generic resize routine.
    /// Corner handles engage both axes; edge handles engage one.
    pub fn effects(self) -> HandleEffects {
        let (x_edge, y_edge) = match self {
            Handle::N => (0, -1),
            Handle::S => (0, 1),
            Handle::E => (1, 0),
            Handle::W => (-1, 0),
            Handle::Ne => (1, -1),
            Handle::Nw => (-1, -1),
            Handle::Se => (1, 1),
            Handle::Sw => (-1, 1),
        };
        HandleEffects { x_edge, y_edge }
    }
}

/// What the pointer went down on, as determined by the caller's hit test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HitTarget {
    /// Empty canvas: starts drawing a new region.
    Canvas,
    /// The body of an existing region: starts a move.
    RegionBody { id: RegionId },
    /// A resize handle of an existing region.
    ResizeHandle { id: RegionId, handle: Handle },
}

/// Kind of manipulation in progress on an existing region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Move,
    Resize(Handle),
}

/// The interaction state. At most one gesture is in flight at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Dragging out a new region. `current` is the axis-aligned bounding
    /// box of the anchor and the latest pointer position.
    Drawing {
        anchor: Point,
        current: DisplayRect,
    },
    /// Moving or resizing an existing region. `snapshot` is the region's
    /// rect at pointer-down, `start_client` the raw pointer position at
    /// pointer-down; deltas are computed against these so floating-point
    /// error never accumulates across move events.
    Manipulating {
        id: RegionId,
        mode: DragMode,
        snapshot: DisplayRect,
        start_client: Point,
    },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    /// The in-progress draft rectangle while drawing, for overlay
    /// rendering. Never committed to the store.
    pub fn draft(&self) -> Option<DisplayRect> {
        match self {
            InteractionState::Drawing { current, .. } => Some(*current),
            _ => None,
        }
    }
}

/// Viewport parameters a gesture needs: zoom factor, client origin of the
/// content and the logical display extent used for clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureContext {
    pub zoom: f64,
    pub origin: Point,
    pub extent: Dimensions,
}

/// Handle pointer-down. Entering `Drawing` clears the selection; entering
/// `Manipulating` selects the hit region.
pub fn pointer_down(
    state: &mut InteractionState,
    store: &mut RegionStore,
    ctx: &GestureContext,
    client: Point,
    target: HitTarget,
) {
    match target {
        HitTarget::Canvas => {
            let anchor = clamp_point(
                viewport_point_to_display(client, ctx.origin, ctx.zoom),
                ctx.extent,
            );
            store.select(None);
            *state = InteractionState::Drawing {
                anchor,
                current: DisplayRect::new(anchor.x, anchor.y, 0.0, 0.0),
            };
        }
        HitTarget::RegionBody { id } => {
            begin_manipulation(state, store, id, DragMode::Move, client);
        }
        HitTarget::ResizeHandle { id, handle } => {
            begin_manipulation(state, store, id, DragMode::Resize(handle), client);
        }
    }
}

fn begin_manipulation(
    state: &mut InteractionState,
    store: &mut RegionStore,
    id: RegionId,
    mode: DragMode,
    client: Point,
) {
    // A hit target for a region that no longer exists (stale overlay)
    // leaves the machine idle.
    let Some(region) = store.get(&id) else {
        *state = InteractionState::Idle;
        return;
    };
    let snapshot = region.rect;
    store.select(Some(id.clone()));
    *state = InteractionState::Manipulating {
        id,
        mode,
        snapshot,
        start_client: client,
    };
}

/// Handle pointer-move. Updates the draft while drawing, or applies the
/// incremental move/resize mutation while manipulating. Idle moves are
/// ignored.
pub fn pointer_move(
    state: &mut InteractionState,
    store: &mut RegionStore,
    ctx: &GestureContext,
    client: Point,
) {
    match state {
        InteractionState::Idle => {}
        InteractionState::Drawing { anchor, current } => {
            let point = clamp_point(
                viewport_point_to_display(client, ctx.origin, ctx.zoom),
                ctx.extent,
            );
            *current = DisplayRect::from_points(*anchor, point);
        }
        InteractionState::Manipulating {
            id,
            mode,
            snapshot,
            start_client,
        } => {
            // Client-space delta divided by zoom: a 30px mouse travel at
            // 2x zoom moves the region 15 display px.
            let delta = Point::new(
                (client.x - start_client.x) / ctx.zoom,
                (client.y - start_client.y) / ctx.zoom,
            );
            match mode {
                DragMode::Move => {
                    let rect = moved_rect(*snapshot, delta, ctx.extent);
                    store.update(id, RegionPatch::position(rect.x, rect.y)).ok();
                }
                DragMode::Resize(handle) => {
                    let rect = resized_rect(*snapshot, handle.effects(), delta, ctx.extent);
                    // Reject-and-retry: below the minimum the event is
                    // dropped and the region keeps its last valid size,
                    // rather than snapping to the minimum.
                    if rect.width >= MIN_REGION_SIZE && rect.height >= MIN_REGION_SIZE {
                        store.update(id, RegionPatch::rect(rect)).ok();
                    }
                }
            }
        }
    }
}

/// Handle pointer-up. A drawing gesture commits a new region iff both
/// sides exceed the minimum size (strictly), otherwise the draft is
/// silently discarded; a manipulation is already applied and just ends.
///
/// Returns the id of a newly committed region, which also becomes the
/// selection.
pub fn pointer_up(
    state: &mut InteractionState,
    store: &mut RegionStore,
    ctx: &GestureContext,
    client: Point,
) -> Option<RegionId> {
    // Fold the final position in before deciding.
    pointer_move(state, store, ctx, client);

    let finished = std::mem::take(state);
    match finished {
        InteractionState::Drawing { current, .. } => {
            if current.width > MIN_REGION_SIZE && current.height > MIN_REGION_SIZE {
                match store.create(current, None) {
                    Ok(id) => {
                        log::debug!(
                            "committed drawn region {} at {:.1},{:.1} {:.1}x{:.1}",
                            id,
                            current.x,
                            current.y,
                            current.width,
                            current.height
                        );
                        store.select(Some(id.clone()));
                        return Some(id);
                    }
                    Err(err) => log::debug!("draft rejected: {err}"),
                }
            } else {
                log::debug!(
                    "discarded draft below minimum size: {:.1}x{:.1}",
                    current.width,
                    current.height
                );
            }
            None
        }
        _ => None,
    }
}

/// Handle an abnormal gesture end (pointer left the window, capture lost).
/// A draft in progress is discarded; a manipulation keeps its last applied
/// state. Either way the machine is back at idle.
pub fn pointer_cancel(state: &mut InteractionState) {
    if !state.is_idle() {
        log::debug!("gesture cancelled");
    }
    *state = InteractionState::Idle;
}

fn moved_rect(snapshot: DisplayRect, delta: Point, extent: Dimensions) -> DisplayRect {
    // The region can never be dragged fully outside the visible container:
    // position is clamped per axis to [0, extent - size].
    let max_x = (extent.width as f64 - snapshot.width).max(0.0);
    let max_y = (extent.height as f64 - snapshot.height).max(0.0);
    DisplayRect {
        x: (snapshot.x + delta.x).clamp(0.0, max_x),
        y: (snapshot.y + delta.y).clamp(0.0, max_y),
        ..snapshot
    }
}

fn resized_rect(
    snapshot: DisplayRect,
    effects: HandleEffects,
    delta: Point,
    extent: Dimensions,
) -> DisplayRect {
    let (x, width) = resize_axis(
        snapshot.x,
        snapshot.width,
        effects.x_edge,
        delta.x,
        extent.width as f64,
    );
    let (y, height) = resize_axis(
        snapshot.y,
        snapshot.height,
        effects.y_edge,
        delta.y,
        extent.height as f64,
    );
    DisplayRect {
        x,
        y,
        width,
        height,
    }
}

/// Generic single-axis resize. The leading edge moves the position and
/// shrinks the size together, with the position clamped at zero; the
/// trailing edge grows the size, clamped to the viewport extent.
fn resize_axis(pos: f64, size: f64, edge: i8, delta: f64, max: f64) -> (f64, f64) {
    match edge {
        -1 => {
            let effective = delta.max(-pos);
            (pos + effective, size - effective)
        }
        1 => (pos, (size + delta).min(max - pos)),
        _ => (pos, size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> GestureContext {
        GestureContext {
            zoom: 1.0,
            origin: Point::default(),
            extent: Dimensions::new(500, 400),
        }
    }

    fn draw(
        state: &mut InteractionState,
        store: &mut RegionStore,
        from: Point,
        to: Point,
    ) -> Option<RegionId> {
        let ctx = ctx();
        pointer_down(state, store, &ctx, from, HitTarget::Canvas);
        pointer_move(state, store, &ctx, to);
        pointer_up(state, store, &ctx, to)
    }

    #[test]
    fn test_tiny_draw_is_discarded() {
        let mut state = InteractionState::default();
        let mut store = RegionStore::new();

        // 5x2 px gesture: below the gate, the collection is unchanged.
        let id = draw(
            &mut state,
            &mut store,
            Point::new(10.0, 10.0),
            Point::new(15.0, 12.0),
        );
        assert_eq!(id, None);
        assert!(store.is_empty());
        assert!(state.is_idle());
    }

    #[test]
    fn test_draw_commits_and_selects() {
        let mut state = InteractionState::default();
        let mut store = RegionStore::new();

        let id = draw(
            &mut state,
            &mut store,
            Point::new(10.0, 10.0),
            Point::new(200.0, 150.0),
        )
        .unwrap();

        let region = store.get(&id).unwrap();
        assert_eq!(region.rect, DisplayRect::new(10.0, 10.0, 190.0, 140.0));
        assert_eq!(store.selected(), Some(id.as_str()));
        assert!(state.is_idle());
    }

    #[test]
    fn test_draw_upward_leftward_normalizes() {
        let mut state = InteractionState::default();
        let mut store = RegionStore::new();

        let id = draw(
            &mut state,
            &mut store,
            Point::new(200.0, 150.0),
            Point::new(10.0, 10.0),
        )
        .unwrap();
        assert_eq!(
            store.get(&id).unwrap().rect,
            DisplayRect::new(10.0, 10.0, 190.0, 140.0)
        );
    }

    #[test]
    fn test_draw_clamps_to_extent() {
        let mut state = InteractionState::default();
        let mut store = RegionStore::new();

        // Drag past the bottom-right corner: the draft stops at the extent.
        let id = draw(
            &mut state,
            &mut store,
            Point::new(400.0, 300.0),
            Point::new(900.0, 900.0),
        )
        .unwrap();
        assert_eq!(
            store.get(&id).unwrap().rect,
            DisplayRect::new(400.0, 300.0, 100.0, 100.0)
        );
    }

    #[test]
    fn test_draw_clears_previous_selection() {
        let mut state = InteractionState::default();
        let mut store = RegionStore::new();
        let prior = store
            .create(DisplayRect::new(300.0, 300.0, 50.0, 50.0), None)
            .unwrap();
        store.select(Some(prior));

        let ctx = ctx();
        pointer_down(
            &mut state,
            &mut store,
            &ctx,
            Point::new(10.0, 10.0),
            HitTarget::Canvas,
        );
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn test_draft_visible_while_drawing() {
        let mut state = InteractionState::default();
        let mut store = RegionStore::new();
        let ctx = ctx();

        pointer_down(
            &mut state,
            &mut store,
            &ctx,
            Point::new(10.0, 10.0),
            HitTarget::Canvas,
        );
        pointer_move(&mut state, &mut store, &ctx, Point::new(60.0, 40.0));
        assert_eq!(state.draft(), Some(DisplayRect::new(10.0, 10.0, 50.0, 30.0)));
        // The draft is not in the store.
        assert!(store.is_empty());
    }

    #[test]
    fn test_move_applies_delta() {
        let mut state = InteractionState::default();
        let mut store = RegionStore::new();
        let id = store
            .create(DisplayRect::new(100.0, 100.0, 50.0, 50.0), None)
            .unwrap();
        let ctx = ctx();

        pointer_down(
            &mut state,
            &mut store,
            &ctx,
            Point::new(120.0, 120.0),
            HitTarget::RegionBody { id: id.clone() },
        );
        assert_eq!(store.selected(), Some(id.as_str()));

        pointer_move(&mut state, &mut store, &ctx, Point::new(150.0, 110.0));
        assert_eq!(
            store.get(&id).unwrap().rect,
            DisplayRect::new(130.0, 90.0, 50.0, 50.0)
        );

        pointer_up(&mut state, &mut store, &ctx, Point::new(150.0, 110.0));
        assert!(state.is_idle());
    }

    #[test]
    fn test_move_divides_delta_by_zoom() {
        let mut state = InteractionState::default();
        let mut store = RegionStore::new();
        let id = store
            .create(DisplayRect::new(100.0, 100.0, 50.0, 50.0), None)
            .unwrap();
        let ctx = GestureContext { zoom: 2.0, ..ctx() };

        pointer_down(
            &mut state,
            &mut store,
            &ctx,
            Point::new(0.0, 0.0),
            HitTarget::RegionBody { id: id.clone() },
        );
        pointer_move(&mut state, &mut store, &ctx, Point::new(30.0, 0.0));
        // 30 client px at 2x zoom is 15 display px.
        assert_eq!(store.get(&id).unwrap().rect.x, 115.0);
    }

    #[test]
    fn test_move_clamps_inside_extent() {
        let mut state = InteractionState::default();
        let mut store = RegionStore::new();
        let id = store
            .create(DisplayRect::new(100.0, 100.0, 50.0, 50.0), None)
            .unwrap();
        let ctx = ctx();

        pointer_down(
            &mut state,
            &mut store,
            &ctx,
            Point::new(0.0, 0.0),
            HitTarget::RegionBody { id: id.clone() },
        );
        pointer_move(&mut state, &mut store, &ctx, Point::new(-1000.0, 1000.0));
        // Clamped to [0, extent - size] per axis.
        assert_eq!(
            store.get(&id).unwrap().rect,
            DisplayRect::new(0.0, 350.0, 50.0, 50.0)
        );
    }

    #[test]
    fn test_move_is_relative_to_snapshot_not_cumulative() {
        let mut state = InteractionState::default();
        let mut store = RegionStore::new();
        let id = store
            .create(DisplayRect::new(100.0, 100.0, 50.0, 50.0), None)
            .unwrap();
        let ctx = ctx();

        pointer_down(
            &mut state,
            &mut store,
            &ctx,
            Point::new(0.0, 0.0),
            HitTarget::RegionBody { id: id.clone() },
        );
        // Many small moves must land exactly where one big move would.
        for i in 1..=10 {
            pointer_move(&mut state, &mut store, &ctx, Point::new(i as f64, 0.0));
        }
        assert_eq!(store.get(&id).unwrap().rect.x, 110.0);
    }

    #[test]
    fn test_resize_se_grows_both_axes() {
        let mut state = InteractionState::default();
        let mut store = RegionStore::new();
        let id = store
            .create(DisplayRect::new(100.0, 100.0, 50.0, 50.0), None)
            .unwrap();
        let ctx = ctx();

        pointer_down(
            &mut state,
            &mut store,
            &ctx,
            Point::new(150.0, 150.0),
            HitTarget::ResizeHandle {
                id: id.clone(),
                handle: Handle::Se,
            },
        );
        pointer_move(&mut state, &mut store, &ctx, Point::new(180.0, 170.0));
        assert_eq!(
            store.get(&id).unwrap().rect,
            DisplayRect::new(100.0, 100.0, 80.0, 70.0)
        );
    }

    #[test]
    fn test_resize_nw_moves_origin_and_shrinks() {
        let mut state = InteractionState::default();
        let mut store = RegionStore::new();
        let id = store
            .create(DisplayRect::new(100.0, 100.0, 50.0, 50.0), None)
            .unwrap();
        let ctx = ctx();

        pointer_down(
            &mut state,
            &mut store,
            &ctx,
            Point::new(100.0, 100.0),
            HitTarget::ResizeHandle {
                id: id.clone(),
                handle: Handle::Nw,
            },
        );
        pointer_move(&mut state, &mut store, &ctx, Point::new(110.0, 105.0));
        assert_eq!(
            store.get(&id).unwrap().rect,
            DisplayRect::new(110.0, 105.0, 40.0, 45.0)
        );
    }

    #[test]
    fn test_resize_edge_handles_affect_one_axis() {
        let mut state = InteractionState::default();
        let mut store = RegionStore::new();
        let id = store
            .create(DisplayRect::new(100.0, 100.0, 50.0, 50.0), None)
            .unwrap();
        let ctx = ctx();

        pointer_down(
            &mut state,
            &mut store,
            &ctx,
            Point::new(125.0, 100.0),
            HitTarget::ResizeHandle {
                id: id.clone(),
                handle: Handle::N,
            },
        );
        pointer_move(&mut state, &mut store, &ctx, Point::new(225.0, 90.0));
        // North handle: x/width untouched no matter the horizontal travel.
        assert_eq!(
            store.get(&id).unwrap().rect,
            DisplayRect::new(100.0, 90.0, 50.0, 60.0)
        );
    }

    #[test]
    fn test_resize_rejects_below_minimum_without_snapping() {
        let mut state = InteractionState::default();
        let mut store = RegionStore::new();
        let id = store
            .create(DisplayRect::new(100.0, 100.0, 50.0, 50.0), None)
            .unwrap();
        let ctx = ctx();

        pointer_down(
            &mut state,
            &mut store,
            &ctx,
            Point::new(150.0, 150.0),
            HitTarget::ResizeHandle {
                id: id.clone(),
                handle: Handle::Se,
            },
        );
        // Fast inward drag far past the minimum: the event is ignored, the
        // region does not snap to 20x20.
        pointer_move(&mut state, &mut store, &ctx, Point::new(50.0, 50.0));
        assert_eq!(store.get(&id).unwrap().rect.width, 50.0);
        assert_eq!(store.get(&id).unwrap().rect.height, 50.0);

        // Dragging back out resumes from the snapshot.
        pointer_move(&mut state, &mut store, &ctx, Point::new(160.0, 160.0));
        assert_eq!(store.get(&id).unwrap().rect.width, 60.0);
    }

    #[test]
    fn test_resize_w_clamps_position_at_zero() {
        let mut state = InteractionState::default();
        let mut store = RegionStore::new();
        let id = store
            .create(DisplayRect::new(30.0, 100.0, 50.0, 50.0), None)
            .unwrap();
        let ctx = ctx();

        pointer_down(
            &mut state,
            &mut store,
            &ctx,
            Point::new(30.0, 125.0),
            HitTarget::ResizeHandle {
                id: id.clone(),
                handle: Handle::W,
            },
        );
        pointer_move(&mut state, &mut store, &ctx, Point::new(-100.0, 125.0));
        // Position clamps at 0; the width absorbs only the clamped travel.
        assert_eq!(
            store.get(&id).unwrap().rect,
            DisplayRect::new(0.0, 100.0, 80.0, 50.0)
        );
    }

    #[test]
    fn test_resize_e_clamps_to_extent() {
        let mut state = InteractionState::default();
        let mut store = RegionStore::new();
        let id = store
            .create(DisplayRect::new(400.0, 100.0, 50.0, 50.0), None)
            .unwrap();
        let ctx = ctx();

        pointer_down(
            &mut state,
            &mut store,
            &ctx,
            Point::new(450.0, 125.0),
            HitTarget::ResizeHandle {
                id: id.clone(),
                handle: Handle::E,
            },
        );
        pointer_move(&mut state, &mut store, &ctx, Point::new(900.0, 125.0));
        assert_eq!(store.get(&id).unwrap().rect.width, 100.0);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut state = InteractionState::default();
        let mut store = RegionStore::new();
        let ctx = ctx();

        pointer_down(
            &mut state,
            &mut store,
            &ctx,
            Point::new(10.0, 10.0),
            HitTarget::Canvas,
        );
        pointer_move(&mut state, &mut store, &ctx, Point::new(300.0, 300.0));
        pointer_cancel(&mut state);

        assert!(state.is_idle());
        assert!(store.is_empty());
    }

    #[test]
    fn test_cancel_keeps_applied_manipulation() {
        let mut state = InteractionState::default();
        let mut store = RegionStore::new();
        let id = store
            .create(DisplayRect::new(100.0, 100.0, 50.0, 50.0), None)
            .unwrap();
        let ctx = ctx();

        pointer_down(
            &mut state,
            &mut store,
            &ctx,
            Point::new(0.0, 0.0),
            HitTarget::RegionBody { id: id.clone() },
        );
        pointer_move(&mut state, &mut store, &ctx, Point::new(20.0, 0.0));
        pointer_cancel(&mut state);

        // Mutations were applied incrementally; cancel loses nothing.
        assert!(state.is_idle());
        assert_eq!(store.get(&id).unwrap().rect.x, 120.0);
    }

    #[test]
    fn test_stale_hit_target_goes_idle() {
        let mut state = InteractionState::default();
        let mut store = RegionStore::new();
        let ctx = ctx();

        pointer_down(
            &mut state,
            &mut store,
            &ctx,
            Point::new(0.0, 0.0),
            HitTarget::RegionBody {
                id: "region-404".to_string(),
            },
        );
        assert!(state.is_idle());
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn test_handle_effects_table() {
        use Handle::*;
        let cases = [
            (N, 0, -1),
            (S, 0, 1),
            (E, 1, 0),
            (W, -1, 0),
            (Ne, 1, -1),
            (Nw, -1, -1),
            (Se, 1, 1),
            (Sw, -1, 1),
        ];
        for (handle, x_edge, y_edge) in cases {
            assert_eq!(handle.effects(), HandleEffects { x_edge, y_edge });
        }
    }

    #[test]
    fn test_every_handle_resizes_through_generic_path() {
        // Each of the eight handles must produce a valid mutation from the
        // same starting rect.
        for handle in Handle::ALL {
            let mut state = InteractionState::default();
            let mut store = RegionStore::new();
            let id = store
                .create(DisplayRect::new(100.0, 100.0, 50.0, 50.0), None)
                .unwrap();
            let ctx = ctx();

            pointer_down(
                &mut state,
                &mut store,
                &ctx,
                Point::new(0.0, 0.0),
                HitTarget::ResizeHandle {
                    id: id.clone(),
                    handle,
                },
            );
            // A small outward-safe drag: 5px right and down.
            pointer_move(&mut state, &mut store, &ctx, Point::new(5.0, 5.0));
            let rect = store.get(&id).unwrap().rect;
            let effects = handle.effects();

            let expected_w = match effects.x_edge {
                -1 => 45.0,
                1 => 55.0,
                _ => 50.0,
            };
            let expected_h = match effects.y_edge {
                -1 => 45.0,
                1 => 55.0,
                _ => 50.0,
            };
            assert_eq!(rect.width, expected_w, "handle {handle:?}");
            assert_eq!(rect.height, expected_h, "handle {handle:?}");
        }
    }

    #[test]
    fn test_handle_serde_tags() {
        let json = serde_json::to_string(&Handle::Nw).unwrap();
        assert_eq!(json, "\"nw\"");
        let target: HitTarget = serde_json::from_str(
            r#"{"kind":"resize_handle","id":"region-3","handle":"se"}"#,
        )
        .unwrap();
        assert_eq!(
            target,
            HitTarget::ResizeHandle {
                id: "region-3".to_string(),
                handle: Handle::Se
            }
        );
    }
}
