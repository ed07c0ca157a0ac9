#![forbid(unsafe_code)]

//! Orientation adaptation: carry a visibility state across a rotation.
//!
//! | from state | → landscape | → portrait |
//! |---|---|---|
//! | LEFT | LEFT_AND_MIDDLE | LEFT |
//! | LEFT_AND_MIDDLE | LEFT_AND_MIDDLE | MIDDLE |
//! | MIDDLE | MIDDLE | MIDDLE |
//! | MIDDLE_AND_RIGHT | MIDDLE_AND_RIGHT | RIGHT |
//! | RIGHT | RIGHT | RIGHT |
//!
//! Rotating into landscape restores the richer two-pane view only from
//! `LEFT`; rotating into portrait collapses a two-pane state onto its
//! primary (trailing) pane.
//!
//! # Invariants
//!
//! 1. The result is always valid for the target orientation.
//! 2. The table is not symmetric: landscape `LEFT_AND_MIDDLE` goes to
//!    portrait `MIDDLE` and comes back as `MIDDLE`, not `LEFT_AND_MIDDLE`.
//! 3. If the orientation did not change, the state is returned unchanged.

use tripane_core::geometry::Orientation;

use crate::state::VisibilityState;

/// State to show after rotating from `old` to `new` while `state` is active.
#[must_use]
pub const fn remap_for_orientation_change(
    old: Orientation,
    new: Orientation,
    state: VisibilityState,
) -> VisibilityState {
    if matches!(
        (old, new),
        (Orientation::Landscape, Orientation::Landscape)
            | (Orientation::Portrait, Orientation::Portrait)
    ) {
        return state;
    }
    remap_into(new, state)
}

/// Table lookup for a state arriving in `orientation`.
#[must_use]
pub const fn remap_into(orientation: Orientation, state: VisibilityState) -> VisibilityState {
    match orientation {
        Orientation::Landscape => match state {
            VisibilityState::Left => VisibilityState::LeftAndMiddle,
            other => other,
        },
        Orientation::Portrait => match state {
            VisibilityState::LeftAndMiddle => VisibilityState::Middle,
            VisibilityState::MiddleAndRight => VisibilityState::Right,
            other => other,
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
