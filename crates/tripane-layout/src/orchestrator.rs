#![forbid(unsafe_code)]

//! Animation-delta planning for a single visibility transition.
//!
//! [`plan_transition`] compares the pinned row of the source state with the
//! pinned row of the target state (see [`row_geometry`]) and emits:
//!
//! - one translation when the row offset changes (the viewport slides over
//!   the three-pane row), then
//! - one resize per pane whose width changes (the boundary between two
//!   visible panes moves), in left/middle/right order.
//!
//! # Transition table
//!
//! With `m` = minor width, `M` = major width and `T` = total width:
//!
//! | orientation | from → to | instructions |
//! |---|---|---|
//! | landscape | LEFT → LEFT_AND_MIDDLE | resize left T→m |
//! | landscape | LEFT_AND_MIDDLE → LEFT | resize left m→T |
//! | landscape | MIDDLE → LEFT_AND_MIDDLE | translate +m, resize middle T→M |
//! | landscape | MIDDLE_AND_RIGHT → LEFT_AND_MIDDLE | translate +m, resize middle m→M |
//! | landscape | LEFT_AND_MIDDLE → MIDDLE | translate −m, resize middle M→T |
//! | landscape | MIDDLE_AND_RIGHT → MIDDLE | resize middle m→T |
//! | landscape | LEFT_AND_MIDDLE → MIDDLE_AND_RIGHT | translate −m, resize middle M→m |
//! | landscape | MIDDLE → MIDDLE_AND_RIGHT | resize middle T→m |
//! | landscape | RIGHT → MIDDLE_AND_RIGHT | translate +m, resize right T→M |
//! | landscape | MIDDLE_AND_RIGHT → RIGHT | translate −m, resize right M→T |
//! | portrait | any single → any single | translate ±T or ±2T |
//!
//! Landscape moves between two single-pane states fall out of the same rule
//! (slide plus the resizes needed to keep the row consistent).
//!
//! # Failure Modes
//!
//! None: planning is pure arithmetic. Pairs the state machine rejects
//! (identical states, two-pane targets in portrait) produce an empty plan.

use tripane_core::animation::AnimationInstruction;
use tripane_core::geometry::{Orientation, Pane};

use crate::geometry::{GeometryConstants, row_geometry};
use crate::state::VisibilityState;

/// Ordered instructions that move the panes from `from` to `to`.
#[must_use]
pub fn plan_transition(
    from: VisibilityState,
    to: VisibilityState,
    orientation: Orientation,
    constants: GeometryConstants,
) -> Vec<AnimationInstruction> {
    if from == to || !from.is_valid_for(orientation) || !to.is_valid_for(orientation) {
        return Vec::new();
    }

    let start = row_geometry(from, orientation, constants);
    let end = row_geometry(to, orientation, constants);
    let mut plan = Vec::with_capacity(4);

    if start.offset != end.offset {
        plan.push(AnimationInstruction::translate(start.offset, end.offset));
    }

    for pane in Pane::ALL {
        let (before, after) = (start.width(pane), end.width(pane));
        if before != after {
            plan.push(AnimationInstruction::resize(pane, before, after));
        }
    }

    plan
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
