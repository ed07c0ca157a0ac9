#![forbid(unsafe_code)]

//! Routing for the per-pane toggle affordances.
//!
//! Each pane carries one or two arrow controls. Pressing one asks for a
//! neighbouring visibility state; which one depends on the current state and
//! the orientation. The affordances themselves live in the host; this module
//! only maps a press to a target.

use tripane_core::geometry::Orientation;

use crate::state::VisibilityState;

/// A toggle control, named by the pane and edge it sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleControl {
    /// The left pane's single control.
    LeftPane,
    /// The middle pane's control facing the left pane.
    MiddleLeading,
    /// The middle pane's control facing the right pane.
    MiddleTrailing,
    /// The right pane's single control.
    RightPane,
}

impl ToggleControl {
    /// Target state for a press, or `None` when the control has no effect in
    /// this state.
    #[must_use]
    pub const fn resolve(
        self,
        state: VisibilityState,
        orientation: Orientation,
    ) -> Option<VisibilityState> {
        use VisibilityState::*;

        match orientation {
            Orientation::Portrait => Some(match self {
                Self::LeftPane | Self::RightPane => Middle,
                Self::MiddleLeading => Left,
                Self::MiddleTrailing => Right,
            }),
            Orientation::Landscape => match (self, state) {
                (Self::LeftPane, LeftAndMiddle) => Some(Left),
                (Self::LeftPane, Left) => Some(LeftAndMiddle),
                (Self::MiddleLeading, LeftAndMiddle) => Some(Middle),
                (Self::MiddleLeading, Middle | MiddleAndRight) => Some(LeftAndMiddle),
                (Self::MiddleTrailing, LeftAndMiddle | Middle) => Some(MiddleAndRight),
                (Self::MiddleTrailing, MiddleAndRight) => Some(Middle),
                (Self::RightPane, MiddleAndRight) => Some(Right),
                (Self::RightPane, Right) => Some(MiddleAndRight),
                _ => None,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::VisibilityState::*;

    fn landscape(control: ToggleControl, state: VisibilityState) -> Option<VisibilityState> {
        control.resolve(state, Orientation::Landscape)
    }

    #[test]
    fn left_pane_expands_and_collapses() {
        assert_eq!(landscape(ToggleControl::LeftPane, LeftAndMiddle), Some(Left));
        assert_eq!(landscape(ToggleControl::LeftPane, Left), Some(LeftAndMiddle));
        assert_eq!(landscape(ToggleControl::LeftPane, Middle), None);
    }

    #[test]
    fn middle_controls_slide_the_window() {
        assert_eq!(landscape(ToggleControl::MiddleLeading, LeftAndMiddle), Some(Middle));
        assert_eq!(landscape(ToggleControl::MiddleLeading, MiddleAndRight), Some(LeftAndMiddle));
        assert_eq!(landscape(ToggleControl::MiddleTrailing, LeftAndMiddle), Some(MiddleAndRight));
        assert_eq!(landscape(ToggleControl::MiddleTrailing, MiddleAndRight), Some(Middle));
        assert_eq!(landscape(ToggleControl::MiddleTrailing, Right), None);
    }

    #[test]
    fn right_pane_expands_and_collapses() {
        assert_eq!(landscape(ToggleControl::RightPane, MiddleAndRight), Some(Right));
        assert_eq!(landscape(ToggleControl::RightPane, Right), Some(MiddleAndRight));
    }

    #[test]
    fn portrait_routes_to_single_panes() {
        for state in [Left, Middle, Right] {
            assert_eq!(ToggleControl::LeftPane.resolve(state, Orientation::Portrait), Some(Middle));
            assert_eq!(ToggleControl::MiddleLeading.resolve(state, Orientation::Portrait), Some(Left));
            assert_eq!(ToggleControl::MiddleTrailing.resolve(state, Orientation::Portrait), Some(Right));
        }
    }

    #[test]
    fn resolved_targets_are_valid_for_orientation() {
        let controls = [
            ToggleControl::LeftPane,
            ToggleControl::MiddleLeading,
            ToggleControl::MiddleTrailing,
            ToggleControl::RightPane,
        ];
        for orientation in [Orientation::Landscape, Orientation::Portrait] {
            for control in controls {
                for state in VisibilityState::ALL {
                    if let Some(target) = control.resolve(state, orientation) {
                        assert!(target.is_valid_for(orientation));
                    }
                }
            }
        }
    }
}
