#![forbid(unsafe_code)]

//! Setup errors.
//!
//! Only construction can fail. Rejected transitions are reported through
//! [`TransitionOutcome`](crate::TransitionOutcome), not as errors.

use std::fmt;

use tripane_core::geometry::Orientation;

use crate::state::VisibilityState;

/// The controller could not be built from the supplied configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Exactly three panes are required.
    PaneCount { found: usize },
    /// An explicit initial state cannot be displayed in the starting
    /// orientation.
    InitialStateUnsupported {
        state: VisibilityState,
        orientation: Orientation,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PaneCount { found } => {
                write!(f, "three-pane layout requires exactly 3 panes, found {found}")
            }
            Self::InitialStateUnsupported { state, orientation } => {
                write!(f, "initial state {state} cannot be shown in {orientation}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
