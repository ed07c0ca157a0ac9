#![forbid(unsafe_code)]

//! Declarative controller configuration.
//!
//! Only `left_visible` and `left_and_middle_visible` are recognized as
//! declarative initial states. Anything else, including the other state
//! names, falls back to `left_and_middle_visible`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::VisibilityState;

/// Configuration read from the host's layout description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaneLayoutConfig {
    /// Markup name of the state to start in.
    pub initial_state: Option<String>,
}

impl PaneLayoutConfig {
    #[must_use]
    pub fn with_initial_state(initial_state: impl Into<String>) -> Self {
        Self {
            initial_state: Some(initial_state.into()),
        }
    }

    /// Resolved starting state, before orientation adjustment.
    #[must_use]
    pub fn resolved_initial_state(&self) -> VisibilityState {
        self.initial_state
            .as_deref()
            .map_or_else(VisibilityState::default, initial_state_from_markup)
    }
}

/// Map a declarative initial-state value to a state.
#[must_use]
pub fn initial_state_from_markup(value: &str) -> VisibilityState {
    match value.parse::<VisibilityState>() {
        Ok(state @ (VisibilityState::Left | VisibilityState::LeftAndMiddle)) => state,
        Ok(_) | Err(_) => {
            debug!(
                target: "tripane.config",
                value,
                fallback = %VisibilityState::default(),
                "unsupported initial state, using default"
            );
            VisibilityState::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
