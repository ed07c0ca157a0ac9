#![forbid(unsafe_code)]

//! Visibility states: which one or two panes are on screen.
//!
//! # Invariants
//!
//! 1. At most two panes are visible, and a two-pane state is always a
//!    contiguous pair (there is no LEFT + RIGHT state).
//! 2. Two-pane states are only valid in landscape.
//! 3. Markup names round-trip through `Display` / `FromStr`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tripane_core::geometry::{Orientation, Pane};

/// The five visibility configurations, exactly one active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VisibilityState {
    #[serde(rename = "left_visible")]
    Left,
    #[default]
    #[serde(rename = "left_and_middle_visible")]
    LeftAndMiddle,
    #[serde(rename = "middle_visible")]
    Middle,
    #[serde(rename = "middle_and_right_visible")]
    MiddleAndRight,
    #[serde(rename = "right_visible")]
    Right,
}

impl VisibilityState {
    /// All states, ordered by how far the visible window has slid right.
    pub const ALL: [VisibilityState; 5] = [
        Self::Left,
        Self::LeftAndMiddle,
        Self::Middle,
        Self::MiddleAndRight,
        Self::Right,
    ];

    /// Whether two panes are shown side by side.
    #[inline]
    #[must_use]
    pub const fn is_split(self) -> bool {
        matches!(self, Self::LeftAndMiddle | Self::MiddleAndRight)
    }

    /// Alias of [`is_split`](Self::is_split) that reads better at call sites
    /// checking orientation constraints.
    #[inline]
    #[must_use]
    pub const fn requires_landscape(self) -> bool {
        self.is_split()
    }

    #[inline]
    #[must_use]
    pub const fn is_valid_for(self, orientation: Orientation) -> bool {
        orientation.supports_split() || !self.is_split()
    }

    /// Visible panes in row order.
    #[must_use]
    pub const fn visible_panes(self) -> &'static [Pane] {
        match self {
            Self::Left => &[Pane::Left],
            Self::LeftAndMiddle => &[Pane::Left, Pane::Middle],
            Self::Middle => &[Pane::Middle],
            Self::MiddleAndRight => &[Pane::Middle, Pane::Right],
            Self::Right => &[Pane::Right],
        }
    }

    /// The leftmost visible pane.
    #[must_use]
    pub const fn leading_pane(self) -> Pane {
        match self {
            Self::Left | Self::LeftAndMiddle => Pane::Left,
            Self::Middle | Self::MiddleAndRight => Pane::Middle,
            Self::Right => Pane::Right,
        }
    }

    #[must_use]
    pub fn shows(self, pane: Pane) -> bool {
        self.visible_panes().contains(&pane)
    }

    /// Markup name used by declarative configuration.
    #[must_use]
    pub const fn markup_name(self) -> &'static str {
        match self {
            Self::Left => "left_visible",
            Self::LeftAndMiddle => "left_and_middle_visible",
            Self::Middle => "middle_visible",
            Self::MiddleAndRight => "middle_and_right_visible",
            Self::Right => "right_visible",
        }
    }
}

impl fmt::Display for VisibilityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.markup_name())
    }
}

/// Error returned when a string is not a visibility state markup name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVisibilityStateError {
    input: String,
}

impl ParseVisibilityStateError {
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseVisibilityStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown visibility state {:?}", self.input)
    }
}

impl std::error::Error for ParseVisibilityStateError {}

impl FromStr for VisibilityState {
    type Err = ParseVisibilityStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.markup_name() == s)
            .ok_or_else(|| ParseVisibilityStateError {
                input: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
