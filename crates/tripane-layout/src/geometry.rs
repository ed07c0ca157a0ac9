#![forbid(unsafe_code)]

//! Pane geometry: relative weights, per-orientation width constants, and the
//! pinned pixel row used while transitions animate.
//!
//! Panes have two sizing regimes. At rest after setup (or after an
//! orientation reset) each pane is sized by a relative weight and the host's
//! layout pass distributes the available width. The first animated
//! transition pins every pane to an absolute pixel width and treats the
//! three panes as one row wider than the screen, shifted by a row offset so
//! that only the visible panes fall inside the viewport.
//!
//! # Invariants
//!
//! 1. Weights of every state sum to 1.0 and are zero for hidden panes.
//! 2. In landscape `minor_width + major_width == total_width`; in portrait all
//!    three constants equal the available width.
//! 3. `row_geometry` places the leading visible pane at x = 0 and the visible
//!    panes exactly fill `total_width`.
//!
//! # Failure Modes
//!
//! - Zero available width: every constant is zero and every transition
//!   degenerates to zero-length instructions (which the planner skips).

use tripane_core::geometry::{Orientation, Pane};

use crate::state::VisibilityState;

/// Share of the width taken by the secondary pane of a two-pane view.
pub const SECONDARY_SHARE: f32 = 0.35;

/// Share of the width taken by the primary pane of a two-pane view.
pub const PRIMARY_SHARE: f32 = 0.65;

// Integer form of SECONDARY_SHARE so `minor_width` floors exactly.
const SECONDARY_NUMERATOR: u64 = 7;
const SECONDARY_DENOMINATOR: u64 = 20;

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

/// Relative weight of each pane for a visibility state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneWeights {
    pub left: f32,
    pub middle: f32,
    pub right: f32,
}

impl PaneWeights {
    #[must_use]
    pub const fn new(left: f32, middle: f32, right: f32) -> Self {
        Self {
            left,
            middle,
            right,
        }
    }

    #[must_use]
    pub const fn get(&self, pane: Pane) -> f32 {
        match pane {
            Pane::Left => self.left,
            Pane::Middle => self.middle,
            Pane::Right => self.right,
        }
    }

    #[must_use]
    pub fn sum(&self) -> f32 {
        self.left + self.middle + self.right
    }
}

/// Weights the host's layout pass should use for `state`.
#[must_use]
pub const fn compute_weights(state: VisibilityState) -> PaneWeights {
    match state {
        VisibilityState::Left => PaneWeights::new(1.0, 0.0, 0.0),
        VisibilityState::LeftAndMiddle => PaneWeights::new(SECONDARY_SHARE, PRIMARY_SHARE, 0.0),
        VisibilityState::Middle => PaneWeights::new(0.0, 1.0, 0.0),
        VisibilityState::MiddleAndRight => PaneWeights::new(0.0, SECONDARY_SHARE, PRIMARY_SHARE),
        VisibilityState::Right => PaneWeights::new(0.0, 0.0, 1.0),
    }
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Pixel widths derived from the available width for one orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryConstants {
    /// Width of the secondary pane in a two-pane view.
    pub minor_width: u32,
    /// Width of the primary pane in a two-pane view.
    pub major_width: u32,
    /// Full viewport width.
    pub total_width: u32,
}

/// Derive width constants for `orientation` from the available width.
#[must_use]
pub fn compute_constants(orientation: Orientation, available_width: u32) -> GeometryConstants {
    match orientation {
        Orientation::Landscape => {
            let minor = u64::from(available_width) * SECONDARY_NUMERATOR / SECONDARY_DENOMINATOR;
            // minor <= available_width, so the narrowing cannot truncate.
            let minor_width = u32::try_from(minor).unwrap_or(available_width);
            GeometryConstants {
                minor_width,
                major_width: available_width - minor_width,
                total_width: available_width,
            }
        }
        Orientation::Portrait => GeometryConstants {
            minor_width: available_width,
            major_width: available_width,
            total_width: available_width,
        },
    }
}

// ---------------------------------------------------------------------------
// Sizing
// ---------------------------------------------------------------------------

/// How a pane's width is currently determined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaneSizing {
    /// Relative weight; the host distributes the available width.
    Weight(f32),
    /// Absolute width in pixels, weight ignored.
    Pixels(u32),
}

impl PaneSizing {
    #[must_use]
    pub const fn pixels(&self) -> Option<u32> {
        match self {
            Self::Pixels(px) => Some(*px),
            Self::Weight(_) => None,
        }
    }

    #[must_use]
    pub const fn weight(&self) -> f32 {
        match self {
            Self::Weight(w) => *w,
            Self::Pixels(_) => 0.0,
        }
    }
}

/// Weight sizing of all three panes for `state`.
#[must_use]
pub fn weighted_sizing(state: VisibilityState) -> [PaneSizing; 3] {
    let weights = compute_weights(state);
    Pane::ALL.map(|pane| PaneSizing::Weight(weights.get(pane)))
}

// ---------------------------------------------------------------------------
// Pinned row
// ---------------------------------------------------------------------------

/// Pixel widths of the three panes plus the horizontal offset of the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowGeometry {
    pub widths: [u32; 3],
    /// X position of the left pane's left edge relative to the viewport.
    pub offset: i32,
}

impl RowGeometry {
    #[must_use]
    pub const fn width(&self, pane: Pane) -> u32 {
        self.widths[pane.index()]
    }

    /// Viewport x range `[start, end)` covered by `pane`.
    #[must_use]
    pub fn span(&self, pane: Pane) -> (i64, i64) {
        let before: i64 = self.widths[..pane.index()].iter().map(|w| i64::from(*w)).sum();
        let start = i64::from(self.offset) + before;
        (start, start + i64::from(self.width(pane)))
    }
}

/// Pinned row for `state`.
///
/// Hidden panes keep the width they will be revealed at by the adjacent
/// two-pane state, so moving between neighbours only ever resizes the
/// boundary pane and slides the row.
#[must_use]
pub fn row_geometry(
    state: VisibilityState,
    orientation: Orientation,
    constants: GeometryConstants,
) -> RowGeometry {
    let GeometryConstants {
        minor_width: minor,
        major_width: major,
        total_width: total,
    } = constants;

    let widths = match orientation {
        Orientation::Portrait => [total; 3],
        Orientation::Landscape => match state {
            VisibilityState::Left => [total, major, major],
            VisibilityState::LeftAndMiddle => [minor, major, major],
            VisibilityState::Middle => [minor, total, major],
            VisibilityState::MiddleAndRight => [minor, minor, major],
            VisibilityState::Right => [minor, minor, total],
        },
    };

    let hidden: i64 = widths[..state.leading_pane().index()]
        .iter()
        .map(|w| i64::from(*w))
        .sum();

    RowGeometry {
        widths,
        offset: saturating_i32(-hidden),
    }
}

pub(crate) fn saturating_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
