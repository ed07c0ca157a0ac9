#![forbid(unsafe_code)]

//! Geometric primitives: pane slots and device orientation.

use std::fmt;

/// One of the three fixed content regions, in row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pane {
    Left,
    Middle,
    Right,
}

impl Pane {
    /// All panes in row order (left to right).
    pub const ALL: [Pane; 3] = [Pane::Left, Pane::Middle, Pane::Right];

    /// Position of the pane in the row (0 = left).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
        }
    }

    /// Short lowercase name, used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Pane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device orientation as reported by the host screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
}

impl Orientation {
    /// Classify a viewport by its dimensions.
    ///
    /// Square viewports count as landscape.
    #[inline]
    #[must_use]
    pub const fn from_dimensions(width: u32, height: u32) -> Self {
        if width >= height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    /// Whether two panes may be shown side by side.
    #[inline]
    #[must_use]
    pub const fn supports_split(self) -> bool {
        matches!(self, Self::Landscape)
    }

    /// Short lowercase name, used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pane_indices_follow_row_order() {
        for (i, pane) in Pane::ALL.iter().enumerate() {
            assert_eq!(pane.index(), i);
        }
        assert!(Pane::Left < Pane::Middle && Pane::Middle < Pane::Right);
    }

    #[test]
    fn orientation_from_dimensions() {
        assert_eq!(Orientation::from_dimensions(1280, 800), Orientation::Landscape);
        assert_eq!(Orientation::from_dimensions(800, 1280), Orientation::Portrait);
        assert_eq!(Orientation::from_dimensions(600, 600), Orientation::Landscape);
    }

    #[test]
    fn only_landscape_supports_split() {
        assert!(Orientation::Landscape.supports_split());
        assert!(!Orientation::Portrait.supports_split());
    }

    #[test]
    fn display_names() {
        assert_eq!(Pane::Middle.to_string(), "middle");
        assert_eq!(Orientation::Portrait.to_string(), "portrait");
    }
}
