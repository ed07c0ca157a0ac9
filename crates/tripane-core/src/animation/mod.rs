#![forbid(unsafe_code)]

//! Animation instructions and the sink that plays them.
//!
//! The layout controller never animates anything itself. It computes an
//! ordered list of [`AnimationInstruction`]s and hands each one to an
//! [`AnimationSink`] owned by the host, which is free to play them with
//! whatever renderer it has.
//!
//! # Invariants
//!
//! 1. A `Translate` moves all three panes together; it never targets a
//!    single pane.
//! 2. A `Resize` targets exactly one pane and carries absolute start and end
//!    widths in pixels.
//! 3. Dispatch is fire-and-forget: `dispatch` returns before the animation
//!    has played, and the controller never waits for it.
//!
//! # Failure Modes
//!
//! None at this layer. A sink that drops instructions only desynchronizes
//! the picture; the controller's own bookkeeping stays consistent.

pub mod timer;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::geometry::Pane;

pub use timer::ReleaseTimer;

/// Time every pane animation takes.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(300);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// What an instruction animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    Translate,
    Resize,
}

/// Which panes an instruction applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationTarget {
    /// The whole row of panes, shifted together.
    AllPanes,
    /// A single pane.
    Pane(Pane),
}

/// A single directive for the host's animation player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationInstruction {
    /// Shift the row of panes horizontally from one offset to another.
    ///
    /// Offsets are the x position of the row's left edge relative to the
    /// viewport, so they are zero or negative in practice.
    Translate {
        from_offset: i32,
        to_offset: i32,
        duration: Duration,
    },
    /// Animate one pane's width between two pixel values.
    Resize {
        pane: Pane,
        from: u32,
        to: u32,
        duration: Duration,
    },
}

impl AnimationInstruction {
    /// Translation of the whole row over [`ANIMATION_DURATION`].
    #[must_use]
    pub const fn translate(from_offset: i32, to_offset: i32) -> Self {
        Self::Translate {
            from_offset,
            to_offset,
            duration: ANIMATION_DURATION,
        }
    }

    /// Width animation of one pane over [`ANIMATION_DURATION`].
    #[must_use]
    pub const fn resize(pane: Pane, from: u32, to: u32) -> Self {
        Self::Resize {
            pane,
            from,
            to,
            duration: ANIMATION_DURATION,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> AnimationKind {
        match self {
            Self::Translate { .. } => AnimationKind::Translate,
            Self::Resize { .. } => AnimationKind::Resize,
        }
    }

    #[must_use]
    pub const fn target(&self) -> AnimationTarget {
        match self {
            Self::Translate { .. } => AnimationTarget::AllPanes,
            Self::Resize { pane, .. } => AnimationTarget::Pane(*pane),
        }
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        match self {
            Self::Translate { duration, .. } | Self::Resize { duration, .. } => *duration,
        }
    }

    /// Signed pixel change the instruction produces.
    ///
    /// For a translation this is the horizontal shift; for a resize it is the
    /// width change of the target pane.
    #[must_use]
    pub fn delta(&self) -> i64 {
        match *self {
            Self::Translate {
                from_offset,
                to_offset,
                ..
            } => i64::from(to_offset) - i64::from(from_offset),
            Self::Resize { from, to, .. } => i64::from(to) - i64::from(from),
        }
    }
}

// ---------------------------------------------------------------------------
// Sinks
// ---------------------------------------------------------------------------

/// Host-side player for animation instructions.
pub trait AnimationSink {
    /// Start playing `instruction`. Must not block until it finishes.
    fn dispatch(&mut self, instruction: AnimationInstruction);

    /// Pane sizing was changed directly (no animation); the host should
    /// re-run its layout pass.
    fn request_layout(&mut self) {}
}

impl<S: AnimationSink + ?Sized> AnimationSink for Box<S> {
    fn dispatch(&mut self, instruction: AnimationInstruction) {
        (**self).dispatch(instruction);
    }

    fn request_layout(&mut self) {
        (**self).request_layout();
    }
}

#[derive(Debug, Default)]
struct Recording {
    instructions: Vec<AnimationInstruction>,
    layout_requests: usize,
}

/// Sink that records everything it receives.
///
/// Clones share the same recording, so a host (or a test) can keep one
/// handle while the controller owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    inner: Rc<RefCell<Recording>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every instruction dispatched so far, in dispatch order.
    #[must_use]
    pub fn instructions(&self) -> Vec<AnimationInstruction> {
        self.inner.borrow().instructions.clone()
    }

    /// Remove and return the recorded instructions.
    pub fn take(&self) -> Vec<AnimationInstruction> {
        std::mem::take(&mut self.inner.borrow_mut().instructions)
    }

    /// Number of direct layout requests received.
    #[must_use]
    pub fn layout_requests(&self) -> usize {
        self.inner.borrow().layout_requests
    }
}

impl AnimationSink for RecordingSink {
    fn dispatch(&mut self, instruction: AnimationInstruction) {
        self.inner.borrow_mut().instructions.push(instruction);
    }

    fn request_layout(&mut self) {
        self.inner.borrow_mut().layout_requests += 1;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
