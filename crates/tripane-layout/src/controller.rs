#![forbid(unsafe_code)]

//! The three-pane controller: a guarded visibility state machine.
//!
//! [`PaneController`] owns the current [`VisibilityState`], the device
//! [`Orientation`], the cached [`GeometryConstants`], the
//! [`TransitionGuard`], and the layout parameters of the three panes. It
//! never owns what the panes display; hosts hand in opaque content handles
//! and read back sizing through [`PaneRef`].
//!
//! # Transition sequence
//!
//! An accepted [`request_transition`](PaneController::request_transition):
//!
//! 1. computes geometry constants if they are not cached, and pins the panes
//!    to pixel widths if they are still weight-sized;
//! 2. engages the guard (cleared by [`tick`](PaneController::tick) after
//!    [`GUARD_TIMEOUT`](crate::guard::GUARD_TIMEOUT), or by
//!    [`animation_finished`](PaneController::animation_finished));
//! 3. notifies every observer's `on_begin_transition`;
//! 4. dispatches the planned instructions to the animation sink;
//! 5. stores the new state;
//! 6. notifies every observer's `on_state_applied`.
//!
//! Orientation changes go through
//! [`notify_orientation_changed`](PaneController::notify_orientation_changed),
//! which remaps the state, re-measures, and applies the result without
//! animation.
//!
//! # Invariants
//!
//! 1. The current state is always valid for the current orientation.
//! 2. Rejected requests change nothing and notify nobody.
//! 3. Geometry constants are never recomputed while a transition animates;
//!    only construction and orientation resets invalidate them.
//! 4. `on_state_applied` fires after the state is stored but is not tied to
//!    the animation actually finishing on screen.
//!
//! # Failure Modes
//!
//! - Requests arriving while the guard is engaged are dropped, not queued.
//! - Observer panics propagate to the caller.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, debug_span, info};
use tripane_core::animation::{AnimationInstruction, AnimationSink};
use tripane_core::geometry::{Orientation, Pane};

use crate::config::PaneLayoutConfig;
use crate::error::LayoutError;
use crate::geometry::{
    GeometryConstants, PaneSizing, compute_constants, row_geometry, weighted_sizing,
};
use crate::guard::{GuardRelease, TransitionGuard};
use crate::observer::{ObserverRegistry, SharedObserver};
use crate::orchestrator::plan_transition;
use crate::orientation::{remap_for_orientation_change, remap_into};
use crate::state::VisibilityState;
use crate::toggle::ToggleControl;

// ---------------------------------------------------------------------------
// Host capabilities
// ---------------------------------------------------------------------------

/// Source of the width available to the three panes, queried lazily.
pub trait WidthSource {
    fn available_width(&self) -> u32;
}

impl<F: Fn() -> u32> WidthSource for F {
    fn available_width(&self) -> u32 {
        self()
    }
}

/// A width that never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth(pub u32);

impl WidthSource for FixedWidth {
    fn available_width(&self) -> u32 {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Why a transition request was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Another transition is still in flight.
    Busy,
    /// The target is already the current state.
    AlreadyActive,
    /// The target shows two panes and the device is in portrait.
    RequiresLandscape,
    /// A toggle control has no route from the current state.
    NoRoute,
}

impl RejectReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Busy => "busy",
            Self::AlreadyActive => "already_active",
            Self::RequiresLandscape => "requires_landscape",
            Self::NoRoute => "no_route",
        }
    }
}

/// Result of a transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The state changed and observers were notified.
    Applied,
    /// An orientation reset kept the same state; geometry was rebuilt but no
    /// observer was notified.
    Remeasured,
    /// Nothing happened.
    Rejected(RejectReason),
}

impl TransitionOutcome {
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

// ---------------------------------------------------------------------------
// Pane access
// ---------------------------------------------------------------------------

/// Read-only view of one pane's content handle and layout parameters.
#[derive(Debug, Clone, Copy)]
pub struct PaneRef<'a, P> {
    pub pane: Pane,
    pub content: &'a P,
    pub sizing: PaneSizing,
    /// Horizontal offset shared by the whole row.
    pub row_offset: i32,
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Adaptive three-pane layout controller.
pub struct PaneController<P, W, S> {
    panes: [P; 3],
    sizing: [PaneSizing; 3],
    row_offset: i32,
    pinned: bool,
    state: VisibilityState,
    orientation: Orientation,
    constants: Option<GeometryConstants>,
    guard: TransitionGuard,
    observers: Rc<ObserverRegistry>,
    width_source: W,
    sink: S,
}

impl<P, W, S> fmt::Debug for PaneController<P, W, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaneController")
            .field("state", &self.state)
            .field("orientation", &self.orientation)
            .field("constants", &self.constants)
            .field("sizing", &self.sizing)
            .field("row_offset", &self.row_offset)
            .field("transitioning", &self.guard.is_engaged())
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl<P, W: WidthSource, S: AnimationSink> PaneController<P, W, S> {
    /// Build a controller from declarative configuration.
    ///
    /// A configured state the starting orientation cannot show is collapsed
    /// the same way a rotation would collapse it.
    pub fn new(
        panes: Vec<P>,
        orientation: Orientation,
        config: &PaneLayoutConfig,
        width_source: W,
        sink: S,
    ) -> Result<Self, LayoutError> {
        let configured = config.resolved_initial_state();
        let initial = if configured.is_valid_for(orientation) {
            configured
        } else {
            let collapsed = remap_into(orientation, configured);
            debug!(
                target: "tripane.config",
                configured = %configured,
                initial = %collapsed,
                orientation = %orientation,
                "configured state collapsed for orientation"
            );
            collapsed
        };
        Self::from_parts(panes, orientation, initial, width_source, sink)
    }

    /// Build a controller starting in an explicit state.
    pub fn with_initial_state(
        panes: Vec<P>,
        orientation: Orientation,
        initial: VisibilityState,
        width_source: W,
        sink: S,
    ) -> Result<Self, LayoutError> {
        if !initial.is_valid_for(orientation) {
            return Err(LayoutError::InitialStateUnsupported {
                state: initial,
                orientation,
            });
        }
        Self::from_parts(panes, orientation, initial, width_source, sink)
    }

    fn from_parts(
        panes: Vec<P>,
        orientation: Orientation,
        initial: VisibilityState,
        width_source: W,
        sink: S,
    ) -> Result<Self, LayoutError> {
        let panes = <[P; 3]>::try_from(panes)
            .map_err(|rest: Vec<P>| LayoutError::PaneCount { found: rest.len() })?;

        Ok(Self {
            panes,
            sizing: weighted_sizing(initial),
            row_offset: 0,
            pinned: false,
            state: initial,
            orientation,
            constants: None,
            guard: TransitionGuard::new(),
            observers: ObserverRegistry::shared(),
            width_source,
            sink,
        })
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Animate to `target`.
    ///
    /// Dropped without side effects while a transition is in flight, when
    /// `target` is already current, or when `target` shows two panes in
    /// portrait.
    pub fn request_transition(&mut self, target: VisibilityState) -> TransitionOutcome {
        if let Some(reason) = self.rejection(target) {
            debug!(
                target: "tripane.transition",
                from = %self.state,
                to = %target,
                orientation = %self.orientation,
                reason = reason.as_str(),
                "transition rejected"
            );
            return TransitionOutcome::Rejected(reason);
        }

        let from = self.state;
        let _span = debug_span!(
            "tripane.transition",
            from = %from,
            to = %target,
            orientation = %self.orientation,
            animated = true,
        )
        .entered();

        let constants = self.ensure_constants();
        self.pin_row(constants);
        self.guard.engage();

        self.observers.notify_begin(from, target);

        let plan = plan_transition(from, target, self.orientation, constants);
        let instructions = plan.len();
        for instruction in plan {
            self.apply_instruction(instruction);
            self.sink.dispatch(instruction);
        }

        self.state = target;
        self.observers.notify_applied(target);

        debug!(target: "tripane.transition", instructions, "transition applied");
        TransitionOutcome::Applied
    }

    /// Route a toggle-control press through [`request_transition`](Self::request_transition).
    pub fn toggle(&mut self, control: ToggleControl) -> TransitionOutcome {
        match control.resolve(self.state, self.orientation) {
            Some(target) => self.request_transition(target),
            None => {
                debug!(
                    target: "tripane.transition",
                    control = ?control,
                    state = %self.state,
                    "toggle has no route"
                );
                TransitionOutcome::Rejected(RejectReason::NoRoute)
            }
        }
    }

    /// Apply `target` without animation, rebuilding geometry for the
    /// current orientation.
    ///
    /// Clears the guard. Panes return to weight sizing for `target`, and
    /// constants are recomputed immediately. Observers are notified only if
    /// the state actually changes.
    pub fn apply_orientation_reset(&mut self, target: VisibilityState) -> TransitionOutcome {
        if !target.is_valid_for(self.orientation) {
            debug!(
                target: "tripane.transition",
                to = %target,
                orientation = %self.orientation,
                reason = RejectReason::RequiresLandscape.as_str(),
                "orientation reset rejected"
            );
            return TransitionOutcome::Rejected(RejectReason::RequiresLandscape);
        }

        let from = self.state;
        let _span = debug_span!(
            "tripane.transition",
            from = %from,
            to = %target,
            orientation = %self.orientation,
            animated = false,
        )
        .entered();

        self.guard.release();
        self.constants = None;
        self.ensure_constants();
        self.sizing = weighted_sizing(target);
        self.row_offset = 0;
        self.pinned = false;
        self.sink.request_layout();

        if from == target {
            debug!(target: "tripane.transition", "geometry remeasured");
            return TransitionOutcome::Remeasured;
        }

        self.observers.notify_begin(from, target);
        self.state = target;
        self.observers.notify_applied(target);

        debug!(target: "tripane.transition", instructions = 0_usize, "transition applied");
        TransitionOutcome::Applied
    }

    /// The host's orientation changed to `orientation`.
    ///
    /// Stores the new orientation, remaps the state, and applies it with
    /// [`apply_orientation_reset`](Self::apply_orientation_reset). Reporting
    /// the orientation that is already stored only re-measures.
    pub fn notify_orientation_changed(&mut self, orientation: Orientation) -> TransitionOutcome {
        let old = self.orientation;
        let target = remap_for_orientation_change(old, orientation, self.state);
        info!(
            target: "tripane.transition",
            from_orientation = %old,
            to_orientation = %orientation,
            from = %self.state,
            to = %target,
            "orientation changed"
        );
        self.orientation = orientation;
        self.apply_orientation_reset(target)
    }

    /// Convenience for hosts that only know their viewport dimensions.
    pub fn notify_viewport_resized(&mut self, width: u32, height: u32) -> TransitionOutcome {
        self.notify_orientation_changed(Orientation::from_dimensions(width, height))
    }

    /// Forward elapsed time to the guard's scheduled release.
    pub fn tick(&mut self, dt: Duration) -> Option<GuardRelease> {
        self.guard.tick(dt)
    }

    /// The host's animation player reported completion; clear the guard
    /// without waiting for its timeout.
    pub fn animation_finished(&mut self) -> Option<GuardRelease> {
        self.guard.release()
    }

    fn rejection(&self, target: VisibilityState) -> Option<RejectReason> {
        if self.guard.is_engaged() {
            Some(RejectReason::Busy)
        } else if target == self.state {
            Some(RejectReason::AlreadyActive)
        } else if !target.is_valid_for(self.orientation) {
            Some(RejectReason::RequiresLandscape)
        } else {
            None
        }
    }

    fn ensure_constants(&mut self) -> GeometryConstants {
        if let Some(constants) = self.constants {
            return constants;
        }
        let available_width = self.width_source.available_width();
        let constants = compute_constants(self.orientation, available_width);
        debug!(
            target: "tripane.geometry",
            orientation = %self.orientation,
            available_width,
            minor_width = constants.minor_width,
            major_width = constants.major_width,
            "geometry constants computed"
        );
        self.constants = Some(constants);
        self.pinned = false;
        constants
    }

    fn pin_row(&mut self, constants: GeometryConstants) {
        if self.pinned {
            return;
        }
        let row = row_geometry(self.state, self.orientation, constants);
        self.sizing = row.widths.map(PaneSizing::Pixels);
        self.row_offset = row.offset;
        self.pinned = true;
        self.sink.request_layout();
    }

    fn apply_instruction(&mut self, instruction: AnimationInstruction) {
        match instruction {
            AnimationInstruction::Translate { to_offset, .. } => self.row_offset = to_offset,
            AnimationInstruction::Resize { pane, to, .. } => {
                self.sizing[pane.index()] = PaneSizing::Pixels(to);
            }
        }
    }
}

impl<P, W, S> PaneController<P, W, S> {
    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn current_state(&self) -> VisibilityState {
        self.state
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cached geometry constants; `None` until the first transition after
    /// construction.
    #[must_use]
    pub fn constants(&self) -> Option<GeometryConstants> {
        self.constants
    }

    /// Whether the guard is blocking new transitions.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.guard.is_engaged()
    }

    #[must_use]
    pub fn guard(&self) -> &TransitionGuard {
        &self.guard
    }

    #[must_use]
    pub fn row_offset(&self) -> i32 {
        self.row_offset
    }

    #[must_use]
    pub fn pane(&self, pane: Pane) -> PaneRef<'_, P> {
        PaneRef {
            pane,
            content: &self.panes[pane.index()],
            sizing: self.sizing[pane.index()],
            row_offset: self.row_offset,
        }
    }

    #[must_use]
    pub fn left(&self) -> PaneRef<'_, P> {
        self.pane(Pane::Left)
    }

    #[must_use]
    pub fn middle(&self) -> PaneRef<'_, P> {
        self.pane(Pane::Middle)
    }

    #[must_use]
    pub fn right(&self) -> PaneRef<'_, P> {
        self.pane(Pane::Right)
    }

    /// Shared observer registry.
    #[must_use]
    pub fn observers(&self) -> &Rc<ObserverRegistry> {
        &self.observers
    }

    pub fn subscribe(&self, observer: SharedObserver) {
        self.observers.subscribe(observer);
    }

    pub fn unsubscribe(&self, observer: &SharedObserver) -> bool {
        self.observers.unsubscribe(observer)
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[must_use]
    pub fn width_source(&self) -> &W {
        &self.width_source
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
