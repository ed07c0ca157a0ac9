#![forbid(unsafe_code)]

//! Adaptive three-pane layout.
//!
//! Three side-by-side panes (left, middle, right) of which one or two are
//! visible at a time. Landscape devices may show two adjacent panes split
//! 35/65; portrait devices show exactly one pane filling the screen.
//!
//! # Usage
//!
//! ```
//! use tripane_layout::{
//!     FixedWidth, Orientation, PaneController, PaneLayoutConfig, RecordingSink,
//!     TransitionOutcome, VisibilityState,
//! };
//!
//! let sink = RecordingSink::new();
//! let mut controller = PaneController::new(
//!     vec!["categories", "tasks", "detail"],
//!     Orientation::Landscape,
//!     &PaneLayoutConfig::default(),
//!     FixedWidth(1280),
//!     sink.clone(),
//! )
//! .unwrap();
//!
//! assert_eq!(controller.current_state(), VisibilityState::LeftAndMiddle);
//! let outcome = controller.request_transition(VisibilityState::MiddleAndRight);
//! assert_eq!(outcome, TransitionOutcome::Applied);
//! assert_eq!(sink.instructions().len(), 2);
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod guard;
pub mod observer;
pub mod orchestrator;
pub mod orientation;
pub mod state;
pub mod toggle;

pub use config::{PaneLayoutConfig, initial_state_from_markup};
pub use controller::{
    FixedWidth, PaneController, PaneRef, RejectReason, TransitionOutcome, WidthSource,
};
pub use error::LayoutError;
pub use geometry::{
    GeometryConstants, PaneSizing, PaneWeights, RowGeometry, compute_constants, compute_weights,
    row_geometry,
};
pub use guard::{GUARD_TIMEOUT, GuardRelease, TransitionGuard};
pub use observer::{ObserverRegistry, SharedObserver, StateObserver};
pub use orchestrator::plan_transition;
pub use orientation::remap_for_orientation_change;
pub use state::{ParseVisibilityStateError, VisibilityState};
pub use toggle::ToggleControl;

pub use tripane_core::animation::{
    ANIMATION_DURATION, AnimationInstruction, AnimationKind, AnimationSink, AnimationTarget,
    RecordingSink,
};
pub use tripane_core::geometry::{Orientation, Pane};
