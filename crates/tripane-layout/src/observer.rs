#![forbid(unsafe_code)]

//! Observer registry for transition notifications.
//!
//! # Design
//!
//! Observers are shared, reference-counted trait objects
//! (`Rc<dyn StateObserver>`). The registry itself is shared too: the
//! controller keeps one handle and any observer may keep another, so an
//! observer can unsubscribe itself (or others) from inside a callback.
//!
//! # Invariants
//!
//! 1. Notification order is subscription order.
//! 2. Each notification pass iterates a snapshot taken when the pass starts;
//!    subscribing or unsubscribing during a pass affects the next pass only.
//! 3. Subscribing the same observer twice registers it twice, and it is then
//!    notified twice per pass. Nothing is deduplicated.
//! 4. `unsubscribe` removes the earliest matching registration; removing an
//!    observer that is not registered is a no-op.
//!
//! # Failure Modes
//!
//! - A panicking observer unwinds through the controller; the registry does
//!   not catch it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::state::VisibilityState;

/// Capability notified around every visibility transition.
///
/// Both callbacks may be invoked any number of times and must not panic.
pub trait StateObserver {
    /// Called before the panes start moving from `old` to `new`.
    fn on_begin_transition(&self, old: VisibilityState, new: VisibilityState);

    /// Called once `new` is the controller's current state. The panes may
    /// still be animating.
    fn on_state_applied(&self, new: VisibilityState);
}

/// Shared handle to an observer.
pub type SharedObserver = Rc<dyn StateObserver>;

/// Ordered list of observers.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: RefCell<Vec<SharedObserver>>,
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("len", &self.len())
            .finish()
    }
}

impl ObserverRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry already wrapped for sharing.
    #[must_use]
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    /// Append `observer` to the notification order.
    pub fn subscribe(&self, observer: SharedObserver) {
        self.observers.borrow_mut().push(observer);
    }

    /// Remove the earliest registration of `observer`.
    ///
    /// Returns whether anything was removed.
    pub fn unsubscribe(&self, observer: &SharedObserver) -> bool {
        let mut observers = self.observers.borrow_mut();
        match observers.iter().position(|o| Rc::ptr_eq(o, observer)) {
            Some(idx) => {
                observers.remove(idx);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.borrow().is_empty()
    }

    /// Current registrations, in notification order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<SharedObserver> {
        self.observers.borrow().clone()
    }

    /// Deliver `on_begin_transition` to a snapshot of the registry.
    pub fn notify_begin(&self, old: VisibilityState, new: VisibilityState) {
        for observer in self.snapshot() {
            observer.on_begin_transition(old, new);
        }
    }

    /// Deliver `on_state_applied` to a snapshot of the registry.
    pub fn notify_applied(&self, new: VisibilityState) {
        for observer in self.snapshot() {
            observer.on_state_applied(new);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
