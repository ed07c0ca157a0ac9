//! Property tests: random streams of transition requests, toggles, ticks,
//! and rotations against the public controller API.
//!
//! After every step the controller must hold a state valid for its
//! orientation, and the pinned row (once pinned) must exactly cover the
//! viewport with the visible panes.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use proptest::prelude::*;
use tripane_layout::{
    FixedWidth, Orientation, PaneController, PaneSizing, RecordingSink, StateObserver,
    ToggleControl, TransitionOutcome, VisibilityState, compute_weights, remap_for_orientation_change,
};

#[derive(Debug, Clone)]
enum Step {
    Request(VisibilityState),
    Toggle(ToggleControl),
    Tick(u64),
    Finish,
    Rotate(Orientation),
}

fn state_strategy() -> impl Strategy<Value = VisibilityState> {
    prop::sample::select(VisibilityState::ALL.to_vec())
}

fn orientation_strategy() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Landscape), Just(Orientation::Portrait)]
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => state_strategy().prop_map(Step::Request),
        2 => prop::sample::select(vec![
            ToggleControl::LeftPane,
            ToggleControl::MiddleLeading,
            ToggleControl::MiddleTrailing,
            ToggleControl::RightPane,
        ])
        .prop_map(Step::Toggle),
        3 => (0u64..600).prop_map(Step::Tick),
        1 => Just(Step::Finish),
        1 => orientation_strategy().prop_map(Step::Rotate),
    ]
}

#[derive(Default)]
struct Counts {
    begins: Cell<usize>,
    applied: Cell<usize>,
}

impl StateObserver for Counts {
    fn on_begin_transition(&self, _old: VisibilityState, _new: VisibilityState) {
        self.begins.set(self.begins.get() + 1);
    }

    fn on_state_applied(&self, _new: VisibilityState) {
        self.applied.set(self.applied.get() + 1);
    }
}

proptest! {
    #[test]
    fn weights_sum_to_one_for_every_state(state in state_strategy()) {
        let weights = compute_weights(state);
        prop_assert!((weights.sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rotation_always_yields_a_showable_state(
        old in orientation_strategy(),
        new in orientation_strategy(),
        state in state_strategy(),
    ) {
        prop_assume!(state.is_valid_for(old));
        let mapped = remap_for_orientation_change(old, new, state);
        prop_assert!(mapped.is_valid_for(new));
        if old == new {
            prop_assert_eq!(mapped, state);
        }
    }

    #[test]
    fn random_steps_preserve_controller_invariants(
        width in 1u32..4000,
        start_orientation in orientation_strategy(),
        steps in prop::collection::vec(step_strategy(), 1..64),
    ) {
        let counts = Rc::new(Counts::default());
        let sink = RecordingSink::new();
        let mut controller = PaneController::with_initial_state(
            vec![(), (), ()],
            start_orientation,
            VisibilityState::Middle,
            FixedWidth(width),
            sink.clone(),
        )
        .expect("middle is valid in every orientation");
        controller.subscribe(counts.clone());

        for step in steps {
            let before = controller.current_state();
            let was_busy = controller.is_transitioning();

            let outcome = match step {
                Step::Request(target) => Some(controller.request_transition(target)),
                Step::Toggle(control) => Some(controller.toggle(control)),
                Step::Tick(ms) => {
                    controller.tick(Duration::from_millis(ms));
                    None
                }
                Step::Finish => {
                    controller.animation_finished();
                    None
                }
                Step::Rotate(orientation) => Some(controller.notify_orientation_changed(orientation)),
            };

            let state = controller.current_state();
            prop_assert!(state.is_valid_for(controller.orientation()));

            match outcome {
                Some(TransitionOutcome::Applied) => prop_assert_ne!(state, before),
                Some(_) | None => prop_assert_eq!(state, before),
            }

            if matches!(step, Step::Request(_) | Step::Toggle(_)) && was_busy {
                prop_assert!(!matches!(outcome, Some(TransitionOutcome::Applied)));
            }

            prop_assert_eq!(counts.begins.get(), counts.applied.get());

            let pinned: Option<Vec<u32>> = [controller.left(), controller.middle(), controller.right()]
                .iter()
                .map(|pane| pane.sizing.pixels())
                .collect();
            if let Some(widths) = pinned {
                let offset = i64::from(controller.row_offset());
                let mut x = offset;
                let mut covered = 0i64;
                for (pane, w) in [controller.left(), controller.middle(), controller.right()]
                    .iter()
                    .zip(&widths)
                {
                    if state.shows(pane.pane) {
                        prop_assert!(x >= 0);
                        covered += i64::from(*w);
                    }
                    x += i64::from(*w);
                }
                prop_assert_eq!(covered, i64::from(width));
            } else {
                for pane in [controller.left(), controller.middle(), controller.right()] {
                    let expected = compute_weights(state).get(pane.pane);
                    prop_assert_eq!(pane.sizing, PaneSizing::Weight(expected));
                }
            }
        }
    }
}
