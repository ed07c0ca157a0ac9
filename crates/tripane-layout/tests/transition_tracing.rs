//! Structured logging emitted by the controller, captured through a
//! `tracing_subscriber` layer.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tripane_layout::{
    FixedWidth, Orientation, PaneController, PaneLayoutConfig, RecordingSink, VisibilityState,
};

#[derive(Debug, Clone)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
}

#[derive(Debug, Clone)]
struct CapturedEvent {
    target: String,
    fields: HashMap<String, String>,
}

type Shared<T> = Arc<Mutex<Vec<T>>>;

struct Capture {
    spans: Shared<CapturedSpan>,
    events: Shared<CapturedEvent>,
}

struct CaptureHandle {
    spans: Shared<CapturedSpan>,
    events: Shared<CapturedEvent>,
}

impl CaptureHandle {
    fn spans_named(&self, name: &str) -> Vec<CapturedSpan> {
        self.spans
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.name == name)
            .cloned()
            .collect()
    }

    fn events_with(&self, target: &str, message: &str) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| {
                e.target == target && e.fields.get("message").is_some_and(|m| m.contains(message))
            })
            .cloned()
            .collect()
    }
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        self.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            target: event.metadata().target().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }
}

fn with_captured_tracing<F: FnOnce()>(f: F) -> CaptureHandle {
    let spans = Arc::new(Mutex::new(Vec::new()));
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = Capture {
        spans: Arc::clone(&spans),
        events: Arc::clone(&events),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    CaptureHandle { spans, events }
}

fn landscape(initial: VisibilityState) -> PaneController<(), FixedWidth, RecordingSink> {
    PaneController::with_initial_state(
        vec![(), (), ()],
        Orientation::Landscape,
        initial,
        FixedWidth(1000),
        RecordingSink::new(),
    )
    .unwrap()
}

#[test]
fn accepted_transition_emits_span_and_events() {
    let handle = with_captured_tracing(|| {
        let mut controller = landscape(VisibilityState::LeftAndMiddle);
        controller.request_transition(VisibilityState::Middle);
    });

    let spans = handle.spans_named("tripane.transition");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].fields.get("from").map(String::as_str), Some("left_and_middle_visible"));
    assert_eq!(spans[0].fields.get("to").map(String::as_str), Some("middle_visible"));
    assert_eq!(spans[0].fields.get("animated").map(String::as_str), Some("true"));

    let computed = handle.events_with("tripane.geometry", "constants computed");
    assert_eq!(computed.len(), 1);
    assert_eq!(computed[0].fields.get("minor_width").map(String::as_str), Some("350"));

    assert_eq!(handle.events_with("tripane.guard", "engaged").len(), 1);
    let applied = handle.events_with("tripane.transition", "transition applied");
    assert_eq!(applied[0].fields.get("instructions").map(String::as_str), Some("2"));
}

#[test]
fn rejected_transition_logs_reason() {
    let handle = with_captured_tracing(|| {
        let mut controller = landscape(VisibilityState::Middle);
        controller.request_transition(VisibilityState::Middle);
    });

    assert!(handle.spans_named("tripane.transition").is_empty());
    let rejected = handle.events_with("tripane.transition", "rejected");
    assert_eq!(rejected.len(), 1);
    assert_eq!(
        rejected[0].fields.get("reason").map(String::as_str),
        Some("already_active")
    );
}

#[test]
fn unknown_markup_state_logs_fallback() {
    let handle = with_captured_tracing(|| {
        let config = PaneLayoutConfig::with_initial_state("middle_visible");
        let controller = PaneController::new(
            vec![(), (), ()],
            Orientation::Landscape,
            &config,
            FixedWidth(1000),
            RecordingSink::new(),
        )
        .unwrap();
        assert_eq!(controller.current_state(), VisibilityState::LeftAndMiddle);
    });

    let fallback = handle.events_with("tripane.config", "unsupported initial state");
    assert_eq!(fallback.len(), 1);
    assert_eq!(fallback[0].fields.get("value").map(String::as_str), Some("middle_visible"));
}

#[test]
fn rotation_logs_orientation_change() {
    let handle = with_captured_tracing(|| {
        let mut controller = landscape(VisibilityState::MiddleAndRight);
        controller.notify_orientation_changed(Orientation::Portrait);
    });

    let changed = handle.events_with("tripane.transition", "orientation changed");
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].fields.get("to").map(String::as_str), Some("right_visible"));

    let spans = handle.spans_named("tripane.transition");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].fields.get("animated").map(String::as_str), Some("false"));
}
