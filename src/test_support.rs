//! Tracing capture used by unit tests.
//!
//! Records every event (message plus fields) and every value recorded on a
//! span after creation, in the order they happen.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::span::{Id, Record};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub message: String,
    pub fields: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct CapturedRecord {
    pub span: String,
    pub fields: HashMap<String, String>,
}

#[derive(Default)]
struct FieldVisitor(HashMap<String, String>);

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}

#[derive(Clone, Default)]
pub struct Captured {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl Captured {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Position of the first event with this message
    pub fn position(&self, message: &str) -> Option<usize> {
        self.events().iter().position(|e| e.message == message)
    }
}

struct CaptureLayer(Captured);

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        let mut fields = visitor.0;
        let message = fields.remove("message").unwrap_or_default();
        self.0
            .events
            .lock()
            .unwrap()
            .push(CapturedEvent { message, fields });
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        values.record(&mut visitor);
        let span = ctx
            .span(id)
            .map(|s| s.name().to_string())
            .unwrap_or_default();
        self.0.records.lock().unwrap().push(CapturedRecord {
            span,
            fields: visitor.0,
        });
    }
}

/// Install a capturing subscriber on the current thread until the guard drops.
///
/// `#[tokio::test]` runs on a current-thread runtime, so everything the test
/// awaits is seen by this subscriber.
pub fn capture() -> (Captured, tracing::subscriber::DefaultGuard) {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::registry().with(CaptureLayer(captured.clone()));
    let guard = tracing::subscriber::set_default(subscriber);
    (captured, guard)
}
