//! Span capture for verifying mapping instrumentation
//!
//! Installs a thread-local subscriber whose layer records every span
//! created while the returned guard is alive.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::span::{Attributes, Id};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;

/// A span as created
#[derive(Debug, Clone)]
pub struct CapturedSpan {
    pub name: &'static str,
    pub fields: HashMap<String, String>,
    pub parent: Option<&'static str>,
}

/// Spans captured so far, in creation order
#[derive(Debug, Clone, Default)]
pub struct SpanStore(Arc<Mutex<Vec<CapturedSpan>>>);

impl SpanStore {
    pub fn spans(&self) -> Vec<CapturedSpan> {
        self.0.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().iter().map(|s| s.name).collect()
    }

    pub fn named(&self, name: &str) -> Vec<CapturedSpan> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.name == name)
            .cloned()
            .collect()
    }
}

struct CaptureLayer(SpanStore);

struct FieldRecorder<'a>(&'a mut HashMap<String, String>);

impl tracing::field::Visit for FieldRecorder<'_> {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        attrs.record(&mut FieldRecorder(&mut fields));

        let parent = match attrs.parent() {
            Some(parent_id) => ctx.span(parent_id).map(|span| span.name()),
            None if attrs.is_contextual() => ctx.lookup_current().map(|span| span.name()),
            None => None,
        };

        self.0 .0.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name(),
            fields,
            parent,
        });
    }
}

/// Capture spans on the current thread until the guard is dropped
pub fn capture_spans() -> (SpanStore, tracing::subscriber::DefaultGuard) {
    let store = SpanStore::default();
    let subscriber = tracing_subscriber::registry().with(CaptureLayer(store.clone()));
    let guard = tracing::subscriber::set_default(subscriber);
    (store, guard)
}
