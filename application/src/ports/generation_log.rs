//! Generation log port
//!
//! Structured record of every completion attempt and its outcome,
//! distinct from tracing diagnostics. Adapters append events to
//! durable storage (JSONL file); the build never waits on them.

use serde_json::Value;

/// One recorded event in a generation run.
#[derive(Debug, Clone)]
pub struct GenerationEvent {
    /// Stable machine-readable tag, e.g. `"section_attempt"`.
    pub event_type: &'static str,
    /// Event-specific payload.
    pub payload: Value,
}

impl GenerationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Sink for generation events.
///
/// Logging must never fail or slow a build, so the method is
/// synchronous and infallible; adapters swallow their own I/O errors.
pub trait GenerationLog: Send + Sync {
    fn log(&self, event: GenerationEvent);
}

/// Drops every event. Default when attempt logging is disabled.
pub struct NoGenerationLog;

impl GenerationLog for NoGenerationLog {
    fn log(&self, _event: GenerationEvent) {}
}
