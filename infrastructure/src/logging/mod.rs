//! Structured attempt logging.
//!
//! Provides [`JsonlGenerationLog`], a JSONL file writer that implements
//! the [`GenerationLog`](decksmith_application::GenerationLog) port.

mod jsonl_log;

pub use jsonl_log::JsonlGenerationLog;
