//! Completion gateway port
//!
//! The single outbound seam of the generation pipeline. Every chunk
//! (suggestions, card sections, strategy) goes through one call on
//! this trait; adapters in the infrastructure layer decide which
//! service actually answers.

use async_trait::async_trait;
use decksmith_domain::ServiceFault;
use thiserror::Error;

/// A failed completion call, already classified for retry decisions.
///
/// Adapters map transport and HTTP detail onto a [`ServiceFault`] so
/// the retry logic upstream never inspects status codes or error
/// strings itself.
#[derive(Error, Debug, Clone)]
#[error("{fault}: {message}")]
pub struct CompletionError {
    fault: ServiceFault,
    message: String,
}

impl CompletionError {
    pub fn new(fault: ServiceFault, message: impl Into<String>) -> Self {
        Self {
            fault,
            message: message.into(),
        }
    }

    pub fn fault(&self) -> ServiceFault {
        self.fault
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Single-shot text completion against a generation service.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send one prompt and return the raw response text.
    ///
    /// `max_tokens` caps the response length; callers pick it per
    /// chunk and attempt. The returned text is unparsed, validation
    /// belongs to the caller.
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, CompletionError>;
}
