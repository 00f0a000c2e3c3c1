//! Failure taxonomy for chunk generation
//!
//! Two families of trouble, kept distinct because they are handled
//! differently:
//!
//! - [`ChunkRejection`]: the service answered but the content was
//!   unusable. Always worth another attempt.
//! - [`ServiceFault`]: the call itself failed. Some fault classes are
//!   worth retrying, others burn money or cannot succeed and
//!   short-circuit the section immediately.
//!
//! [`SectionFailure`] is the terminal record a section carries once its
//! attempt budget is spent or a fatal fault lands.

use thiserror::Error;

/// Validator verdict that sends a chunk back for another attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkRejection {
    /// Response was not parseable as the expected JSON shape
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Parsed fine but came back too light
    #[error("insufficient cardinality: {total} of {expected} cards")]
    InsufficientCardinality { total: u32, expected: u32 },
}

/// Classified failure from the completion service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceFault {
    /// Credentials rejected
    Auth,
    /// Throttled; safe to retry after backing off
    RateLimited,
    /// Account out of credits; every further call fails the same way
    QuotaExhausted,
    /// Timeouts, connection failures, server-side errors
    Transient,
    /// Anything the adapter could not classify
    Unknown,
}

impl ServiceFault {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceFault::Auth => "auth",
            ServiceFault::RateLimited => "rate-limited",
            ServiceFault::QuotaExhausted => "quota-exhausted",
            ServiceFault::Transient => "transient",
            ServiceFault::Unknown => "unknown",
        }
    }

    /// Whether another attempt may succeed.
    ///
    /// Auth and quota failures would fail identically on retry.
    /// Unknown faults are not retried either: without a classification
    /// there is no basis for expecting a different outcome.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ServiceFault::RateLimited | ServiceFault::Transient)
    }
}

impl std::fmt::Display for ServiceFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Terminal failure carried by a section that gave up
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionFailure {
    #[error("malformed response after all attempts: {0}")]
    MalformedResponse(String),

    #[error("only {total} of {expected} cards after all attempts")]
    InsufficientCardinality { total: u32, expected: u32 },

    #[error("completion service failure: {0}")]
    Service(ServiceFault),
}

impl SectionFailure {
    /// Quota failures mean no further call can succeed this session
    pub fn is_quota(&self) -> bool {
        matches!(self, SectionFailure::Service(ServiceFault::QuotaExhausted))
    }

    /// Short category word for status lines
    pub fn category(&self) -> &'static str {
        match self {
            SectionFailure::MalformedResponse(_) => "malformed",
            SectionFailure::InsufficientCardinality { .. } => "incomplete",
            SectionFailure::Service(fault) => fault.as_str(),
        }
    }
}

impl From<ChunkRejection> for SectionFailure {
    fn from(rejection: ChunkRejection) -> Self {
        match rejection {
            ChunkRejection::MalformedResponse(detail) => SectionFailure::MalformedResponse(detail),
            ChunkRejection::InsufficientCardinality { total, expected } => {
                SectionFailure::InsufficientCardinality { total, expected }
            }
        }
    }
}
