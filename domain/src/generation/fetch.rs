//! Bounded-retry state machine for one chunk fetch
//!
//! Every chunk (card section or strategy fragment) moves through the
//! same lifecycle:
//!
//! ```text
//! Idle -> Requesting -> Validating -> Ready
//!            |   ^            |
//!            |   '- Retrying <'      (budget left, reason retryable)
//!            v            |
//!          Failed <-------'          (budget spent or fatal fault)
//! ```
//!
//! `Ready` and `Failed` are terminal; a failed chunk is never revived.
//! Re-fetching a section means constructing a brand-new machine.
//!
//! The machine is generic over its payload so card sections
//! (`Vec<CardEntry>`) and the strategy fragment (`StrategyBundle`)
//! share one retry policy.

use crate::generation::fault::{ChunkRejection, SectionFailure, ServiceFault};

/// Maximum completion attempts for one chunk
pub const MAX_ATTEMPTS: u32 = 3;

/// Why the previous attempt did not produce a ready chunk
#[derive(Debug, Clone, PartialEq)]
pub enum RetryReason {
    /// The response arrived but the validator sent it back
    Rejected(ChunkRejection),
    /// The call itself failed with a retryable fault
    Service(ServiceFault),
}

impl std::fmt::Display for RetryReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RetryReason::Rejected(rejection) => write!(f, "{rejection}"),
            RetryReason::Service(fault) => write!(f, "service fault: {fault}"),
        }
    }
}

/// Where a chunk fetch currently stands
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Created, no attempt issued yet
    Idle,
    /// Attempt `attempt` has a completion call in flight
    Requesting { attempt: u32 },
    /// Attempt `attempt` returned text that is being validated
    Validating { attempt: u32 },
    /// The last attempt failed for a retryable reason; budget remains
    Retrying { attempt: u32, reason: RetryReason },
    /// Validated content (terminal)
    Ready(T),
    /// Attempt budget spent or fatal fault (terminal)
    Failed(SectionFailure),
}

impl<T> FetchState<T> {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FetchState::Ready(_) | FetchState::Failed(_))
    }

    fn name(&self) -> &'static str {
        match self {
            FetchState::Idle => "idle",
            FetchState::Requesting { .. } => "requesting",
            FetchState::Validating { .. } => "validating",
            FetchState::Retrying { .. } => "retrying",
            FetchState::Ready(_) => "ready",
            FetchState::Failed(_) => "failed",
        }
    }
}

/// Drives one chunk from idle to ready or failed under the attempt
/// policy.
///
/// The attempt count lives in the state itself, not in the caller.
/// Transition methods panic when called out of order; the driving use
/// case owns the machine and calls them in lockstep with the request
/// it has in flight.
#[derive(Debug)]
pub struct ChunkFetch<T> {
    state: FetchState<T>,
}

impl<T> ChunkFetch<T> {
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Start the next attempt. Returns the 1-based attempt number.
    pub fn begin(&mut self) -> u32 {
        let attempt = match &self.state {
            FetchState::Idle => 1,
            FetchState::Retrying { attempt, .. } => attempt + 1,
            other => panic!("begin() called in {} state", other.name()),
        };
        debug_assert!(attempt <= MAX_ATTEMPTS);
        self.state = FetchState::Requesting { attempt };
        attempt
    }

    /// The completion call returned text; move to validation.
    pub fn response_received(&mut self) {
        match &self.state {
            FetchState::Requesting { attempt } => {
                self.state = FetchState::Validating { attempt: *attempt };
            }
            other => panic!("response_received() called in {} state", other.name()),
        }
    }

    /// Validator accepted the chunk (terminal).
    pub fn accept(&mut self, payload: T) {
        match &self.state {
            FetchState::Validating { .. } => self.state = FetchState::Ready(payload),
            other => panic!("accept() called in {} state", other.name()),
        }
    }

    /// Validator sent the chunk back. Retries while budget remains,
    /// fails once the last attempt is spent.
    pub fn reject(&mut self, rejection: ChunkRejection) {
        match &self.state {
            FetchState::Validating { attempt } => {
                if *attempt >= MAX_ATTEMPTS {
                    self.state = FetchState::Failed(rejection.into());
                } else {
                    self.state = FetchState::Retrying {
                        attempt: *attempt,
                        reason: RetryReason::Rejected(rejection),
                    };
                }
            }
            other => panic!("reject() called in {} state", other.name()),
        }
    }

    /// The completion call itself failed. Retryable faults consume the
    /// attempt and continue; fatal faults fail the chunk on the spot.
    pub fn service_failure(&mut self, fault: ServiceFault) {
        match &self.state {
            FetchState::Requesting { attempt } => {
                if fault.is_retryable() && *attempt < MAX_ATTEMPTS {
                    self.state = FetchState::Retrying {
                        attempt: *attempt,
                        reason: RetryReason::Service(fault),
                    };
                } else {
                    self.state = FetchState::Failed(SectionFailure::Service(fault));
                }
            }
            other => panic!("service_failure() called in {} state", other.name()),
        }
    }

    /// Consume the machine once terminal.
    pub fn into_outcome(self) -> Result<T, SectionFailure> {
        match self.state {
            FetchState::Ready(payload) => Ok(payload),
            FetchState::Failed(failure) => Err(failure),
            other => panic!("into_outcome() called in {} state", other.name()),
        }
    }
}

impl<T> Default for ChunkFetch<T> {
    fn default() -> Self {
        Self::new()
    }
}
