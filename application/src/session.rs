//! Session access gate
//!
//! When a password is configured, generation is locked until the user
//! supplies it once. The persisted flag is read a single time at
//! startup; after that the running session is the only authority, so
//! edits to the stored flag mid-run have no effect.

use crate::ports::access::AccessStore;

/// Where a session stands with the access gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    /// No password configured; the gate is disabled.
    Open,
    /// Password verified, now or in a previous session.
    Granted,
    /// Password required and not yet verified.
    Locked,
}

#[derive(Debug)]
pub struct Session {
    access: AccessState,
}

impl Session {
    /// Fix the starting state from configuration and the stored flag.
    pub fn init(password_required: bool, store: &dyn AccessStore) -> Self {
        let access = if !password_required {
            AccessState::Open
        } else if store.load_granted() {
            AccessState::Granted
        } else {
            AccessState::Locked
        };
        Self { access }
    }

    pub fn access(&self) -> AccessState {
        self.access
    }

    /// Whether generation may proceed.
    pub fn is_unlocked(&self) -> bool {
        matches!(self.access, AccessState::Open | AccessState::Granted)
    }

    /// Record a successful password check and persist it.
    pub fn grant(&mut self, store: &dyn AccessStore) {
        self.access = AccessState::Granted;
        store.save_granted();
    }

    /// Drop access here and in the store. An `Open` session stays open;
    /// there is no password that could re-lock it.
    pub fn revoke(&mut self, store: &dyn AccessStore) {
        if self.access == AccessState::Granted {
            self.access = AccessState::Locked;
        }
        store.clear();
    }
}
