//! Access flag persistence port
//!
//! Stores the one bit the password gate needs across sessions: whether
//! a previous session already unlocked the tool.

pub trait AccessStore: Send + Sync {
    /// Whether a previous session passed the gate.
    fn load_granted(&self) -> bool;

    /// Persist a successful unlock.
    fn save_granted(&self);

    /// Forget the persisted unlock.
    fn clear(&self);
}
