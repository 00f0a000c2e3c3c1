//! Prompt domain
//!
//! Deterministic templates for every generation call.

mod deck;

pub use deck::DeckPrompts;
