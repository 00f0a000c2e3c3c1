//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod build_deck;
pub mod fetch_section;
pub mod suggest_decks;
