//! Deck vocabulary: the user's brief, proposed summaries, card
//! entries, generated sections, and play guidance.
//!
//! - [`request::DeckRequest`]: the user's brief for the suggestion call
//! - [`summary::DeckSummary`]: one proposed deck, shared input to all sections
//! - [`card::CardEntry`]: one deck-list entry with its category
//! - [`section::DeckSection`]: the independently generated deck slices
//! - [`strategy::StrategyBundle`]: synergies and play guidance
//! - [`export`]: plain-text deck list rendering

pub mod card;
pub mod export;
pub mod request;
pub mod section;
pub mod strategy;
pub mod summary;
