//! Domain layer for decksmith
//!
//! This crate contains the core business logic, entities, and value
//! objects. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Chunked generation
//!
//! A deck is never requested in one completion call. It is decomposed
//! into independent chunks (one per card section plus one strategy
//! fragment), each fetched and validated against its expected
//! cardinality under a bounded retry policy ([`generation::fetch`]).
//!
//! ## Progressive assembly
//!
//! Sections resolve in arbitrary order; [`generation::assembly`] merges
//! whatever is ready into a view that renders identically regardless of
//! arrival order. A failed section never blocks its siblings.

pub mod core;
pub mod deck;
pub mod generation;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use core::{error::DomainError, game::Game};
pub use deck::{
    card::{CardCategory, CardEntry},
    export::deck_list,
    request::{BudgetTier, DeckRequest, PlayType, PowerTier},
    section::DeckSection,
    strategy::{StrategyBundle, Synergy, SynergyType, strategy_token_budget},
    summary::DeckSummary,
};
pub use generation::{
    assembly::{DeckAssembly, FullDeck, SectionResult, SectionStatus, StrategySlot},
    fault::{ChunkRejection, SectionFailure, ServiceFault},
    fetch::{ChunkFetch, FetchState, MAX_ATTEMPTS, RetryReason},
    validate::{
        ACCEPT_RATIO, SUGGESTION_COUNT, parse_card_chunk, parse_strategy_chunk, parse_suggestions,
    },
};
pub use prompt::DeckPrompts;
