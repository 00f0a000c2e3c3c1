//! Application layer for decksmith
//!
//! This crate contains use cases, port definitions, and the session
//! access gate. It depends only on the domain layer.

pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    access::AccessStore,
    card_catalog::{CardCatalog, CardPrinting, NoCatalog},
    completion::{CompletionError, CompletionGateway},
    generation_log::{GenerationEvent, GenerationLog, NoGenerationLog},
    progress::{BuildProgress, NoProgress},
};
pub use session::{AccessState, Session};
pub use use_cases::build_deck::BuildDeckUseCase;
pub use use_cases::fetch_section::FetchSectionUseCase;
pub use use_cases::suggest_decks::{
    SUGGESTION_TOKEN_BUDGET, SuggestDecksError, SuggestDecksUseCase,
};
