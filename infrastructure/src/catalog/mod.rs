//! Card catalog adapters

pub mod scryfall;

pub use scryfall::ScryfallCardCatalog;
