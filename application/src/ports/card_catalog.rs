//! Card catalog port
//!
//! Optional lookup of printed card detail (type line, rules text,
//! image) for display. Lookups are cosmetic: a miss or a transport
//! failure just leaves those lines out and never affects validation,
//! counts, or completeness.

use async_trait::async_trait;

/// Printed details for one card, as the catalog knows it.
#[derive(Debug, Clone, PartialEq)]
pub struct CardPrinting {
    pub name: String,
    pub type_line: Option<String>,
    pub oracle_text: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub image_url: Option<String>,
}

/// Exact-name card lookup.
#[async_trait]
pub trait CardCatalog: Send + Sync {
    /// `None` covers both "no such card" and any lookup failure.
    async fn lookup(&self, name: &str) -> Option<CardPrinting>;
}

/// Catalog that never finds anything. Used when detail display is
/// disabled or no catalog is configured for the game.
pub struct NoCatalog;

#[async_trait]
impl CardCatalog for NoCatalog {
    async fn lookup(&self, _name: &str) -> Option<CardPrinting> {
        None
    }
}
