//! Scryfall card catalog adapter
//!
//! Exact-name lookups against the public Scryfall API. The catalog is
//! cosmetic by contract, so every failure path here degrades to `None`
//! with a debug log rather than an error.

use async_trait::async_trait;
use decksmith_application::ports::card_catalog::{CardCatalog, CardPrinting};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.scryfall.com";

/// Lookups are display polish; keep them short so a slow catalog
/// never holds up rendering for long.
const LOOKUP_TIMEOUT_SECS: u64 = 10;

pub struct ScryfallCardCatalog {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ScryfallCard {
    name: String,
    #[serde(default)]
    type_line: Option<String>,
    #[serde(default)]
    oracle_text: Option<String>,
    #[serde(default)]
    power: Option<String>,
    #[serde(default)]
    toughness: Option<String>,
    #[serde(default)]
    image_uris: Option<ImageUris>,
}

#[derive(Deserialize)]
struct ImageUris {
    #[serde(default)]
    normal: Option<String>,
}

impl ScryfallCardCatalog {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(LOOKUP_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ScryfallCardCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CardCatalog for ScryfallCardCatalog {
    async fn lookup(&self, name: &str) -> Option<CardPrinting> {
        let url = format!("{}/cards/named", self.base_url);
        let response = match self
            .client
            .get(&url)
            .query(&[("exact", name)])
            .header("User-Agent", "Decksmith/0.1 (Card Lookup)")
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                debug!("Card lookup failed for '{}': {}", name, error);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            // 404 is the normal miss for a made-up card name
            debug!("Card lookup for '{}' returned {}", name, status);
            return None;
        }

        let card: ScryfallCard = match response.json().await {
            Ok(card) => card,
            Err(error) => {
                debug!("Card lookup for '{}' returned bad JSON: {}", name, error);
                return None;
            }
        };

        Some(CardPrinting {
            name: card.name,
            type_line: card.type_line,
            oracle_text: card.oracle_text,
            power: card.power,
            toughness: card.toughness,
            image_url: card.image_uris.and_then(|uris| uris.normal),
        })
    }
}
