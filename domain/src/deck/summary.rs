//! Deck summary entity

use serde::{Deserialize, Serialize};

use crate::core::game::Game;

/// A proposed deck, as returned by the multi-suggestion call (Entity)
///
/// Immutable once parsed. The summary is the shared input to every
/// downstream section and strategy request; sections never mutate it.
///
/// The generation schema keeps the per-game field names (`commander` /
/// `pilot`, `colors` / `forces`); serde aliases fold both spellings
/// into one typed shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSummary {
    pub id: String,
    pub game: Game,
    pub name: String,
    /// Commander (Mtg) or pilot (Gundam)
    #[serde(alias = "commander", alias = "pilot")]
    pub leader: String,
    #[serde(default)]
    pub description: String,
    pub strategy: String,
    #[serde(default)]
    pub estimated_cost: u32,
    #[serde(default)]
    pub key_cards: Vec<String>,
    /// Colors (Mtg) or forces (Gundam)
    #[serde(default, alias = "colors", alias = "forces")]
    pub factions: Vec<String>,
    #[serde(default)]
    pub power_level: u8,
}

impl DeckSummary {
    /// Faction list joined for prompt and display use
    pub fn factions_joined(&self) -> String {
        self.factions.join(", ")
    }
}
