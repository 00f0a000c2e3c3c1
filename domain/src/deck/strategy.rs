//! Strategy bundle entity

use serde::{Deserialize, Serialize};

/// How a group of cards works together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SynergyType {
    Combo,
    Engine,
    Value,
    Protection,
}

impl SynergyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SynergyType::Combo => "combo",
            SynergyType::Engine => "engine",
            SynergyType::Value => "value",
            SynergyType::Protection => "protection",
        }
    }
}

impl std::fmt::Display for SynergyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named group of cards that play well together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synergy {
    pub cards: Vec<String>,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: SynergyType,
}

/// Play guidance for a deck (Entity)
///
/// Produced by one model call per deck, independent of every card
/// section. All five fields are required on parse; a response missing
/// any of them is malformed and goes back for another attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyBundle {
    pub synergies: Vec<Synergy>,
    pub opening_hand_priority: Vec<String>,
    pub win_conditions: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Output token budget for a strategy attempt (1-based).
///
/// Smaller than any card section budget; the bundle is prose lists,
/// not a long card array.
pub fn strategy_token_budget(attempt: u32) -> u32 {
    if attempt <= 1 { 1000 } else { 800 }
}
