//! Deck request value objects
//!
//! A [`DeckRequest`] is the user's brief: which game, how they like to
//! play, and how much they are willing to spend. It seeds the initial
//! multi-suggestion call and is never sent to the per-section calls
//! (those only see the chosen [`crate::deck::summary::DeckSummary`]).

use serde::{Deserialize, Serialize};

use crate::core::error::DomainError;
use crate::core::game::Game;

/// Who the deck will be played against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayType {
    Friends,
    Competitive,
    Both,
}

impl PlayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayType::Friends => "friends",
            PlayType::Competitive => "competitive",
            PlayType::Both => "both",
        }
    }

    /// Phrasing used when restating the preference in a prompt
    pub fn label(&self) -> &'static str {
        match self {
            PlayType::Friends => "Casual games with friends",
            PlayType::Competitive => "Competitive play",
            PlayType::Both => "Both casual and competitive play",
        }
    }
}

impl std::str::FromStr for PlayType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "friends" => Ok(PlayType::Friends),
            "competitive" => Ok(PlayType::Competitive),
            "both" => Ok(PlayType::Both),
            other => Err(DomainError::InvalidRequest(format!(
                "unknown play type: {other}"
            ))),
        }
    }
}

/// How much money the deck may cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetTier {
    Budget,
    Mid,
    High,
    NoLimit,
}

impl BudgetTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "budget",
            BudgetTier::Mid => "mid",
            BudgetTier::High => "high",
            BudgetTier::NoLimit => "no-limit",
        }
    }

    /// Phrasing used when restating the preference in a prompt
    pub fn label(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "Budget ($0-50)",
            BudgetTier::Mid => "Mid-range ($50-200)",
            BudgetTier::High => "High ($200-500)",
            BudgetTier::NoLimit => "No limit ($500+)",
        }
    }
}

impl std::str::FromStr for BudgetTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "budget" => Ok(BudgetTier::Budget),
            "mid" => Ok(BudgetTier::Mid),
            "high" => Ok(BudgetTier::High),
            "no-limit" => Ok(BudgetTier::NoLimit),
            other => Err(DomainError::InvalidRequest(format!(
                "unknown budget tier: {other}"
            ))),
        }
    }
}

/// How tuned the deck should be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerTier {
    Casual,
    Focused,
    Optimized,
    Competitive,
}

impl PowerTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerTier::Casual => "casual",
            PowerTier::Focused => "focused",
            PowerTier::Optimized => "optimized",
            PowerTier::Competitive => "competitive",
        }
    }

    /// Phrasing used when restating the preference in a prompt
    pub fn label(&self) -> &'static str {
        match self {
            PowerTier::Casual => "Casual (1-4)",
            PowerTier::Focused => "Focused (5-6)",
            PowerTier::Optimized => "Optimized (7-8)",
            PowerTier::Competitive => "Competitive (9-10)",
        }
    }
}

impl std::str::FromStr for PowerTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "casual" => Ok(PowerTier::Casual),
            "focused" => Ok(PowerTier::Focused),
            "optimized" => Ok(PowerTier::Optimized),
            "competitive" => Ok(PowerTier::Competitive),
            other => Err(DomainError::InvalidRequest(format!(
                "unknown power tier: {other}"
            ))),
        }
    }
}

/// The user's deck brief (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckRequest {
    pub game: Game,
    /// Free-text description of how the user likes to play
    #[serde(default)]
    pub playstyle: Option<String>,
    pub play_type: PlayType,
    /// Commander or pilot the user already has in mind
    #[serde(default)]
    pub leader: Option<String>,
    pub budget: BudgetTier,
    pub power: PowerTier,
}

impl DeckRequest {
    pub fn new(game: Game, play_type: PlayType, budget: BudgetTier, power: PowerTier) -> Self {
        Self {
            game,
            playstyle: None,
            play_type,
            leader: None,
            budget,
            power,
        }
    }

    pub fn with_playstyle(mut self, playstyle: impl Into<String>) -> Self {
        let playstyle = playstyle.into();
        if !playstyle.trim().is_empty() {
            self.playstyle = Some(playstyle);
        }
        self
    }

    pub fn with_leader(mut self, leader: impl Into<String>) -> Self {
        let leader = leader.into();
        if !leader.trim().is_empty() {
            self.leader = Some(leader);
        }
        self
    }

    /// Playstyle text for prompts, with the stock fallback
    pub fn playstyle_or_default(&self) -> &str {
        self.playstyle.as_deref().unwrap_or("Open to suggestions")
    }

    /// Leader preference for prompts, with the stock fallback
    pub fn leader_or_default(&self) -> &str {
        self.leader.as_deref().unwrap_or("Open to suggestions")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_when_fields_blank() {
        let request = DeckRequest::new(
            Game::Mtg,
            PlayType::Friends,
            BudgetTier::Mid,
            PowerTier::Focused,
        )
        .with_playstyle("   ")
        .with_leader("");

        assert_eq!(request.playstyle_or_default(), "Open to suggestions");
        assert_eq!(request.leader_or_default(), "Open to suggestions");
    }

    #[test]
    fn request_keeps_provided_fields() {
        let request = DeckRequest::new(
            Game::Mtg,
            PlayType::Both,
            BudgetTier::High,
            PowerTier::Optimized,
        )
        .with_playstyle("Aggressive token swarms")
        .with_leader("Krenko, Mob Boss");

        assert_eq!(request.playstyle_or_default(), "Aggressive token swarms");
        assert_eq!(request.leader_or_default(), "Krenko, Mob Boss");
    }

    #[test]
    fn tier_parsing() {
        let budget: BudgetTier = "no-limit".parse().unwrap();
        assert_eq!(budget, BudgetTier::NoLimit);
        let power: PowerTier = "competitive".parse().unwrap();
        assert_eq!(power, PowerTier::Competitive);
        assert!("mythic".parse::<BudgetTier>().is_err());
    }
}
