//! Deck section value object
//!
//! A deck is generated in independent slices. Each [`DeckSection`]
//! carries its own expected card count and per-attempt output token
//! budget; the per-game section lists below are also the order sections
//! render in, no matter which order their fetches resolve.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::error::DomainError;
use crate::core::game::Game;

/// Independently generated slice of a deck (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeckSection {
    /// Lands (Mtg) or the resource deck (Gundam)
    ManaBase,
    EarlyCreatures,
    MidCreatures,
    LateCreatures,
    RampDraw,
    RemovalInteraction,
    WinConsArtifacts,
    Units,
    Commands,
    PilotsBases,
}

/// Mtg sections in display order
const MTG_SECTIONS: &[DeckSection] = &[
    DeckSection::ManaBase,
    DeckSection::EarlyCreatures,
    DeckSection::MidCreatures,
    DeckSection::LateCreatures,
    DeckSection::RampDraw,
    DeckSection::RemovalInteraction,
    DeckSection::WinConsArtifacts,
];

/// Gundam sections in display order
const GUNDAM_SECTIONS: &[DeckSection] = &[
    DeckSection::ManaBase,
    DeckSection::Units,
    DeckSection::Commands,
    DeckSection::PilotsBases,
];

impl DeckSection {
    /// All sections for a game, in display order
    pub fn for_game(game: Game) -> &'static [DeckSection] {
        match game {
            Game::Mtg => MTG_SECTIONS,
            Game::Gundam => GUNDAM_SECTIONS,
        }
    }

    /// Get the string identifier for this section
    pub fn as_str(&self) -> &'static str {
        match self {
            DeckSection::ManaBase => "mana-base",
            DeckSection::EarlyCreatures => "early-creatures",
            DeckSection::MidCreatures => "mid-creatures",
            DeckSection::LateCreatures => "late-creatures",
            DeckSection::RampDraw => "ramp-draw",
            DeckSection::RemovalInteraction => "removal-interaction",
            DeckSection::WinConsArtifacts => "win-cons-artifacts",
            DeckSection::Units => "units",
            DeckSection::Commands => "commands",
            DeckSection::PilotsBases => "pilots-bases",
        }
    }

    /// Total card quantity the section is expected to come back with
    pub fn expected_count(&self, game: Game) -> u32 {
        match self {
            DeckSection::ManaBase => match game {
                Game::Mtg => 37,
                Game::Gundam => 10,
            },
            DeckSection::EarlyCreatures => 9,
            DeckSection::MidCreatures => 9,
            DeckSection::LateCreatures => 7,
            DeckSection::RampDraw => 9,
            DeckSection::RemovalInteraction => 9,
            DeckSection::WinConsArtifacts => 9,
            DeckSection::Units => 25,
            DeckSection::Commands => 12,
            DeckSection::PilotsBases => 13,
        }
    }

    /// Output token budget for a 1-based attempt number.
    ///
    /// The first attempt gets a larger budget to reduce truncation;
    /// retries get a smaller one to cut latency and cost. The prompt
    /// itself never changes between attempts.
    pub fn token_budget(&self, attempt: u32) -> u32 {
        match self {
            DeckSection::ManaBase => {
                if attempt <= 1 {
                    1500
                } else {
                    1200
                }
            }
            _ => {
                if attempt <= 1 {
                    3000
                } else {
                    2000
                }
            }
        }
    }

    /// Section heading shown to the user
    pub fn display_name(&self, game: Game) -> &'static str {
        match self {
            DeckSection::ManaBase => match game {
                Game::Mtg => "Lands",
                Game::Gundam => "Resource Deck",
            },
            DeckSection::EarlyCreatures => "Early Game Creatures",
            DeckSection::MidCreatures => "Mid Game Creatures",
            DeckSection::LateCreatures => "Late Game Creatures",
            DeckSection::RampDraw => "Ramp & Card Draw",
            DeckSection::RemovalInteraction => "Removal & Interaction",
            DeckSection::WinConsArtifacts => "Win Conditions & Artifacts",
            DeckSection::Units => "Units",
            DeckSection::Commands => "Commands",
            DeckSection::PilotsBases => "Pilots & Bases",
        }
    }
}

impl std::fmt::Display for DeckSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DeckSection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mana-base" => Ok(DeckSection::ManaBase),
            "early-creatures" => Ok(DeckSection::EarlyCreatures),
            "mid-creatures" => Ok(DeckSection::MidCreatures),
            "late-creatures" => Ok(DeckSection::LateCreatures),
            "ramp-draw" => Ok(DeckSection::RampDraw),
            "removal-interaction" => Ok(DeckSection::RemovalInteraction),
            "win-cons-artifacts" => Ok(DeckSection::WinConsArtifacts),
            "units" => Ok(DeckSection::Units),
            "commands" => Ok(DeckSection::Commands),
            "pilots-bases" => Ok(DeckSection::PilotsBases),
            other => Err(DomainError::UnknownSection(other.to_string())),
        }
    }
}

impl Serialize for DeckSection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DeckSection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_count_tables() {
        let mtg_total: u32 = DeckSection::for_game(Game::Mtg)
            .iter()
            .map(|s| s.expected_count(Game::Mtg))
            .sum();
        assert_eq!(mtg_total, 89);

        // Gundam main deck hits the 50-card target; the resource deck
        // rides on top of it.
        let gundam_main: u32 = DeckSection::for_game(Game::Gundam)
            .iter()
            .filter(|s| **s != DeckSection::ManaBase)
            .map(|s| s.expected_count(Game::Gundam))
            .sum();
        assert_eq!(gundam_main, Game::Gundam.deck_size());
    }

    #[test]
    fn mana_base_count_depends_on_game() {
        assert_eq!(DeckSection::ManaBase.expected_count(Game::Mtg), 37);
        assert_eq!(DeckSection::ManaBase.expected_count(Game::Gundam), 10);
    }

    #[test]
    fn retry_budget_is_smaller_than_first_attempt() {
        for section in DeckSection::for_game(Game::Mtg) {
            assert!(section.token_budget(2) < section.token_budget(1));
            assert_eq!(section.token_budget(2), section.token_budget(3));
        }
        assert_eq!(DeckSection::EarlyCreatures.token_budget(1), 3000);
        assert_eq!(DeckSection::ManaBase.token_budget(1), 1500);
    }

    #[test]
    fn section_slug_roundtrip() {
        for game in [Game::Mtg, Game::Gundam] {
            for section in DeckSection::for_game(game) {
                let parsed: DeckSection = section.as_str().parse().unwrap();
                assert_eq!(*section, parsed);
            }
        }
    }

    #[test]
    fn mana_base_leads_the_display_order() {
        assert_eq!(DeckSection::for_game(Game::Mtg)[0], DeckSection::ManaBase);
        assert_eq!(
            DeckSection::for_game(Game::Gundam)[0],
            DeckSection::ManaBase
        );
    }
}
