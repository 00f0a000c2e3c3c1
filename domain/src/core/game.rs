//! Game variant value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::error::DomainError;

/// Supported trading card games (Value Object)
///
/// Each variant fixes the construction rules the generator works
/// toward: the target deck size and which card sections exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Game {
    /// Magic: The Gathering, Commander (EDH) format
    Mtg,
    /// Gundam Card Game
    Gundam,
}

impl Game {
    /// Get the string identifier for this game
    pub fn as_str(&self) -> &'static str {
        match self {
            Game::Mtg => "mtg",
            Game::Gundam => "gundam",
        }
    }

    /// Target number of cards in a finished deck, leader excluded
    pub fn deck_size(&self) -> u32 {
        match self {
            Game::Mtg => 99,
            Game::Gundam => 50,
        }
    }

    /// Display word for the deck's lead entity
    pub fn leader_role(&self) -> &'static str {
        match self {
            Game::Mtg => "Commander",
            Game::Gundam => "Pilot",
        }
    }

    /// Display label for the faction tag list
    pub fn faction_label(&self) -> &'static str {
        match self {
            Game::Mtg => "Colors",
            Game::Gundam => "Forces",
        }
    }

    /// Human-readable name of the game
    pub fn display_name(&self) -> &'static str {
        match self {
            Game::Mtg => "Magic: The Gathering (Commander)",
            Game::Gundam => "Gundam Card Game",
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::Mtg
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Game {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mtg" => Ok(Game::Mtg),
            "gundam" => Ok(Game::Gundam),
            other => Err(DomainError::UnknownGame(other.to_string())),
        }
    }
}

impl Serialize for Game {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Game {
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
    fn game_roundtrip() {
        for game in [Game::Mtg, Game::Gundam] {
            let parsed: Game = game.as_str().parse().unwrap();
            assert_eq!(game, parsed);
        }
    }

    #[test]
    fn unknown_game_rejected() {
        let result: Result<Game, _> = "yugioh".parse();
        assert!(result.is_err());
    }

    #[test]
    fn deck_sizes() {
        assert_eq!(Game::Mtg.deck_size(), 99);
        assert_eq!(Game::Gundam.deck_size(), 50);
    }

    #[test]
    fn serde_uses_lowercase_tag() {
        let json = serde_json::to_string(&Game::Gundam).unwrap();
        assert_eq!(json, "\"gundam\"");
        let back: Game = serde_json::from_str("\"mtg\"").unwrap();
        assert_eq!(back, Game::Mtg);
    }
}
