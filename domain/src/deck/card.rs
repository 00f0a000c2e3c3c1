//! Card entry value objects

use serde::{Deserialize, Serialize};

/// Role a card plays in a deck list (Value Object)
///
/// One closed set across both games; the Mtg roles and the Gundam roles
/// never mix within a deck. A card's category is fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardCategory {
    Commander,
    Creature,
    Instant,
    Sorcery,
    Artifact,
    Enchantment,
    Planeswalker,
    Land,
    Unit,
    Pilot,
    Command,
    Base,
    Resource,
}

impl CardCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardCategory::Commander => "commander",
            CardCategory::Creature => "creature",
            CardCategory::Instant => "instant",
            CardCategory::Sorcery => "sorcery",
            CardCategory::Artifact => "artifact",
            CardCategory::Enchantment => "enchantment",
            CardCategory::Planeswalker => "planeswalker",
            CardCategory::Land => "land",
            CardCategory::Unit => "unit",
            CardCategory::Pilot => "pilot",
            CardCategory::Command => "command",
            CardCategory::Base => "base",
            CardCategory::Resource => "resource",
        }
    }

    /// Resource-deck cards sit apart from the main deck in exports
    pub fn is_resource(&self) -> bool {
        matches!(self, CardCategory::Resource)
    }
}

impl std::fmt::Display for CardCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry in a generated deck list (Value Object)
///
/// Quantity must be ≥ 1; the chunk validator rejects entries that come
/// back with a zero quantity. Per-game detail fields are optional so
/// one shape covers both generation schemas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardEntry {
    pub name: String,
    pub quantity: u32,
    pub category: CardCategory,
    /// Mtg mana cost string, e.g. "2G"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,
    /// Mtg converted mana cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmc: Option<u32>,
    /// Gundam deploy cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<u32>,
    /// Gundam level requirement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    /// Gundam attack points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ap: Option<u32>,
    /// Gundam hit points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<u32>,
    /// External printing identifier, e.g. "GD01-013"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    /// Why this card is in the deck
    #[serde(default)]
    pub purpose: String,
}

impl CardEntry {
    pub fn new(name: impl Into<String>, quantity: u32, category: CardCategory) -> Self {
        Self {
            name: name.into(),
            quantity,
            category,
            mana_cost: None,
            cmc: None,
            cost: None,
            level: None,
            ap: None,
            hp: None,
            card_number: None,
            purpose: String::new(),
        }
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    pub fn with_card_number(mut self, card_number: impl Into<String>) -> Self {
        self.card_number = Some(card_number.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mtg_card_schema() {
        let json = r#"{"name": "Command Tower", "quantity": 1, "category": "land",
                       "manaCost": "", "cmc": 0, "purpose": "Mana fixing"}"#;
        let card: CardEntry = serde_json::from_str(json).unwrap();
        assert_eq!(card.name, "Command Tower");
        assert_eq!(card.category, CardCategory::Land);
        assert_eq!(card.cmc, Some(0));
        assert!(card.cost.is_none());
    }

    #[test]
    fn parses_gundam_card_schema() {
        let json = r#"{"name": "Gundam", "quantity": 4, "category": "unit",
                       "cardNumber": "GD01-013", "cost": 3, "level": 4,
                       "purpose": "Core attacker"}"#;
        let card: CardEntry = serde_json::from_str(json).unwrap();
        assert_eq!(card.quantity, 4);
        assert_eq!(card.category, CardCategory::Unit);
        assert_eq!(card.card_number.as_deref(), Some("GD01-013"));
    }

    #[test]
    fn unknown_category_is_a_parse_error() {
        let json = r#"{"name": "Mystery", "quantity": 1, "category": "trap"}"#;
        let result: Result<CardEntry, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
