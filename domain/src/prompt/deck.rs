//! Prompt builders for deck generation
//!
//! Every builder is a pure function of its inputs: no clock, no
//! randomness, no I/O. Retrying a chunk reuses the identical prompt
//! and varies only the output token budget, so a retry asks the same
//! semantic question.

use crate::core::game::Game;
use crate::deck::request::DeckRequest;
use crate::deck::section::DeckSection;
use crate::deck::summary::DeckSummary;

fn game_label(game: Game) -> &'static str {
    match game {
        Game::Mtg => "Magic: The Gathering",
        Game::Gundam => "Gundam TCG",
    }
}

/// Templates for every generation call
pub struct DeckPrompts;

impl DeckPrompts {
    /// Prompt for the initial multi-suggestion call: exactly three
    /// deck summaries in the per-game JSON schema.
    pub fn suggestions(request: &DeckRequest) -> String {
        match request.game {
            Game::Mtg => Self::mtg_suggestions(request),
            Game::Gundam => Self::gundam_suggestions(request),
        }
    }

    fn mtg_suggestions(request: &DeckRequest) -> String {
        format!(
            r#"You are an expert Magic: The Gathering deck builder. Based on the following user preferences, generate exactly 3 different EDH/Commander deck suggestions in valid JSON format.

User Preferences:
- Playstyle: {playstyle}
- Play Type: {play_type}
- Commander: {leader}
- Budget: {budget}
- Power Level: {power}

Please respond with a JSON array containing exactly 3 deck objects, each with this structure:
{{
  "id": "unique-id",
  "game": "mtg",
  "name": "Deck Name",
  "commander": "Commander Name",
  "description": "Brief description of the deck's playstyle and strategy",
  "strategy": "Main strategy summary",
  "estimatedCost": 150,
  "keyCards": ["Card 1", "Card 2", "Card 3", "Card 4", "Card 5"],
  "colors": ["White", "Blue", "Black", "Red", "Green"],
  "powerLevel": 6
}}

Budget guidelines:
- Budget ($0-50): Focus on budget-friendly options
- Mid-range ($50-200): Include some powerful cards but avoid expensive staples
- High ($200-500): Include strong staples and powerful cards
- No limit ($500+): Include any cards needed for optimal performance

Power Level guidelines:
- Casual (1-4): Fun, thematic decks with basic synergies
- Focused (5-6): Coherent strategy with good synergies
- Optimized (7-8): Efficient decks with strong synergies and good card quality
- Competitive (9-10): Tournament-level decks with optimal card choices

Make sure each deck suggestion is different and offers variety in commanders, strategies, and colors. Only return the JSON array, no additional text."#,
            playstyle = request.playstyle_or_default(),
            play_type = request.play_type.label(),
            leader = request.leader_or_default(),
            budget = request.budget.label(),
            power = request.power.label(),
        )
    }

    fn gundam_suggestions(request: &DeckRequest) -> String {
        format!(
            r#"You are an expert Gundam TCG deck builder. Based on the following user preferences, generate exactly 3 different Gundam deck suggestions in valid JSON format.

User Preferences:
- Playstyle: {playstyle}
- Play Type: {play_type}
- Pilot: {leader}
- Budget: {budget}
- Power Level: {power}

Please respond with a JSON array containing exactly 3 deck objects, each with this structure:
{{
  "id": "unique-id",
  "game": "gundam",
  "name": "Deck Name",
  "pilot": "Pilot Name",
  "description": "Brief description of the deck's playstyle and strategy",
  "strategy": "Main strategy summary",
  "estimatedCost": 150,
  "keyCards": ["Card 1", "Card 2", "Card 3", "Card 4", "Card 5"],
  "forces": ["Earth Federation", "Zeon", "AEUG"],
  "powerLevel": 6
}}

Budget guidelines:
- Budget ($0-50): Focus on budget-friendly options
- Mid-range ($50-200): Include some powerful cards but avoid expensive staples
- High ($200-500): Include strong staples and powerful cards
- No limit ($500+): Include any cards needed for optimal performance

Power Level guidelines:
- Casual: Fun, thematic decks with basic synergies
- Focused: Coherent strategy with good synergies
- Optimized: Tournament-viable decks with strong card choices
- Competitive: Meta-focused decks with optimal performance

Make sure each deck suggestion is different and offers variety in pilots, strategies, and forces. Only return the JSON array, no additional text."#,
            playstyle = request.playstyle_or_default(),
            play_type = request.play_type.label(),
            leader = request.leader_or_default(),
            budget = request.budget.label(),
            power = request.power.label(),
        )
    }

    /// Prompt for the strategy fragment: the StrategyBundle object
    /// schema, no cardinality.
    pub fn strategy(summary: &DeckSummary) -> String {
        format!(
            r#"Based on this {game} deck summary, generate strategy information in JSON format.

Deck Summary:
- Name: {name}
- {leader_role}: {leader}
- Strategy: {strategy}
- {faction_label}: {factions}
- Power Level: {power_level}

Return JSON object:
{{
  "synergies": [
    {{
      "cards": ["Card A", "Card B"],
      "description": "How these cards work together",
      "type": "engine"
    }}
  ],
  "openingHandPriority": ["Card 1", "Card 2", "Card 3"],
  "winConditions": ["Primary win condition", "Secondary win condition"],
  "strengths": ["Strength 1", "Strength 2"],
  "weaknesses": ["Weakness 1", "Weakness 2"]
}}

Include 3-5 synergies (types: combo, engine, value, protection), 3-5 opening hand cards, 2-3 win conditions, 2-3 strengths/weaknesses. Only return JSON."#,
            game = game_label(summary.game),
            name = summary.name,
            leader_role = summary.game.leader_role(),
            leader = summary.leader,
            strategy = summary.strategy,
            faction_label = summary.game.faction_label(),
            factions = summary.factions_joined(),
            power_level = summary.power_level,
        )
    }

    /// Prompt for one card section: restates the summary, states the
    /// exact target cardinality, and pins the JSON field schema.
    pub fn section(summary: &DeckSummary, section: DeckSection) -> String {
        match section {
            DeckSection::ManaBase => Self::mana_base(summary),
            DeckSection::Units => Self::gundam_units(summary),
            DeckSection::Commands => Self::gundam_commands(summary),
            DeckSection::PilotsBases => Self::gundam_pilots_bases(summary),
            mtg_section => Self::mtg_section(summary, mtg_section),
        }
    }

    fn mana_base(summary: &DeckSummary) -> String {
        let expected = DeckSection::ManaBase.expected_count(summary.game);
        match summary.game {
            Game::Mtg => format!(
                r#"Generate a {expected}-card manabase for this Magic deck in JSON format.

Deck: {name} ({leader})
Colors: {factions}
Budget: ${cost}

Return JSON array with exactly {expected} land cards:
[
  {{"name": "Command Tower", "quantity": 1, "category": "land", "manaCost": "", "cmc": 0, "purpose": "Mana fixing"}},
  {{"name": "Forest", "quantity": 15, "category": "land", "manaCost": "", "cmc": 0, "purpose": "Basic land"}}
]

Include: Command Tower, appropriate dual lands, basics (adjust for colors), utility lands. Total must be exactly {expected} cards. Only return JSON array."#,
                name = summary.name,
                leader = summary.leader,
                factions = summary.factions_joined(),
                cost = summary.estimated_cost,
            ),
            Game::Gundam => format!(
                r#"Generate a {expected}-card Resource Deck for this Gundam TCG deck in JSON format.

Deck: {name} ({leader})
Forces: {factions}

Return JSON array with exactly {expected} resource cards:
[
  {{"name": "EX Base", "quantity": 1, "category": "resource", "cardNumber": "EXB-001", "purpose": "Starting Base"}},
  {{"name": "EX Resource", "quantity": 5, "category": "resource", "cardNumber": "EXR-001", "purpose": "Extra Resources"}},
  {{"name": "Resource", "quantity": 4, "category": "resource", "cardNumber": "R-001", "purpose": "Basic Resources"}}
]

Include: 1 EX Base, 5 EX Resources, 4 basic Resources. Total must be exactly {expected} cards. Only return JSON array."#,
                name = summary.name,
                leader = summary.leader,
                factions = summary.factions_joined(),
            ),
        }
    }

    fn mtg_section(summary: &DeckSummary, section: DeckSection) -> String {
        let (description, guidance) = match section {
            DeckSection::EarlyCreatures => (
                "early game creatures (CMC 1-4)",
                "Focus on utility creatures, mana dorks, early threats, and creatures that enable your strategy. Include 1-2 mana creatures and efficient 3-4 mana creatures.",
            ),
            DeckSection::MidCreatures => (
                "mid game creatures (CMC 4-6)",
                "Include powerful 4-6 mana creatures that advance your strategy. These should be your deck's workhorses and key synergy pieces.",
            ),
            DeckSection::LateCreatures => (
                "late game creatures and threats (CMC 6+)",
                "Big threats, game-ending creatures, and powerful late-game options. These should be your major win conditions.",
            ),
            DeckSection::RampDraw => (
                "ramp and card draw spells",
                "Mana acceleration (ramp) and card advantage engines. Essential for consistency and keeping up in multiplayer.",
            ),
            DeckSection::RemovalInteraction => (
                "removal and interaction spells",
                "Targeted removal, board wipes, counterspells, and other interactive spells to deal with threats.",
            ),
            DeckSection::WinConsArtifacts => (
                "win conditions, artifacts, and planeswalkers",
                "Artifacts that support your strategy, planeswalkers, and alternative win conditions beyond creatures.",
            ),
            other => unreachable!("not an Mtg card section: {other}"),
        };
        let expected = section.expected_count(Game::Mtg);

        format!(
            r#"Generate {description} for this Magic deck in JSON format.

Deck: {name} ({leader})
Strategy: {strategy}
Colors: {factions}
Power Level: {power_level}

Focus: {guidance}

Return JSON array totaling exactly {expected} cards:
[
  {{"name": "Card Name", "quantity": 1, "category": "creature", "manaCost": "2G", "cmc": 3, "purpose": "Card purpose"}}
]

Use real MTG card names that fit the strategy and colors. Total quantity must equal exactly {expected}. Only return JSON array."#,
            name = summary.name,
            leader = summary.leader,
            strategy = summary.strategy,
            factions = summary.factions_joined(),
            power_level = summary.power_level,
        )
    }

    fn gundam_units(summary: &DeckSummary) -> String {
        let expected = DeckSection::Units.expected_count(Game::Gundam);
        format!(
            r#"Generate Unit cards totaling exactly {expected} cards for this Gundam TCG deck using real cards and proper quantities (1-4 copies each).

Deck: {name} ({leader})
Strategy: {strategy}
Forces: {factions}
Power Level: {power_level}

CRITICAL RULE: You can include 1-4 copies of any card. Think about card value:
- Core strategy cards: 4 copies for consistency
- Good support cards: 2-3 copies
- Situational cards: 1-2 copies
- Tech/one-off effects: 1 copy

Return JSON array totaling exactly {expected} cards:
[
  {{"name": "Gundam", "quantity": 4, "category": "unit", "cardNumber": "GD01-013", "cost": 3, "level": 4, "purpose": "Core attacker - 4x for consistency"}},
  {{"name": "Wing Gundam", "quantity": 3, "category": "unit", "cardNumber": "GD01-040", "cost": 4, "level": 5, "purpose": "Heavy attacker - 3x good support"}},
  {{"name": "GM", "quantity": 2, "category": "unit", "cardNumber": "ST01-005", "cost": 2, "level": 3, "purpose": "Early game - 2x for curve"}}
]

Use real cards: Gundam (GD01-013), Wing Gundam (GD01-040), Strike Gundam (GD01-077), Gundam Aerial (GD01-070), Char's Zaku II (GD01-026), Unicorn Gundam (GD01-005), Guncannon (GD01-004), Guntank (GD01-008), GM (ST01-005), Zaku II (ST03-008), etc.

Total quantity must equal exactly {expected}. Count: 4+3+2+... = {expected}. Only return JSON array."#,
            name = summary.name,
            leader = summary.leader,
            strategy = summary.strategy,
            factions = summary.factions_joined(),
            power_level = summary.power_level,
        )
    }

    fn gundam_commands(summary: &DeckSummary) -> String {
        let expected = DeckSection::Commands.expected_count(Game::Gundam);
        format!(
            r#"Generate Command cards totaling exactly {expected} cards for this Gundam TCG deck using real cards and proper quantities (1-4 copies each).

Deck: {name} ({leader})
Strategy: {strategy}
Forces: {factions}
Power Level: {power_level}

CRITICAL RULE: You can include 1-4 copies of any card. Think about card value:
- Essential effects: 4 copies for consistency
- Good utility: 2-3 copies
- Situational responses: 1-2 copies
- Tech/counter cards: 1 copy

Return JSON array totaling exactly {expected} cards:
[
  {{"name": "A Show of Resolve", "quantity": 4, "category": "command", "cardNumber": "GD01-100", "cost": 2, "level": 2, "purpose": "Core combat support - 4x for consistency"}},
  {{"name": "Intercept Orders", "quantity": 3, "category": "command", "cardNumber": "GD01-099", "cost": 1, "level": 1, "purpose": "Defense - 3x good utility"}},
  {{"name": "First Contact", "quantity": 2, "category": "command", "cardNumber": "GD01-107", "cost": 2, "level": 2, "purpose": "Draw power - 2x for card advantage"}}
]

Use real cards: A Show of Resolve (GD01-100), Intercept Orders (GD01-099), First Contact (GD01-107), The Witch and the Bride (GD01-117), Naval Bombardment (GD01-120), Thoroughly Damaged (ST01-012), Kai's Resolve (ST01-013), etc.

Total quantity must equal exactly {expected}. Count: 4+3+2+... = {expected}. Only return JSON array."#,
            name = summary.name,
            leader = summary.leader,
            strategy = summary.strategy,
            factions = summary.factions_joined(),
            power_level = summary.power_level,
        )
    }

    fn gundam_pilots_bases(summary: &DeckSummary) -> String {
        let expected = DeckSection::PilotsBases.expected_count(Game::Gundam);
        format!(
            r#"Generate Pilot and Base cards totaling exactly {expected} cards for this Gundam TCG deck using real cards and proper quantities (1-4 copies each).

Deck: {name} ({leader})
Strategy: {strategy}
Forces: {factions}
Power Level: {power_level}

CRITICAL RULE: You can include 1-4 copies of any card. Think about card value:
- Key pilots for strategy: 4 copies for consistency
- Good support pilots: 2-3 copies
- Situational pilots: 1-2 copies
- Bases (usually 1 active): 1-2 copies each

Return JSON array totaling exactly {expected} cards:
[
  {{"name": "Amuro Ray", "quantity": 4, "category": "pilot", "cardNumber": "ST01-010", "cost": 2, "level": 2, "purpose": "Core pilot - 4x for consistency"}},
  {{"name": "Char Aznable", "quantity": 3, "category": "pilot", "cardNumber": "ST03-011", "cost": 3, "level": 3, "purpose": "Strong pilot - 3x for reliability"}},
  {{"name": "White Base", "quantity": 2, "category": "base", "cardNumber": "ST01-015", "cost": 3, "level": 3, "purpose": "Base support - 2x for options"}}
]

Use real cards: Amuro Ray (ST01-010), Char Aznable (ST03-011), Suletta Mercury (ST01-011), Heero Yuy (ST02-010), Kira Yamato (ST04-010), Banagher Links (GD01-088), White Base (ST01-015), Side 7 (GD01-124), etc.

Total quantity must equal exactly {expected}. Count: 4+3+2+... = {expected}. Only return JSON array."#,
            name = summary.name,
            leader = summary.leader,
            strategy = summary.strategy,
            factions = summary.factions_joined(),
            power_level = summary.power_level,
        )
    }
}
