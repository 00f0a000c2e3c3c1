//! Console output formatting for suggestions and assembled decks

use colored::Colorize;
use decksmith_application::ports::card_catalog::CardPrinting;
use decksmith_domain::{
    CardEntry, DeckAssembly, DeckSummary, Game, SectionResult, SectionStatus, StrategySlot,
    deck_list,
};

/// Globally disable colored output (config `output.color = false`)
pub fn disable_color() {
    colored::control::set_override(false);
}

/// Formats suggestions and deck assemblies for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the three proposed decks as a numbered list
    pub fn format_suggestions(suggestions: &[DeckSummary]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Deck Suggestions"));
        output.push('\n');

        for (index, summary) in suggestions.iter().enumerate() {
            output.push_str(&format!(
                "\n{} {}\n",
                format!("{}.", index + 1).cyan().bold(),
                summary.name.bold()
            ));
            output.push_str(&format!(
                "   {} {}\n",
                format!("{}:", summary.game.leader_role()).dimmed(),
                summary.leader
            ));
            if !summary.factions.is_empty() {
                output.push_str(&format!(
                    "   {} {}\n",
                    format!("{}:", summary.game.faction_label()).dimmed(),
                    summary.factions_joined()
                ));
            }
            output.push_str(&format!("   {}\n", summary.strategy));
            output.push_str(&format!(
                "   {} ~${}   {} {}/10\n",
                "Cost:".dimmed(),
                summary.estimated_cost,
                "Power:".dimmed(),
                summary.power_level
            ));
        }

        output
    }

    /// Format the complete assembly: leader, sections, strategy,
    /// completeness. Renders whatever has resolved; failed and pending
    /// sections show their state in place.
    pub fn format_deck(assembly: &DeckAssembly, leader: Option<&CardPrinting>) -> String {
        let summary = assembly.summary();
        let game = assembly.game();
        let mut output = String::new();

        output.push_str(&Self::header(&summary.name));
        output.push('\n');

        output.push_str(&format!(
            "\n{} {}\n",
            format!("{}:", game.leader_role()).cyan().bold(),
            summary.leader
        ));
        if let Some(printing) = leader {
            if let Some(type_line) = &printing.type_line {
                output.push_str(&format!("  {}\n", type_line.dimmed()));
            }
            if let (Some(power), Some(toughness)) = (&printing.power, &printing.toughness) {
                output.push_str(&format!("  {}\n", format!("{}/{}", power, toughness).dimmed()));
            }
        }
        if !summary.factions.is_empty() {
            output.push_str(&format!(
                "{} {}\n",
                format!("{}:", game.faction_label()).cyan().bold(),
                summary.factions_joined()
            ));
        }
        output.push_str(&format!(
            "{} {}\n",
            "Strategy:".cyan().bold(),
            summary.strategy
        ));

        for result in assembly.sections() {
            output.push_str(&Self::format_section(result, game));
        }

        output.push_str(&Self::format_strategy(assembly.strategy()));
        output.push_str(&Self::completeness_line(assembly));
        output.push_str(&Self::footer());

        output
    }

    /// One status line per section, no card lists
    pub fn format_summary(assembly: &DeckAssembly) -> String {
        let summary = assembly.summary();
        let game = assembly.game();
        let mut output = String::new();

        output.push_str(&format!(
            "{} ({}) - {}\n",
            summary.name.bold(),
            game,
            summary.leader
        ));

        for result in assembly.sections() {
            let line = match &result.status {
                SectionStatus::Ready => format!(
                    "  {} {:<26} {} cards\n",
                    "v".green(),
                    result.section.display_name(game),
                    result.total_quantity()
                ),
                SectionStatus::Failed(failure) => format!(
                    "  {} {:<26} {}\n",
                    "x".red(),
                    result.section.display_name(game),
                    failure.category()
                ),
                SectionStatus::Pending => format!(
                    "  {} {:<26} generating\n",
                    "·".dimmed(),
                    result.section.display_name(game)
                ),
            };
            output.push_str(&line);
        }

        let strategy_state = match assembly.strategy() {
            StrategySlot::Ready(_) => "ready".green().to_string(),
            StrategySlot::Failed(_) => "failed".red().to_string(),
            StrategySlot::Pending => "generating".dimmed().to_string(),
        };
        output.push_str(&format!("  strategy: {}\n", strategy_state));
        output.push_str(&Self::completeness_line(assembly));

        output
    }

    /// Format as JSON
    pub fn format_json(assembly: &DeckAssembly) -> String {
        serde_json::to_string_pretty(&assembly.full_deck()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Importable deck list block
    pub fn format_export(assembly: &DeckAssembly) -> String {
        let list = deck_list(
            assembly.game(),
            &assembly.summary().name,
            &assembly.merged_cards(),
        );
        format!(
            "{}\n{}\n",
            Self::section_header("Deck List (import format)"),
            list
        )
    }

    fn format_section(result: &SectionResult, game: Game) -> String {
        let name = result.section.display_name(game);
        match &result.status {
            SectionStatus::Ready => {
                let mut block = Self::section_header(&format!(
                    "{} ({} cards)",
                    name,
                    result.total_quantity()
                ));
                for card in &result.cards {
                    block.push_str(&Self::card_line(card));
                }
                block
            }
            SectionStatus::Failed(failure) => {
                let mut block =
                    Self::section_header(&format!("{} ({})", name, "failed".red()));
                block.push_str(&format!(
                    "  {} {}\n  {}\n",
                    "x".red(),
                    failure,
                    "re-run with --retry-failed to fetch this section again".dimmed()
                ));
                block
            }
            SectionStatus::Pending => {
                let mut block = Self::section_header(name);
                block.push_str(&format!("  {}\n", "generating...".dimmed()));
                block
            }
        }
    }

    fn card_line(card: &CardEntry) -> String {
        let mut line = format!("  {}x {}", card.quantity, card.name);
        if let Some(mana_cost) = &card.mana_cost
            && !mana_cost.is_empty()
        {
            line.push_str(&format!(" {}", format!("[{}]", mana_cost).dimmed()));
        }
        if let Some(cost) = card.cost {
            line.push_str(&format!(" {}", format!("[cost {}]", cost).dimmed()));
        }
        if !card.purpose.is_empty() {
            line.push_str(&format!(" - {}", card.purpose.dimmed()));
        }
        line.push('\n');
        line
    }

    fn format_strategy(slot: &StrategySlot) -> String {
        let bundle = match slot {
            StrategySlot::Ready(bundle) => bundle,
            StrategySlot::Failed(failure) => {
                let mut block = Self::section_header("Strategy Guide");
                block.push_str(&format!("  {} {}\n", "x".red(), failure));
                return block;
            }
            StrategySlot::Pending => {
                let mut block = Self::section_header("Strategy Guide");
                block.push_str(&format!("  {}\n", "generating...".dimmed()));
                return block;
            }
        };

        let mut block = Self::section_header("Strategy Guide");

        if !bundle.synergies.is_empty() {
            block.push_str(&format!("{}\n", "Synergies:".yellow().bold()));
            for synergy in &bundle.synergies {
                block.push_str(&format!(
                    "  {} {}\n",
                    format!("[{}]", synergy.kind).cyan(),
                    synergy.cards.join(" + ").bold()
                ));
                block.push_str(&format!("    {}\n", synergy.description));
            }
        }
        if !bundle.opening_hand_priority.is_empty() {
            block.push_str(&format!(
                "{} {}\n",
                "Opening hand:".yellow().bold(),
                bundle.opening_hand_priority.join(", ")
            ));
        }
        if !bundle.win_conditions.is_empty() {
            block.push_str(&format!("{}\n", "Win conditions:".yellow().bold()));
            for line in &bundle.win_conditions {
                block.push_str(&format!("  * {}\n", line));
            }
        }
        if !bundle.strengths.is_empty() {
            block.push_str(&format!("{}\n", "Strengths:".green().bold()));
            for line in &bundle.strengths {
                block.push_str(&format!("  * {}\n", line));
            }
        }
        if !bundle.weaknesses.is_empty() {
            block.push_str(&format!("{}\n", "Weaknesses:".red().bold()));
            for line in &bundle.weaknesses {
                block.push_str(&format!("  * {}\n", line));
            }
        }

        block
    }

    fn completeness_line(assembly: &DeckAssembly) -> String {
        let percent = (assembly.completeness() * 100.0).round() as u32;
        let counts = format!(
            "{}/{} ({}%)",
            assembly.accepted_total(),
            assembly.target_size(),
            percent
        );
        let state = if assembly.is_complete() {
            "complete".green().to_string()
        } else {
            "incomplete".yellow().to_string()
        };
        format!("\n{} {} {}\n", "Cards:".cyan().bold(), counts, state)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decksmith_domain::{
        CardCategory, DeckSection, Game, SectionFailure, ServiceFault, StrategyBundle, Synergy,
        SynergyType,
    };

    fn plain() {
        colored::control::set_override(false);
    }

    fn summary() -> DeckSummary {
        DeckSummary {
            id: "deck-1".to_string(),
            game: Game::Mtg,
            name: "Token Storm".to_string(),
            leader: "Krenko, Mob Boss".to_string(),
            description: "Goblin tribal".to_string(),
            strategy: "Flood the board".to_string(),
            estimated_cost: 120,
            key_cards: vec![],
            factions: vec!["Red".to_string()],
            power_level: 6,
        }
    }

    fn bundle() -> StrategyBundle {
        StrategyBundle {
            synergies: vec![Synergy {
                cards: vec!["Skirk Prospector".to_string(), "Krenko, Mob Boss".to_string()],
                description: "Sacrifice goblins for mana".to_string(),
                kind: SynergyType::Engine,
            }],
            opening_hand_priority: vec!["Sol Ring".to_string()],
            win_conditions: vec!["Go wide".to_string()],
            strengths: vec!["Speed".to_string()],
            weaknesses: vec!["Board wipes".to_string()],
        }
    }

    #[test]
    fn suggestions_are_numbered_with_leader_lines() {
        plain();
        let output = ConsoleFormatter::format_suggestions(&[summary()]);
        assert!(output.contains("1. Token Storm"));
        assert!(output.contains("Commander: Krenko, Mob Boss"));
        assert!(output.contains("Colors: Red"));
        assert!(output.contains("~$120"));
    }

    #[test]
    fn deck_render_shows_cards_failures_and_completeness() {
        plain();
        let mut assembly = DeckAssembly::new(summary());
        assembly.apply(SectionResult::ready(
            DeckSection::ManaBase,
            37,
            vec![
                CardEntry::new("Mountain", 30, CardCategory::Land),
                CardEntry::new("Command Tower", 1, CardCategory::Land)
                    .with_purpose("Mana fixing"),
            ],
        ));
        assembly.apply(SectionResult::failed(
            DeckSection::RampDraw,
            9,
            SectionFailure::InsufficientCardinality {
                total: 4,
                expected: 9,
            },
        ));
        assembly.apply_strategy(Ok(bundle()));

        let output = ConsoleFormatter::format_deck(&assembly, None);

        assert!(output.contains("Lands (31 cards)"));
        assert!(output.contains("30x Mountain"));
        assert!(output.contains("1x Command Tower - Mana fixing"));
        assert!(output.contains("only 4 of 9 cards after all attempts"));
        assert!(output.contains("re-run with --retry-failed"));
        assert!(output.contains("generating..."));
        assert!(output.contains("[engine] Skirk Prospector + Krenko, Mob Boss"));
        assert!(output.contains("Cards: 31/99 (31%)"));
        assert!(output.contains("incomplete"));
    }

    #[test]
    fn leader_printing_adds_type_line() {
        plain();
        let assembly = DeckAssembly::new(summary());
        let printing = CardPrinting {
            name: "Krenko, Mob Boss".to_string(),
            type_line: Some("Legendary Creature - Goblin Warrior".to_string()),
            oracle_text: None,
            power: Some("3".to_string()),
            toughness: Some("3".to_string()),
            image_url: None,
        };

        let output = ConsoleFormatter::format_deck(&assembly, Some(&printing));
        assert!(output.contains("Legendary Creature - Goblin Warrior"));
        assert!(output.contains("3/3"));
    }

    #[test]
    fn summary_format_is_one_line_per_section() {
        plain();
        let mut assembly = DeckAssembly::new(summary());
        assembly.apply(SectionResult::ready(
            DeckSection::ManaBase,
            37,
            vec![CardEntry::new("Mountain", 37, CardCategory::Land)],
        ));
        assembly.apply(SectionResult::failed(
            DeckSection::RampDraw,
            9,
            SectionFailure::Service(ServiceFault::Transient),
        ));

        let output = ConsoleFormatter::format_summary(&assembly);
        assert!(output.contains("v Lands"));
        assert!(output.contains("37 cards"));
        assert!(output.contains("x Ramp & Card Draw"));
        assert!(output.contains("transient"));
        assert!(output.contains("strategy: generating"));
    }

    #[test]
    fn json_format_is_the_full_deck_snapshot() {
        plain();
        let assembly = DeckAssembly::new(summary());
        let output = ConsoleFormatter::format_json(&assembly);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["summary"]["name"], "Token Storm");
        assert_eq!(value["targetSize"], 99);
        assert_eq!(value["complete"], false);
    }

    #[test]
    fn export_block_uses_the_import_line_format() {
        plain();
        let mut assembly = DeckAssembly::new(summary());
        assembly.apply(SectionResult::ready(
            DeckSection::ManaBase,
            37,
            vec![CardEntry::new("Mountain", 37, CardCategory::Land)],
        ));

        let output = ConsoleFormatter::format_export(&assembly);
        assert!(output.contains("Deck List (import format)"));
        assert!(output.contains("37 Mountain"));
    }
}
