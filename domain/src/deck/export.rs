//! Plain-text deck list export
//!
//! Renders the merged card list in the line format external deck
//! builders import. Works on whatever has resolved so far, so a
//! partially generated deck still exports its ready sections.

use crate::core::game::Game;
use crate::deck::card::CardEntry;

/// Render a deck list for import into external deck builders.
///
/// Mtg lists are plain `quantity name` lines. Gundam lists split the
/// resource deck out under its own header and include the printing
/// number on each line.
pub fn deck_list(game: Game, deck_name: &str, cards: &[CardEntry]) -> String {
    match game {
        Game::Mtg => cards
            .iter()
            .map(|card| format!("{} {}", card.quantity, card.name))
            .collect::<Vec<_>>()
            .join("\n"),
        Game::Gundam => {
            let (resource, main): (Vec<_>, Vec<_>) =
                cards.iter().partition(|card| card.category.is_resource());

            let main_lines = main
                .iter()
                .map(|card| gundam_line(card))
                .collect::<Vec<_>>()
                .join("\n");
            let resource_lines = resource
                .iter()
                .map(|card| gundam_line(card))
                .collect::<Vec<_>>()
                .join("\n");

            format!(
                "// {} - Main Deck ({} cards)\n{}\n\n// Resource Deck ({} cards)\n{}",
                deck_name,
                main.len(),
                main_lines,
                resource.len(),
                resource_lines,
            )
        }
    }
}

fn gundam_line(card: &CardEntry) -> String {
    format!(
        "{} {} {}",
        card.quantity,
        card.card_number.as_deref().unwrap_or("UNKNOWN"),
        card.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::card::CardCategory;

    #[test]
    fn mtg_list_is_quantity_then_name() {
        let cards = vec![
            CardEntry::new("Command Tower", 1, CardCategory::Land),
            CardEntry::new("Mountain", 15, CardCategory::Land),
        ];
        let list = deck_list(Game::Mtg, "Token Storm", &cards);
        assert_eq!(list, "1 Command Tower\n15 Mountain");
    }

    #[test]
    fn gundam_list_splits_resource_deck() {
        let cards = vec![
            CardEntry::new("Gundam", 4, CardCategory::Unit).with_card_number("GD01-013"),
            CardEntry::new("EX Base", 1, CardCategory::Resource).with_card_number("EXB-001"),
        ];
        let list = deck_list(Game::Gundam, "White Base Assault", &cards);

        assert!(list.starts_with("// White Base Assault - Main Deck (1 cards)"));
        assert!(list.contains("4 GD01-013 Gundam"));
        assert!(list.contains("// Resource Deck (1 cards)"));
        assert!(list.contains("1 EXB-001 EX Base"));
    }

    #[test]
    fn gundam_line_without_printing_number() {
        let cards = vec![CardEntry::new("Prototype Unit", 2, CardCategory::Unit)];
        let list = deck_list(Game::Gundam, "Test", &cards);
        assert!(list.contains("2 UNKNOWN Prototype Unit"));
    }
}
