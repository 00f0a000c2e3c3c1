//! Interactive prompts with non-interactive fallbacks
//!
//! Every prompt checks its flag value first, so scripted invocations
//! (`--pick`, `--retry-failed`) never touch the terminal. Without a
//! flag, prompts only run on a real terminal; otherwise the neutral
//! default wins.

use decksmith_domain::DeckSummary;
use dialoguer::{Confirm, Password, Select};
use std::io::IsTerminal;

/// Whether stdin can host an interactive prompt
pub fn interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Ask for the access password.
///
/// Callers check [`interactive`] first; on a non-terminal stdin the
/// gate has to be satisfied through configuration instead.
pub fn prompt_password() -> dialoguer::Result<String> {
    Password::new().with_prompt("Access password").interact()
}

/// Resolve which suggestion to build: the `--pick` value when given
/// (1-based), an interactive picker on a terminal, the first
/// suggestion otherwise. Returns a 0-based index.
pub fn pick_suggestion(
    suggestions: &[DeckSummary],
    pick: Option<u8>,
) -> dialoguer::Result<usize> {
    if let Some(n) = pick {
        return Ok(usize::from(n) - 1);
    }
    if !interactive() {
        return Ok(0);
    }

    let items: Vec<String> = suggestions
        .iter()
        .map(|summary| {
            format!(
                "{} ({}: {}, ~${})",
                summary.name,
                summary.game.leader_role(),
                summary.leader,
                summary.estimated_cost
            )
        })
        .collect();

    Select::new()
        .with_prompt("Choose a deck to build")
        .items(&items)
        .default(0)
        .interact()
}

/// Whether to re-fetch the failed sections. `--retry-failed` skips the
/// question; outside a terminal the answer is no.
pub fn confirm_retry(failed_count: usize, retry_flag: bool) -> dialoguer::Result<bool> {
    if retry_flag {
        return Ok(true);
    }
    if !interactive() {
        return Ok(false);
    }

    Confirm::new()
        .with_prompt(format!(
            "{} section(s) failed. Re-fetch them now?",
            failed_count
        ))
        .default(true)
        .interact()
}

#[cfg(test)]
mod tests {
    use super::*;
    use decksmith_domain::Game;

    fn suggestions() -> Vec<DeckSummary> {
        (1..=3)
            .map(|i| DeckSummary {
                id: format!("deck-{i}"),
                game: Game::Mtg,
                name: format!("Deck {i}"),
                leader: "Leader".to_string(),
                description: String::new(),
                strategy: "Strategy".to_string(),
                estimated_cost: 100,
                key_cards: vec![],
                factions: vec![],
                power_level: 5,
            })
            .collect()
    }

    #[test]
    fn pick_flag_bypasses_the_prompt() {
        let index = pick_suggestion(&suggestions(), Some(2)).unwrap();
        assert_eq!(index, 1);
    }

    #[test]
    fn retry_flag_bypasses_the_prompt() {
        assert!(confirm_retry(3, true).unwrap());
    }
}
