//! Chunk validation
//!
//! Model replies arrive as free text that usually contains the JSON we
//! asked for, sometimes wrapped in a code fence or a sentence of
//! preamble. Validation slices out the JSON payload, parses it into the
//! typed shape, and for card chunks checks the total quantity against
//! the section's expected count.

use crate::deck::card::CardEntry;
use crate::deck::strategy::StrategyBundle;
use crate::deck::summary::DeckSummary;
use crate::generation::fault::ChunkRejection;

/// Fraction of the expected quantity a card chunk must reach.
///
/// Generative cardinality control is imperfect; a slightly short chunk
/// is still usable and is accepted as-is, never padded or truncated.
pub const ACCEPT_RATIO: f64 = 0.8;

/// Number of deck summaries the suggestion call must return
pub const SUGGESTION_COUNT: usize = 3;

/// Slice the JSON payload out of a reply that may wrap it in prose or
/// a code fence. Returns the input unchanged when no JSON delimiters
/// are found, leaving the parse error to the caller.
fn json_payload(raw: &str) -> &str {
    let array = raw.find('[');
    let object = raw.find('{');
    let (open, close) = match (array, object) {
        (Some(a), Some(o)) if a < o => (a, raw.rfind(']')),
        (Some(a), None) => (a, raw.rfind(']')),
        (_, Some(o)) => (o, raw.rfind('}')),
        (None, None) => return raw,
    };
    match close {
        Some(end) if end > open => &raw[open..=end],
        _ => raw,
    }
}

/// Parse and validate one card-section chunk.
///
/// Rejections are retryable: a schema mismatch or zero quantity is a
/// [`ChunkRejection::MalformedResponse`], a parseable chunk below the
/// acceptance floor is [`ChunkRejection::InsufficientCardinality`].
/// Accepted chunks keep exactly the entries the model returned.
pub fn parse_card_chunk(raw: &str, expected: u32) -> Result<Vec<CardEntry>, ChunkRejection> {
    let cards: Vec<CardEntry> = serde_json::from_str(json_payload(raw))
        .map_err(|e| ChunkRejection::MalformedResponse(e.to_string()))?;

    if cards.is_empty() {
        return Err(ChunkRejection::MalformedResponse(
            "empty card array".to_string(),
        ));
    }
    if let Some(card) = cards.iter().find(|c| c.quantity == 0) {
        return Err(ChunkRejection::MalformedResponse(format!(
            "zero quantity for \"{}\"",
            card.name
        )));
    }

    let total: u32 = cards.iter().map(|c| c.quantity).sum();
    if (total as f64) < (expected as f64) * ACCEPT_RATIO {
        return Err(ChunkRejection::InsufficientCardinality { total, expected });
    }

    Ok(cards)
}

/// Parse the strategy chunk. Structural validation only; no
/// cardinality applies.
pub fn parse_strategy_chunk(raw: &str) -> Result<StrategyBundle, ChunkRejection> {
    serde_json::from_str(json_payload(raw))
        .map_err(|e| ChunkRejection::MalformedResponse(e.to_string()))
}

/// Parse the multi-suggestion reply. The call asks for exactly
/// [`SUGGESTION_COUNT`] decks; any other count is malformed.
pub fn parse_suggestions(raw: &str) -> Result<Vec<DeckSummary>, ChunkRejection> {
    let decks: Vec<DeckSummary> = serde_json::from_str(json_payload(raw))
        .map_err(|e| ChunkRejection::MalformedResponse(e.to_string()))?;

    if decks.len() != SUGGESTION_COUNT {
        return Err(ChunkRejection::MalformedResponse(format!(
            "expected {} deck suggestions, got {}",
            SUGGESTION_COUNT,
            decks.len()
        )));
    }

    Ok(decks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_array(quantities: &[u32]) -> String {
        let entries: Vec<String> = quantities
            .iter()
            .enumerate()
            .map(|(i, q)| {
                format!(
                    r#"{{"name": "Card {i}", "quantity": {q}, "category": "creature", "purpose": "test"}}"#
                )
            })
            .collect();
        format!("[{}]", entries.join(","))
    }

    #[test]
    fn accepts_exact_count() {
        let raw = card_array(&[1; 9]);
        let cards = parse_card_chunk(&raw, 9).unwrap();
        assert_eq!(cards.len(), 9);
    }

    #[test]
    fn accepts_eight_of_nine() {
        // 8 >= 9 * 0.8
        let raw = card_array(&[1; 8]);
        assert!(parse_card_chunk(&raw, 9).is_ok());
    }

    #[test]
    fn rejects_six_of_nine_as_insufficient() {
        let raw = card_array(&[1; 6]);
        let rejection = parse_card_chunk(&raw, 9).unwrap_err();
        assert_eq!(
            rejection,
            ChunkRejection::InsufficientCardinality {
                total: 6,
                expected: 9
            }
        );
    }

    #[test]
    fn floor_boundary_is_inclusive() {
        // 8 == 10 * 0.8 exactly
        let raw = card_array(&[4, 4]);
        assert!(parse_card_chunk(&raw, 10).is_ok());
        let raw = card_array(&[4, 3]);
        assert!(parse_card_chunk(&raw, 10).is_err());
    }

    #[test]
    fn quantities_count_not_entries() {
        // 3 entries, 25 total cards
        let raw = card_array(&[10, 10, 5]);
        let cards = parse_card_chunk(&raw, 25).unwrap();
        assert_eq!(cards.iter().map(|c| c.quantity).sum::<u32>(), 25);
    }

    #[test]
    fn zero_quantity_is_malformed_not_insufficient() {
        let raw = card_array(&[1, 0, 8]);
        let rejection = parse_card_chunk(&raw, 9).unwrap_err();
        assert!(matches!(rejection, ChunkRejection::MalformedResponse(_)));
    }

    #[test]
    fn prose_is_malformed() {
        let rejection = parse_card_chunk("Here are some great cards for you!", 9).unwrap_err();
        assert!(matches!(rejection, ChunkRejection::MalformedResponse(_)));
    }

    #[test]
    fn fenced_json_is_accepted() {
        let raw = format!("```json\n{}\n```", card_array(&[1; 9]));
        assert!(parse_card_chunk(&raw, 9).is_ok());
    }

    #[test]
    fn json_with_preamble_is_accepted() {
        let raw = format!("Here is your deck section:\n{}", card_array(&[1; 9]));
        assert!(parse_card_chunk(&raw, 9).is_ok());
    }

    #[test]
    fn strategy_chunk_parses_object_with_preamble() {
        let raw = r#"Sure! ```json
        {
            "synergies": [],
            "openingHandPriority": ["Sol Ring"],
            "winConditions": ["Combat"],
            "strengths": ["Speed"],
            "weaknesses": ["Removal"]
        }
        ```"#;
        let bundle = parse_strategy_chunk(raw).unwrap();
        assert_eq!(bundle.opening_hand_priority, vec!["Sol Ring"]);
    }

    #[test]
    fn suggestions_must_come_in_threes() {
        let deck = r#"{"id": "d1", "game": "mtg", "name": "A", "commander": "B",
                       "strategy": "C", "powerLevel": 5}"#;
        let two = format!("[{deck},{deck}]");
        assert!(parse_suggestions(&two).is_err());

        let three = format!("[{deck},{deck},{deck}]");
        assert_eq!(parse_suggestions(&three).unwrap().len(), 3);
    }
}
