//! Progressive deck assembly
//!
//! Sections resolve in whatever order the service answers. The
//! assembly keeps one slot per section, applies results as they
//! arrive, and recomputes the merged view on read, so the rendered
//! deck is identical no matter the arrival order.
//!
//! A failed slot keeps its failure reason until the caller explicitly
//! resets it for a re-fetch; resetting one slot never touches the
//! others.

use std::collections::HashMap;

use serde::Serialize;

use crate::core::game::Game;
use crate::deck::card::CardEntry;
use crate::deck::section::DeckSection;
use crate::deck::strategy::StrategyBundle;
use crate::deck::summary::DeckSummary;
use crate::generation::fault::SectionFailure;

/// Lifecycle of one section inside the assembly
#[derive(Debug, Clone, PartialEq)]
pub enum SectionStatus {
    /// Fetch issued (or not yet issued), no outcome
    Pending,
    /// Validated cards present
    Ready,
    /// Gave up; carries the reason
    Failed(SectionFailure),
}

impl SectionStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, SectionStatus::Ready)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SectionStatus::Failed(_))
    }
}

/// Resolved (or not yet resolved) cards for one section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionResult {
    pub section: DeckSection,
    pub cards: Vec<CardEntry>,
    /// Declared expected total quantity for this section
    pub expected: u32,
    pub status: SectionStatus,
}

impl SectionResult {
    pub fn pending(section: DeckSection, expected: u32) -> Self {
        Self {
            section,
            cards: Vec::new(),
            expected,
            status: SectionStatus::Pending,
        }
    }

    pub fn ready(section: DeckSection, expected: u32, cards: Vec<CardEntry>) -> Self {
        Self {
            section,
            cards,
            expected,
            status: SectionStatus::Ready,
        }
    }

    pub fn failed(section: DeckSection, expected: u32, failure: SectionFailure) -> Self {
        Self {
            section,
            cards: Vec::new(),
            expected,
            status: SectionStatus::Failed(failure),
        }
    }

    /// Sum of entry quantities
    pub fn total_quantity(&self) -> u32 {
        self.cards.iter().map(|c| c.quantity).sum()
    }
}

/// Strategy fragment slot
#[derive(Debug, Clone, PartialEq)]
pub enum StrategySlot {
    Pending,
    Ready(StrategyBundle),
    Failed(SectionFailure),
}

impl StrategySlot {
    pub fn is_ready(&self) -> bool {
        matches!(self, StrategySlot::Ready(_))
    }

    pub fn bundle(&self) -> Option<&StrategyBundle> {
        match self {
            StrategySlot::Ready(bundle) => Some(bundle),
            _ => None,
        }
    }
}

/// Serializable snapshot of everything that has resolved so far
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullDeck {
    pub summary: DeckSummary,
    pub cards: Vec<CardEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<StrategyBundle>,
    pub total_cards: u32,
    pub target_size: u32,
    pub complete: bool,
}

/// Incrementally assembled deck (Aggregate)
///
/// Owns the chosen summary, one result slot per section of the
/// summary's game, and the strategy slot. The single write path is
/// [`DeckAssembly::apply`] (plus [`DeckAssembly::apply_strategy`]);
/// everything else is derived on read.
#[derive(Debug, Clone)]
pub struct DeckAssembly {
    summary: DeckSummary,
    sections: HashMap<DeckSection, SectionResult>,
    strategy: StrategySlot,
}

impl DeckAssembly {
    /// Seed an assembly with every section of the summary's game
    /// pending.
    pub fn new(summary: DeckSummary) -> Self {
        let game = summary.game;
        let sections = DeckSection::for_game(game)
            .iter()
            .map(|&section| {
                (
                    section,
                    SectionResult::pending(section, section.expected_count(game)),
                )
            })
            .collect();
        Self {
            summary,
            sections,
            strategy: StrategySlot::Pending,
        }
    }

    pub fn summary(&self) -> &DeckSummary {
        &self.summary
    }

    pub fn game(&self) -> Game {
        self.summary.game
    }

    /// Merge one resolved section in. Arrival order is irrelevant;
    /// the slot is keyed by section identity.
    pub fn apply(&mut self, result: SectionResult) {
        debug_assert!(
            self.sections.contains_key(&result.section),
            "section {} does not belong to {}",
            result.section,
            self.game()
        );
        self.sections.insert(result.section, result);
    }

    pub fn apply_strategy(&mut self, outcome: Result<StrategyBundle, SectionFailure>) {
        self.strategy = match outcome {
            Ok(bundle) => StrategySlot::Ready(bundle),
            Err(failure) => StrategySlot::Failed(failure),
        };
    }

    /// Return a failed or stale slot to pending so a brand-new fetch
    /// can replace it. Other slots are untouched.
    pub fn reset_section(&mut self, section: DeckSection) {
        let expected = section.expected_count(self.game());
        self.sections
            .insert(section, SectionResult::pending(section, expected));
    }

    pub fn section(&self, section: DeckSection) -> Option<&SectionResult> {
        self.sections.get(&section)
    }

    pub fn strategy(&self) -> &StrategySlot {
        &self.strategy
    }

    /// Section results in display order, regardless of arrival order
    pub fn sections(&self) -> impl Iterator<Item = &SectionResult> {
        DeckSection::for_game(self.game())
            .iter()
            .filter_map(|section| self.sections.get(section))
    }

    /// Concatenation of all ready sections' cards in display order
    pub fn merged_cards(&self) -> Vec<CardEntry> {
        self.sections()
            .filter(|result| result.status.is_ready())
            .flat_map(|result| result.cards.iter().cloned())
            .collect()
    }

    /// Total accepted card quantity across ready sections
    pub fn accepted_total(&self) -> u32 {
        self.sections()
            .filter(|result| result.status.is_ready())
            .map(|result| result.total_quantity())
            .sum()
    }

    /// The format's fixed deck size, for display only
    pub fn target_size(&self) -> u32 {
        self.game().deck_size()
    }

    /// Accepted quantity over target size. Display only, never a gate.
    pub fn completeness(&self) -> f64 {
        f64::from(self.accepted_total()) / f64::from(self.target_size())
    }

    /// All sections ready and the accepted total matching the format's
    /// deck size exactly.
    pub fn is_complete(&self) -> bool {
        self.all_sections_ready() && self.accepted_total() == self.target_size()
    }

    pub fn all_sections_ready(&self) -> bool {
        self.sections().all(|result| result.status.is_ready())
    }

    pub fn failed_sections(&self) -> Vec<DeckSection> {
        self.sections()
            .filter(|result| result.status.is_failed())
            .map(|result| result.section)
            .collect()
    }

    pub fn pending_sections(&self) -> Vec<DeckSection> {
        self.sections()
            .filter(|result| result.status == SectionStatus::Pending)
            .map(|result| result.section)
            .collect()
    }

    /// Any failure that means further completion calls cannot succeed
    pub fn has_quota_failure(&self) -> bool {
        let section_quota = self.sections().any(|result| {
            matches!(&result.status, SectionStatus::Failed(failure) if failure.is_quota())
        });
        let strategy_quota =
            matches!(&self.strategy, StrategySlot::Failed(failure) if failure.is_quota());
        section_quota || strategy_quota
    }

    /// Snapshot for serialization and final rendering
    pub fn full_deck(&self) -> FullDeck {
        FullDeck {
            summary: self.summary.clone(),
            cards: self.merged_cards(),
            strategy: self.strategy.bundle().cloned(),
            total_cards: self.accepted_total(),
            target_size: self.target_size(),
            complete: self.is_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::card::CardCategory;
    use crate::generation::fault::ServiceFault;

    fn summary(game: Game) -> DeckSummary {
        DeckSummary {
            id: "deck-1".to_string(),
            game,
            name: "Test Deck".to_string(),
            leader: "Test Leader".to_string(),
            description: String::new(),
            strategy: "Testing".to_string(),
            estimated_cost: 100,
            key_cards: vec![],
            factions: vec!["Red".to_string()],
            power_level: 5,
        }
    }

    fn cards(name: &str, quantity: u32) -> Vec<CardEntry> {
        vec![CardEntry::new(name, quantity, CardCategory::Creature)]
    }

    fn ready(section: DeckSection, name: &str, quantity: u32) -> SectionResult {
        SectionResult::ready(
            section,
            section.expected_count(Game::Mtg),
            cards(name, quantity),
        )
    }

    #[test]
    fn new_assembly_is_all_pending() {
        let assembly = DeckAssembly::new(summary(Game::Mtg));
        assert_eq!(assembly.pending_sections().len(), 7);
        assert_eq!(assembly.accepted_total(), 0);
        assert!(!assembly.is_complete());
        assert_eq!(*assembly.strategy(), StrategySlot::Pending);
    }

    #[test]
    fn merge_is_order_invariant() {
        let sections = [
            DeckSection::ManaBase,
            DeckSection::EarlyCreatures,
            DeckSection::MidCreatures,
            DeckSection::LateCreatures,
        ];

        let mut forward = DeckAssembly::new(summary(Game::Mtg));
        for (i, &section) in sections.iter().enumerate() {
            forward.apply(ready(section, &format!("Card {i}"), 1));
        }

        // Arrival order 3, 1, 4, 2
        let mut shuffled = DeckAssembly::new(summary(Game::Mtg));
        for &i in &[2usize, 0, 3, 1] {
            shuffled.apply(ready(sections[i], &format!("Card {i}"), 1));
        }

        let forward_names: Vec<String> = forward
            .merged_cards()
            .into_iter()
            .map(|c| c.name)
            .collect();
        let shuffled_names: Vec<String> = shuffled
            .merged_cards()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(forward_names, shuffled_names);
    }

    #[test]
    fn merged_view_skips_failed_and_pending() {
        let mut assembly = DeckAssembly::new(summary(Game::Mtg));
        assembly.apply(ready(DeckSection::EarlyCreatures, "Llanowar Elves", 9));
        assembly.apply(SectionResult::failed(
            DeckSection::RampDraw,
            9,
            SectionFailure::Service(ServiceFault::Transient),
        ));

        assert_eq!(assembly.accepted_total(), 9);
        assert_eq!(assembly.merged_cards().len(), 1);
        assert_eq!(assembly.failed_sections(), vec![DeckSection::RampDraw]);
        assert_eq!(assembly.pending_sections().len(), 5);
    }

    #[test]
    fn one_failure_does_not_block_completion_of_others() {
        let mut assembly = DeckAssembly::new(summary(Game::Mtg));
        assembly.apply(SectionResult::failed(
            DeckSection::ManaBase,
            37,
            SectionFailure::MalformedResponse("bad json".to_string()),
        ));
        for &section in &DeckSection::for_game(Game::Mtg)[1..] {
            assembly.apply(ready(section, "Filler", section.expected_count(Game::Mtg)));
        }

        assert!(!assembly.all_sections_ready());
        assert_eq!(assembly.failed_sections(), vec![DeckSection::ManaBase]);
        // Every other section still contributed its cards
        assert_eq!(assembly.accepted_total(), 89 - 37);
    }

    #[test]
    fn reset_section_leaves_siblings_untouched() {
        let mut assembly = DeckAssembly::new(summary(Game::Mtg));
        assembly.apply(ready(DeckSection::EarlyCreatures, "Elves", 9));
        assembly.apply(SectionResult::failed(
            DeckSection::RampDraw,
            9,
            SectionFailure::InsufficientCardinality {
                total: 4,
                expected: 9,
            },
        ));

        assembly.reset_section(DeckSection::RampDraw);

        assert_eq!(assembly.pending_sections().len(), 6);
        assert!(assembly.failed_sections().is_empty());
        let early = assembly.section(DeckSection::EarlyCreatures).unwrap();
        assert!(early.status.is_ready());
        assert_eq!(early.total_quantity(), 9);
    }

    #[test]
    fn completeness_is_a_ratio_of_target() {
        let mut assembly = DeckAssembly::new(summary(Game::Mtg));
        assembly.apply(ready(DeckSection::ManaBase, "Mountain", 37));
        // 37 of 99
        let ratio = assembly.completeness();
        assert!((ratio - 37.0 / 99.0).abs() < 1e-9);
    }

    #[test]
    fn complete_requires_exact_target() {
        let game = Game::Gundam;
        let mut assembly = DeckAssembly::new(summary(game));
        // Gundam main deck alone is exactly 50; with an empty resource
        // slot the accepted total lands right on the target.
        for &section in DeckSection::for_game(game) {
            let quantity = if section == DeckSection::ManaBase {
                0
            } else {
                section.expected_count(game)
            };
            let entry_cards = if quantity == 0 {
                vec![]
            } else {
                cards("Filler", quantity)
            };
            assembly.apply(SectionResult::ready(
                section,
                section.expected_count(game),
                entry_cards,
            ));
        }

        assert!(assembly.all_sections_ready());
        assert_eq!(assembly.accepted_total(), 50);
        assert!(assembly.is_complete());
    }

    #[test]
    fn quota_failure_is_visible_at_assembly_level() {
        let mut assembly = DeckAssembly::new(summary(Game::Mtg));
        assert!(!assembly.has_quota_failure());
        assembly.apply(SectionResult::failed(
            DeckSection::WinConsArtifacts,
            9,
            SectionFailure::Service(ServiceFault::QuotaExhausted),
        ));
        assert!(assembly.has_quota_failure());
    }

    #[test]
    fn strategy_slot_tracks_failure() {
        let mut assembly = DeckAssembly::new(summary(Game::Mtg));
        assembly.apply_strategy(Err(SectionFailure::Service(ServiceFault::QuotaExhausted)));
        assert!(assembly.has_quota_failure());
        assert!(assembly.strategy().bundle().is_none());
    }

    #[test]
    fn full_deck_snapshot_reflects_partial_state() {
        let mut assembly = DeckAssembly::new(summary(Game::Mtg));
        assembly.apply(ready(DeckSection::ManaBase, "Mountain", 37));
        let deck = assembly.full_deck();
        assert_eq!(deck.total_cards, 37);
        assert_eq!(deck.target_size, 99);
        assert!(!deck.complete);
        assert!(deck.strategy.is_none());
        assert_eq!(deck.cards.len(), 1);
    }
}
