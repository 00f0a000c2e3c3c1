//! Build Deck use case
//!
//! Orchestrates the chunked build for one chosen deck. Every card
//! section plus the strategy fragment fans out as its own concurrent
//! task; results merge into the assembly in whatever order they
//! arrive. A section that gives up lands in its own slot as a failure,
//! so the build itself never returns an error.

use crate::ports::completion::CompletionGateway;
use crate::ports::generation_log::{GenerationEvent, GenerationLog, NoGenerationLog};
use crate::ports::progress::{BuildProgress, NoProgress};
use crate::use_cases::fetch_section::FetchSectionUseCase;
use decksmith_domain::{
    DeckAssembly, DeckSection, DeckSummary, SectionFailure, SectionResult, StrategyBundle,
};
use serde_json::json;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// One resolved chunk coming back from a spawned task
enum ChunkOutcome {
    Section(SectionResult),
    Strategy(Result<StrategyBundle, SectionFailure>),
}

/// Use case for building one deck out of concurrent chunks
pub struct BuildDeckUseCase<G: CompletionGateway + 'static> {
    gateway: Arc<G>,
    log: Arc<dyn GenerationLog>,
}

impl<G: CompletionGateway + 'static> BuildDeckUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            log: Arc::new(NoGenerationLog),
        }
    }

    pub fn with_log(gateway: Arc<G>, log: Arc<dyn GenerationLog>) -> Self {
        Self { gateway, log }
    }

    /// Execute the build with default (no-op) progress
    pub async fn execute(&self, summary: DeckSummary) -> DeckAssembly {
        self.execute_with_progress(summary, Arc::new(NoProgress))
            .await
    }

    /// Execute the build with progress callbacks
    pub async fn execute_with_progress(
        &self,
        summary: DeckSummary,
        progress: Arc<dyn BuildProgress>,
    ) -> DeckAssembly {
        let game = summary.game;
        let sections = DeckSection::for_game(game);
        info!(
            "Building {} ({}): {} sections plus strategy",
            summary.name,
            game,
            sections.len()
        );
        self.log.log(GenerationEvent::new(
            "build_started",
            json!({
                "deck": summary.id,
                "game": game.as_str(),
                "sections": sections.len(),
            }),
        ));
        progress.on_build_start(game, sections.len());

        let mut assembly = DeckAssembly::new(summary.clone());
        let mut join_set = JoinSet::new();

        for &section in sections {
            let fetcher = self.fetcher();
            let summary = summary.clone();
            let progress = Arc::clone(&progress);
            join_set.spawn(async move {
                ChunkOutcome::Section(fetcher.execute(&summary, section, progress.as_ref()).await)
            });
        }
        {
            let fetcher = self.fetcher();
            let summary = summary.clone();
            let progress = Arc::clone(&progress);
            join_set.spawn(async move {
                ChunkOutcome::Strategy(fetcher.fetch_strategy(&summary, progress.as_ref()).await)
            });
        }

        while let Some(result) = join_set.join_next().await {
            match result {
                Ok(ChunkOutcome::Section(section_result)) => {
                    let section = section_result.section;
                    assembly.apply(section_result);
                    if let Some(slot) = assembly.section(section) {
                        progress.on_section_resolved(
                            slot,
                            assembly.accepted_total(),
                            assembly.target_size(),
                        );
                    }
                }
                Ok(ChunkOutcome::Strategy(outcome)) => {
                    let success = outcome.is_ok();
                    assembly.apply_strategy(outcome);
                    progress.on_strategy_resolved(success);
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                }
            }
        }

        self.log.log(GenerationEvent::new(
            "build_finished",
            json!({
                "deck": assembly.summary().id,
                "accepted_total": assembly.accepted_total(),
                "target": assembly.target_size(),
                "failed_sections": assembly
                    .failed_sections()
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>(),
                "complete": assembly.is_complete(),
            }),
        ));
        progress.on_build_complete(&assembly);
        assembly
    }

    /// Re-fetch every currently failed section, each on a brand-new
    /// fetch machine with the full attempt budget. Ready sections are
    /// left alone. Returns the sections that were retried.
    pub async fn refetch_failed(
        &self,
        assembly: &mut DeckAssembly,
        progress: Arc<dyn BuildProgress>,
    ) -> Vec<DeckSection> {
        let failed = assembly.failed_sections();
        if failed.is_empty() {
            return failed;
        }
        info!(
            "Re-fetching {} failed sections: {}",
            failed.len(),
            failed
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        self.log.log(GenerationEvent::new(
            "refetch_started",
            json!({
                "deck": assembly.summary().id,
                "sections": failed.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            }),
        ));

        let summary = assembly.summary().clone();
        let mut join_set = JoinSet::new();
        for &section in &failed {
            assembly.reset_section(section);
            let fetcher = self.fetcher();
            let summary = summary.clone();
            let progress = Arc::clone(&progress);
            join_set
                .spawn(async move { fetcher.execute(&summary, section, progress.as_ref()).await });
        }

        while let Some(result) = join_set.join_next().await {
            match result {
                Ok(section_result) => {
                    let section = section_result.section;
                    assembly.apply(section_result);
                    if let Some(slot) = assembly.section(section) {
                        progress.on_section_resolved(
                            slot,
                            assembly.accepted_total(),
                            assembly.target_size(),
                        );
                    }
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                }
            }
        }
        failed
    }

    fn fetcher(&self) -> FetchSectionUseCase<G> {
        FetchSectionUseCase::with_log(Arc::clone(&self.gateway), Arc::clone(&self.log))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::completion::CompletionError;
    use async_trait::async_trait;
    use decksmith_domain::{Game, ServiceFault};
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

    fn summary() -> DeckSummary {
        DeckSummary {
            id: "deck-1".to_string(),
            game: Game::Mtg,
            name: "Goblin Swarm".to_string(),
            leader: "Krenko, Mob Boss".to_string(),
            description: "Go wide".to_string(),
            strategy: "Token aggro".to_string(),
            estimated_cost: 120,
            key_cards: vec![],
            factions: vec!["Red".to_string()],
            power_level: 6,
        }
    }

    fn card_array(total: u32) -> String {
        format!(
            r#"[{{"name": "Filler Card", "quantity": {total}, "category": "creature", "purpose": "testing"}}]"#
        )
    }

    fn strategy_json() -> String {
        r#"{
            "synergies": [
                {"cards": ["A", "B"], "description": "engine", "type": "engine"}
            ],
            "openingHandPriority": ["A"],
            "winConditions": ["Swing wide"],
            "strengths": ["Speed"],
            "weaknesses": ["Wraths"]
        }"#
        .to_string()
    }

    /// Answers every build prompt by inspecting its text: the strategy
    /// prompt gets a bundle, sections get a 30-card array. While
    /// `fail_manabase` is set the mana base prompt gets prose instead.
    struct RoutingGateway {
        fail_manabase: AtomicBool,
        calls: AtomicU32,
    }

    impl RoutingGateway {
        fn new(fail_manabase: bool) -> Self {
            Self {
                fail_manabase: AtomicBool::new(fail_manabase),
                calls: AtomicU32::new(0),
            }
        }

        fn heal(&self) {
            self.fail_manabase.store(false, Ordering::SeqCst);
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionGateway for RoutingGateway {
        async fn complete(&self, prompt: &str, _max_tokens: u32) -> Result<String, CompletionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if prompt.contains("synergies") {
                Ok(strategy_json())
            } else if prompt.contains("manabase") && self.fail_manabase.load(Ordering::SeqCst) {
                Ok("I cannot produce a deck list right now.".to_string())
            } else {
                Ok(card_array(30))
            }
        }
    }

    struct QuotaGateway {
        calls: AtomicU32,
    }

    #[async_trait]
    impl CompletionGateway for QuotaGateway {
        async fn complete(&self, _prompt: &str, _max_tokens: u32) -> Result<String, CompletionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(CompletionError::new(
                ServiceFault::QuotaExhausted,
                "credit balance too low",
            ))
        }
    }

    #[derive(Default)]
    struct CountingProgress {
        started: AtomicU32,
        resolved: AtomicU32,
        strategy: AtomicU32,
        completed: AtomicU32,
    }

    impl BuildProgress for CountingProgress {
        fn on_build_start(&self, _game: Game, _section_count: usize) {
            self.started.fetch_add(1, Ordering::SeqCst);
        }
        fn on_section_resolved(&self, _result: &SectionResult, _accepted_total: u32, _target: u32) {
            self.resolved.fetch_add(1, Ordering::SeqCst);
        }
        fn on_strategy_resolved(&self, _success: bool) {
            self.strategy.fetch_add(1, Ordering::SeqCst);
        }
        fn on_build_complete(&self, _assembly: &DeckAssembly) {
            self.completed.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn resolves_every_section_and_the_strategy() {
        let gateway = Arc::new(RoutingGateway::new(false));
        let use_case = BuildDeckUseCase::new(Arc::clone(&gateway));
        let progress = Arc::new(CountingProgress::default());

        let assembly = use_case
            .execute_with_progress(summary(), Arc::clone(&progress) as Arc<dyn BuildProgress>)
            .await;

        assert!(assembly.all_sections_ready());
        assert!(assembly.strategy().is_ready());
        assert_eq!(assembly.accepted_total(), 7 * 30);
        // Target size is a display denominator, not a success gate
        assert!(!assembly.is_complete());
        // 7 sections + 1 strategy, one attempt each
        assert_eq!(gateway.calls(), 8);

        assert_eq!(progress.started.load(Ordering::SeqCst), 1);
        assert_eq!(progress.resolved.load(Ordering::SeqCst), 7);
        assert_eq!(progress.strategy.load(Ordering::SeqCst), 1);
        assert_eq!(progress.completed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn one_failing_section_leaves_siblings_ready() {
        let gateway = Arc::new(RoutingGateway::new(true));
        let use_case = BuildDeckUseCase::new(Arc::clone(&gateway));

        let assembly = use_case.execute(summary()).await;

        assert_eq!(assembly.failed_sections(), vec![DeckSection::ManaBase]);
        assert!(assembly.strategy().is_ready());
        assert_eq!(assembly.accepted_total(), 6 * 30);
        // 6 clean sections + 3 mana base attempts + 1 strategy
        assert_eq!(gateway.calls(), 10);
    }

    #[tokio::test]
    async fn quota_exhaustion_fails_each_chunk_in_one_call() {
        let gateway = Arc::new(QuotaGateway {
            calls: AtomicU32::new(0),
        });
        let use_case = BuildDeckUseCase::new(Arc::clone(&gateway));

        let assembly = use_case.execute(summary()).await;

        assert_eq!(assembly.failed_sections().len(), 7);
        assert!(!assembly.strategy().is_ready());
        assert!(assembly.has_quota_failure());
        assert_eq!(assembly.accepted_total(), 0);
        // No chunk burned a retry on a dead account
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 8);
    }

    #[tokio::test]
    async fn refetch_retries_only_failed_sections() {
        let gateway = Arc::new(RoutingGateway::new(true));
        let use_case = BuildDeckUseCase::new(Arc::clone(&gateway));

        let mut assembly = use_case.execute(summary()).await;
        assert_eq!(assembly.failed_sections(), vec![DeckSection::ManaBase]);
        let calls_after_build = gateway.calls();

        gateway.heal();
        let retried = use_case
            .refetch_failed(&mut assembly, Arc::new(NoProgress))
            .await;

        assert_eq!(retried, vec![DeckSection::ManaBase]);
        assert!(assembly.all_sections_ready());
        assert_eq!(assembly.accepted_total(), 7 * 30);
        // Exactly one extra call; ready sections were not re-fetched
        assert_eq!(gateway.calls(), calls_after_build + 1);
    }

    #[tokio::test]
    async fn refetch_with_nothing_failed_is_a_no_op() {
        let gateway = Arc::new(RoutingGateway::new(false));
        let use_case = BuildDeckUseCase::new(Arc::clone(&gateway));

        let mut assembly = use_case.execute(summary()).await;
        let calls_after_build = gateway.calls();

        let retried = use_case
            .refetch_failed(&mut assembly, Arc::new(NoProgress))
            .await;

        assert!(retried.is_empty());
        assert_eq!(gateway.calls(), calls_after_build);
    }
}
