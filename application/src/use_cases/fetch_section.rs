//! Fetch Section use case
//!
//! Drives one chunk through the bounded-retry machine: build the
//! prompt once, send it with the attempt's token budget, validate the
//! response, accept or go around again until the machine is terminal.
//!
//! A card section always comes back as a [`SectionResult`], failure
//! included; the fate of one section is a status, not an error, so it
//! can never poison a sibling running next to it.

use crate::ports::completion::CompletionGateway;
use crate::ports::generation_log::{GenerationEvent, GenerationLog, NoGenerationLog};
use crate::ports::progress::BuildProgress;
use decksmith_domain::util::preview;
use decksmith_domain::{
    CardEntry, ChunkFetch, DeckPrompts, DeckSection, DeckSummary, SectionFailure, SectionResult,
    StrategyBundle, parse_card_chunk, parse_strategy_chunk, strategy_token_budget,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for fetching a single chunk (card section or strategy)
pub struct FetchSectionUseCase<G: CompletionGateway + 'static> {
    gateway: Arc<G>,
    log: Arc<dyn GenerationLog>,
}

impl<G: CompletionGateway + 'static> FetchSectionUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            log: Arc::new(NoGenerationLog),
        }
    }

    pub fn with_log(gateway: Arc<G>, log: Arc<dyn GenerationLog>) -> Self {
        Self { gateway, log }
    }

    /// Fetch one card section to a terminal result.
    ///
    /// The prompt is built once; retries resend it unchanged with the
    /// attempt's (smaller) token budget.
    pub async fn execute(
        &self,
        summary: &DeckSummary,
        section: DeckSection,
        progress: &dyn BuildProgress,
    ) -> SectionResult {
        let expected = section.expected_count(summary.game);
        let prompt = DeckPrompts::section(summary, section);
        let mut fetch: ChunkFetch<Vec<CardEntry>> = ChunkFetch::new();

        while !fetch.is_terminal() {
            let attempt = fetch.begin();
            let max_tokens = section.token_budget(attempt);
            progress.on_section_attempt(section, attempt);
            self.log.log(GenerationEvent::new(
                "section_attempt",
                json!({
                    "deck": summary.id,
                    "section": section.as_str(),
                    "attempt": attempt,
                    "max_tokens": max_tokens,
                }),
            ));

            match self.gateway.complete(&prompt, max_tokens).await {
                Ok(raw) => {
                    fetch.response_received();
                    debug!(
                        "Section {} attempt {} returned {} bytes",
                        section,
                        attempt,
                        raw.len()
                    );
                    match parse_card_chunk(&raw, expected) {
                        Ok(cards) => fetch.accept(cards),
                        Err(rejection) => {
                            warn!(
                                "Section {} attempt {} rejected: {}",
                                section, attempt, rejection
                            );
                            self.log.log(GenerationEvent::new(
                                "section_rejected",
                                json!({
                                    "deck": summary.id,
                                    "section": section.as_str(),
                                    "attempt": attempt,
                                    "reason": rejection.to_string(),
                                    "response_preview": preview(&raw, 200),
                                }),
                            ));
                            fetch.reject(rejection);
                        }
                    }
                }
                Err(error) => {
                    warn!("Section {} attempt {} failed: {}", section, attempt, error);
                    self.log.log(GenerationEvent::new(
                        "section_call_failed",
                        json!({
                            "deck": summary.id,
                            "section": section.as_str(),
                            "attempt": attempt,
                            "fault": error.fault().as_str(),
                            "message": error.message(),
                        }),
                    ));
                    fetch.service_failure(error.fault());
                }
            }
        }

        match fetch.into_outcome() {
            Ok(cards) => {
                let result = SectionResult::ready(section, expected, cards);
                info!(
                    "Section {} ready: {} of {} cards",
                    section,
                    result.total_quantity(),
                    expected
                );
                self.log.log(GenerationEvent::new(
                    "section_ready",
                    json!({
                        "deck": summary.id,
                        "section": section.as_str(),
                        "total": result.total_quantity(),
                        "expected": expected,
                    }),
                ));
                result
            }
            Err(failure) => {
                warn!("Section {} failed: {}", section, failure);
                self.log.log(GenerationEvent::new(
                    "section_failed",
                    json!({
                        "deck": summary.id,
                        "section": section.as_str(),
                        "category": failure.category(),
                        "reason": failure.to_string(),
                    }),
                ));
                SectionResult::failed(section, expected, failure)
            }
        }
    }

    /// Fetch the strategy fragment under the same retry policy.
    ///
    /// Unlike card sections the strategy has no slot constructors of
    /// its own, so the raw outcome is returned and the assembly stores
    /// it via [`DeckAssembly::apply_strategy`].
    ///
    /// [`DeckAssembly::apply_strategy`]: decksmith_domain::DeckAssembly::apply_strategy
    pub async fn fetch_strategy(
        &self,
        summary: &DeckSummary,
        progress: &dyn BuildProgress,
    ) -> Result<StrategyBundle, SectionFailure> {
        let prompt = DeckPrompts::strategy(summary);
        let mut fetch: ChunkFetch<StrategyBundle> = ChunkFetch::new();

        while !fetch.is_terminal() {
            let attempt = fetch.begin();
            let max_tokens = strategy_token_budget(attempt);
            progress.on_strategy_attempt(attempt);
            self.log.log(GenerationEvent::new(
                "strategy_attempt",
                json!({
                    "deck": summary.id,
                    "attempt": attempt,
                    "max_tokens": max_tokens,
                }),
            ));

            match self.gateway.complete(&prompt, max_tokens).await {
                Ok(raw) => {
                    fetch.response_received();
                    match parse_strategy_chunk(&raw) {
                        Ok(bundle) => fetch.accept(bundle),
                        Err(rejection) => {
                            warn!("Strategy attempt {} rejected: {}", attempt, rejection);
                            self.log.log(GenerationEvent::new(
                                "strategy_rejected",
                                json!({
                                    "deck": summary.id,
                                    "attempt": attempt,
                                    "reason": rejection.to_string(),
                                    "response_preview": preview(&raw, 200),
                                }),
                            ));
                            fetch.reject(rejection);
                        }
                    }
                }
                Err(error) => {
                    warn!("Strategy attempt {} failed: {}", attempt, error);
                    self.log.log(GenerationEvent::new(
                        "strategy_call_failed",
                        json!({
                            "deck": summary.id,
                            "attempt": attempt,
                            "fault": error.fault().as_str(),
                            "message": error.message(),
                        }),
                    ));
                    fetch.service_failure(error.fault());
                }
            }
        }

        let outcome = fetch.into_outcome();
        match &outcome {
            Ok(_) => {
                info!("Strategy ready for deck {}", summary.id);
                self.log
                    .log(GenerationEvent::new("strategy_ready", json!({ "deck": summary.id })));
            }
            Err(failure) => {
                warn!("Strategy failed: {}", failure);
                self.log.log(GenerationEvent::new(
                    "strategy_failed",
                    json!({
                        "deck": summary.id,
                        "category": failure.category(),
                    }),
                ));
            }
        }
        outcome
    }
}
