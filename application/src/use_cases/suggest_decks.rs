//! Suggest Decks use case
//!
//! One completion call that proposes three candidate decks for the
//! user's brief. Unlike section fetches this call is not retried: a
//! bad batch of suggestions means the brief itself needs rephrasing,
//! so the error goes straight back to the caller.

use crate::ports::completion::{CompletionError, CompletionGateway};
use crate::ports::generation_log::{GenerationEvent, GenerationLog, NoGenerationLog};
use decksmith_domain::util::preview;
use decksmith_domain::{ChunkRejection, DeckPrompts, DeckRequest, DeckSummary, SUGGESTION_COUNT};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Output token budget for the multi-deck suggestion call
pub const SUGGESTION_TOKEN_BUDGET: u32 = 2000;

#[derive(Error, Debug)]
pub enum SuggestDecksError {
    #[error("completion service failure: {0}")]
    Service(#[from] CompletionError),

    #[error("unusable suggestions: {0}")]
    Invalid(#[from] ChunkRejection),
}

/// Use case for proposing candidate decks
pub struct SuggestDecksUseCase<G: CompletionGateway + 'static> {
    gateway: Arc<G>,
    log: Arc<dyn GenerationLog>,
}

impl<G: CompletionGateway + 'static> SuggestDecksUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            log: Arc::new(NoGenerationLog),
        }
    }

    pub fn with_log(gateway: Arc<G>, log: Arc<dyn GenerationLog>) -> Self {
        Self { gateway, log }
    }

    pub async fn execute(&self, request: &DeckRequest) -> Result<Vec<DeckSummary>, SuggestDecksError> {
        info!(
            "Requesting {} deck suggestions for {}",
            SUGGESTION_COUNT, request.game
        );
        self.log.log(GenerationEvent::new(
            "suggestions_requested",
            json!({
                "game": request.game.as_str(),
                "playstyle": request.playstyle_or_default(),
                "budget": request.budget.as_str(),
                "power": request.power.as_str(),
            }),
        ));

        let prompt = DeckPrompts::suggestions(request);
        let raw = match self
            .gateway
            .complete(&prompt, SUGGESTION_TOKEN_BUDGET)
            .await
        {
            Ok(raw) => raw,
            Err(error) => {
                warn!("Suggestion call failed: {}", error);
                self.log.log(GenerationEvent::new(
                    "suggestions_failed",
                    json!({
                        "fault": error.fault().as_str(),
                        "message": error.message(),
                    }),
                ));
                return Err(error.into());
            }
        };
        debug!("Suggestion response: {}", preview(&raw, 200));

        match decksmith_domain::parse_suggestions(&raw) {
            Ok(decks) => {
                let names: Vec<&str> = decks.iter().map(|d| d.name.as_str()).collect();
                info!("Received suggestions: {}", names.join(", "));
                self.log.log(GenerationEvent::new(
                    "suggestions_ready",
                    json!({ "names": names }),
                ));
                Ok(decks)
            }
            Err(rejection) => {
                warn!("Suggestions rejected: {}", rejection);
                self.log.log(GenerationEvent::new(
                    "suggestions_rejected",
                    json!({
                        "reason": rejection.to_string(),
                        "response_preview": preview(&raw, 200),
                    }),
                ));
                Err(rejection.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use decksmith_domain::{BudgetTier, Game, PlayType, PowerTier, ServiceFault};
    use std::sync::Mutex;

    struct OneShotGateway {
        response: Mutex<Option<Result<String, CompletionError>>>,
        budget_seen: Mutex<Option<u32>>,
    }

    impl OneShotGateway {
        fn new(response: Result<String, CompletionError>) -> Self {
            Self {
                response: Mutex::new(Some(response)),
                budget_seen: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl CompletionGateway for OneShotGateway {
        async fn complete(&self, _prompt: &str, max_tokens: u32) -> Result<String, CompletionError> {
            *self.budget_seen.lock().unwrap() = Some(max_tokens);
            self.response
                .lock()
                .unwrap()
                .take()
                .expect("gateway called more than once")
        }
    }

    fn request() -> DeckRequest {
        DeckRequest::new(
            Game::Mtg,
            PlayType::Friends,
            BudgetTier::Mid,
            PowerTier::Focused,
        )
        .with_playstyle("aggressive goblins")
    }

    fn three_decks() -> String {
        r#"[
            {"id": "deck-1", "game": "mtg", "name": "Goblin Swarm",
             "commander": "Krenko, Mob Boss", "strategy": "Go wide",
             "colors": ["Red"], "powerLevel": 6},
            {"id": "deck-2", "game": "mtg", "name": "Ramp Stompy",
             "commander": "Goreclaw", "strategy": "Big creatures",
             "colors": ["Green"], "powerLevel": 6},
            {"id": "deck-3", "game": "mtg", "name": "Spellslinger",
             "commander": "Niv-Mizzet", "strategy": "Draw and burn",
             "colors": ["Blue", "Red"], "powerLevel": 7}
        ]"#
        .to_string()
    }

    #[tokio::test]
    async fn returns_three_parsed_suggestions() {
        let gateway = Arc::new(OneShotGateway::new(Ok(three_decks())));
        let use_case = SuggestDecksUseCase::new(Arc::clone(&gateway));

        let decks = use_case.execute(&request()).await.unwrap();
        assert_eq!(decks.len(), 3);
        assert_eq!(decks[0].leader, "Krenko, Mob Boss");
        assert_eq!(*gateway.budget_seen.lock().unwrap(), Some(2000));
    }

    #[tokio::test]
    async fn wrong_count_is_invalid_not_retried() {
        let gateway = Arc::new(OneShotGateway::new(Ok(
            r#"[{"id": "deck-1", "game": "mtg", "name": "Solo",
                 "commander": "X", "strategy": "s", "colors": [], "powerLevel": 5}]"#
                .to_string(),
        )));
        let use_case = SuggestDecksUseCase::new(Arc::clone(&gateway));

        let result = use_case.execute(&request()).await;
        assert!(matches!(result, Err(SuggestDecksError::Invalid(_))));
        // OneShotGateway panics on a second call, so reaching here
        // proves there was no retry.
    }

    #[tokio::test]
    async fn service_failure_surfaces_its_fault() {
        let gateway = Arc::new(OneShotGateway::new(Err(CompletionError::new(
            ServiceFault::Auth,
            "invalid key",
        ))));
        let use_case = SuggestDecksUseCase::new(Arc::clone(&gateway));

        match use_case.execute(&request()).await {
            Err(SuggestDecksError::Service(error)) => {
                assert_eq!(error.fault(), ServiceFault::Auth);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
