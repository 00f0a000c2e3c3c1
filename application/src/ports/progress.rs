//! Build progress port
//!
//! Defines the interface for reporting progress during a deck build.

use decksmith_domain::{DeckAssembly, DeckSection, Game, SectionResult};

/// Callback for progress updates while chunks resolve
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain lines, etc.)
pub trait BuildProgress: Send + Sync {
    /// Called once before any chunk is requested
    fn on_build_start(&self, game: Game, section_count: usize);

    /// Called when a section reaches a terminal state. `accepted_total`
    /// and `target` describe the whole assembly after the merge.
    fn on_section_resolved(&self, result: &SectionResult, accepted_total: u32, target: u32);

    /// Called when the strategy fragment resolves
    fn on_strategy_resolved(&self, success: bool);

    /// Called when every chunk has resolved and the assembly is final
    /// for this pass
    fn on_build_complete(&self, assembly: &DeckAssembly);

    // ==================== Attempt Callbacks ====================

    /// Called when a section starts the given attempt (1-based).
    fn on_section_attempt(&self, _section: DeckSection, _attempt: u32) {}

    /// Called when the strategy fragment starts the given attempt.
    fn on_strategy_attempt(&self, _attempt: u32) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl BuildProgress for NoProgress {
    fn on_build_start(&self, _game: Game, _section_count: usize) {}
    fn on_section_resolved(&self, _result: &SectionResult, _accepted_total: u32, _target: u32) {}
    fn on_strategy_resolved(&self, _success: bool) {}
    fn on_build_complete(&self, _assembly: &DeckAssembly) {}
}
