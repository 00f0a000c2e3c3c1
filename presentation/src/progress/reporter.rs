//! Progress reporting for deck builds

use colored::Colorize;
use decksmith_application::ports::progress::BuildProgress;
use decksmith_domain::{DeckAssembly, DeckSection, Game, SectionResult, SectionStatus};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while the one-shot suggestion call is in flight
pub fn suggestion_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message("Asking for deck suggestions...");
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// Reports build progress with a bar over the section count
pub struct BuildReporter {
    multi: MultiProgress,
    bar: Mutex<Option<ProgressBar>>,
}

impl BuildReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }
}

impl Default for BuildReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildProgress for BuildReporter {
    fn on_build_start(&self, game: Game, section_count: usize) {
        let pb = self.multi.add(ProgressBar::new(section_count as u64));
        pb.set_style(Self::bar_style());
        pb.set_prefix(format!("Building ({})", game.display_name()));
        pb.set_message("Starting...");

        *self.bar.lock().unwrap() = Some(pb);
    }

    fn on_section_resolved(&self, result: &SectionResult, accepted_total: u32, target: u32) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            let status = match &result.status {
                SectionStatus::Ready => format!(
                    "{} {} ({} cards) {}/{}",
                    "v".green(),
                    result.section,
                    result.total_quantity(),
                    accepted_total,
                    target
                ),
                SectionStatus::Failed(failure) => format!(
                    "{} {} ({}) {}/{}",
                    "x".red(),
                    result.section,
                    failure.category(),
                    accepted_total,
                    target
                ),
                SectionStatus::Pending => return,
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_strategy_resolved(&self, success: bool) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            let status = if success {
                format!("{} strategy", "v".green())
            } else {
                format!("{} strategy", "x".red())
            };
            pb.set_message(status);
        }
    }

    fn on_build_complete(&self, assembly: &DeckAssembly) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            pb.finish_with_message(format!(
                "{} {}/{} cards",
                "assembled".green(),
                assembly.accepted_total(),
                assembly.target_size()
            ));
        }
    }

    fn on_section_attempt(&self, section: DeckSection, attempt: u32) {
        if attempt > 1
            && let Some(pb) = self.bar.lock().unwrap().as_ref()
        {
            pb.set_message(format!("retrying {} (attempt {})", section, attempt));
        }
    }

    fn on_strategy_attempt(&self, attempt: u32) {
        if attempt > 1
            && let Some(pb) = self.bar.lock().unwrap().as_ref()
        {
            pb.set_message(format!("retrying strategy (attempt {})", attempt));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl BuildProgress for SimpleProgress {
    fn on_build_start(&self, game: Game, section_count: usize) {
        println!(
            "{} Building a {} deck ({} sections + strategy)",
            "->".cyan(),
            game.display_name().bold(),
            section_count
        );
    }

    fn on_section_resolved(&self, result: &SectionResult, accepted_total: u32, target: u32) {
        match &result.status {
            SectionStatus::Ready => println!(
                "  {} {} ({} cards) {}/{}",
                "v".green(),
                result.section,
                result.total_quantity(),
                accepted_total,
                target
            ),
            SectionStatus::Failed(failure) => println!(
                "  {} {} ({})",
                "x".red(),
                result.section,
                failure.category()
            ),
            SectionStatus::Pending => {}
        }
    }

    fn on_strategy_resolved(&self, success: bool) {
        if success {
            println!("  {} strategy", "v".green());
        } else {
            println!("  {} strategy (failed)", "x".red());
        }
    }

    fn on_build_complete(&self, _assembly: &DeckAssembly) {
        println!();
    }
}
