//! CLI entrypoint for decksmith
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use decksmith_application::{
    AccessStore, BuildDeckUseCase, BuildProgress, CardCatalog, CardPrinting, GenerationLog,
    NoCatalog, NoGenerationLog, NoProgress, Session, SuggestDecksUseCase,
};
use decksmith_domain::{DeckRequest, DeckSummary, Game};
use decksmith_infrastructure::{
    AnthropicCompletionClient, ConfigLoader, FileAccessStore, FileConfig, FileOutputFormat,
    JsonlGenerationLog, ScryfallCardCatalog,
};
use decksmith_presentation::{
    BuildReporter, Cli, ConsoleFormatter, OutputFormat, SimpleProgress, disable_color, interact,
    suggestion_spinner,
};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    if cli.logout {
        if let Some(store) = FileAccessStore::default_location() {
            store.clear();
        }
        println!("Remembered access cleared.");
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow!("configuration error: {e}"))?
    };

    if !config.output.color {
        disable_color();
    }

    unlock(&config)?;

    info!("Starting decksmith");

    // === Dependency Injection ===
    let gateway = Arc::new(AnthropicCompletionClient::from_config(&config.provider)?);
    let log: Arc<dyn GenerationLog> = match &config.output.attempt_log {
        Some(path) => match JsonlGenerationLog::new(path) {
            Some(jsonl) => Arc::new(jsonl),
            None => Arc::new(NoGenerationLog),
        },
        None => Arc::new(NoGenerationLog),
    };

    let fancy = !cli.quiet && std::io::stderr().is_terminal();

    // Phase 1: one call proposing three deck concepts
    let mut request = DeckRequest::new(cli.game, cli.play_type, cli.budget, cli.power);
    if let Some(playstyle) = &cli.playstyle {
        request = request.with_playstyle(playstyle.as_str());
    }
    if let Some(leader) = &cli.leader {
        request = request.with_leader(leader.as_str());
    }

    let suggest = SuggestDecksUseCase::with_log(Arc::clone(&gateway), Arc::clone(&log));
    let spinner = fancy.then(suggestion_spinner);
    let outcome = suggest.execute(&request).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let suggestions = outcome?;

    if !cli.quiet {
        println!("{}", ConsoleFormatter::format_suggestions(&suggestions));
    }

    let index = interact::pick_suggestion(&suggestions, cli.pick)?;
    let chosen = suggestions
        .get(index)
        .cloned()
        .ok_or_else(|| anyhow!("suggestion {} does not exist", index + 1))?;

    // Phase 2 + 3: concurrent section fetches merging into one deck
    let build = BuildDeckUseCase::with_log(Arc::clone(&gateway), Arc::clone(&log));
    let progress: Arc<dyn BuildProgress> = if cli.quiet {
        Arc::new(NoProgress)
    } else if fancy {
        Arc::new(BuildReporter::new())
    } else {
        Arc::new(SimpleProgress)
    };

    let mut assembly = build
        .execute_with_progress(chosen, Arc::clone(&progress))
        .await;

    // Failed sections get one explicit re-fetch pass, never silently
    if !assembly.failed_sections().is_empty() {
        if assembly.has_quota_failure() {
            eprintln!(
                "API quota exhausted. Add credits, then re-run with --retry-failed to \
                 fetch the missing sections."
            );
        } else if interact::confirm_retry(assembly.failed_sections().len(), cli.retry_failed)? {
            build
                .refetch_failed(&mut assembly, Arc::clone(&progress))
                .await;
        }
    }

    let format = match cli.output {
        Some(format) => format,
        None => match config.output.format {
            FileOutputFormat::Full => OutputFormat::Full,
            FileOutputFormat::Summary => OutputFormat::Summary,
            FileOutputFormat::Json => OutputFormat::Json,
        },
    };

    // Leader card detail is cosmetic; only the full view shows it
    let leader_printing = if matches!(format, OutputFormat::Full) {
        lookup_leader(assembly.summary()).await
    } else {
        None
    };

    let rendered = match format {
        OutputFormat::Full => ConsoleFormatter::format_deck(&assembly, leader_printing.as_ref()),
        OutputFormat::Summary => ConsoleFormatter::format_summary(&assembly),
        OutputFormat::Json => ConsoleFormatter::format_json(&assembly),
    };
    println!("{}", rendered);

    if cli.export {
        println!("{}", ConsoleFormatter::format_export(&assembly));
    }

    Ok(())
}

/// Enforce the access gate when a password is configured.
fn unlock(config: &FileConfig) -> Result<()> {
    let Some(password) = config.access.resolve_password() else {
        return Ok(());
    };
    let store = FileAccessStore::default_location()
        .ok_or_else(|| anyhow!("no config directory available for the access flag"))?;

    let mut session = Session::init(true, &store);
    if session.is_unlocked() {
        return Ok(());
    }
    if !interact::interactive() {
        bail!("an access password is configured; run interactively once to unlock");
    }

    let entered = interact::prompt_password()?;
    if entered != password {
        bail!("incorrect password");
    }
    session.grant(&store);
    Ok(())
}

/// Look up printed details for the deck's leader, when the game has a
/// public catalog.
async fn lookup_leader(summary: &DeckSummary) -> Option<CardPrinting> {
    let catalog: Arc<dyn CardCatalog> = match summary.game {
        Game::Mtg => Arc::new(ScryfallCardCatalog::new()),
        Game::Gundam => Arc::new(NoCatalog),
    };
    catalog.lookup(&summary.leader).await
}
