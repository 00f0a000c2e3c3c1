//! Presentation layer for decksmith
//!
//! This crate contains CLI definitions, output formatting,
//! progress reporting, and interactive prompts.

pub mod cli;
pub mod interact;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::{ConsoleFormatter, disable_color};
pub use progress::reporter::{BuildReporter, SimpleProgress, suggestion_spinner};
