//! Configuration file loading for decksmith
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `DECKSMITH_*` overrides
//! 2. `--config <path>` specified file
//! 3. Project root: `./decksmith.toml` or `./.decksmith.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/decksmith/config.toml`
//! 5. Fallback: `~/.config/decksmith/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAccessConfig, FileConfig, FileOutputConfig, FileOutputFormat, FileProviderConfig,
};
pub use loader::ConfigLoader;
