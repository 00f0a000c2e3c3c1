//! Infrastructure layer for decksmith
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod access;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use access::FileAccessStore;
pub use catalog::ScryfallCardCatalog;
pub use config::{
    ConfigLoader, FileAccessConfig, FileConfig, FileOutputConfig, FileOutputFormat,
    FileProviderConfig,
};
pub use logging::JsonlGenerationLog;
pub use providers::AnthropicCompletionClient;
