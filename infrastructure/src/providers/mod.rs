//! Completion service adapters

pub mod anthropic;

pub use anthropic::AnthropicCompletionClient;
