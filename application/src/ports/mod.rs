//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod access;
pub mod card_catalog;
pub mod completion;
pub mod generation_log;
pub mod progress;
