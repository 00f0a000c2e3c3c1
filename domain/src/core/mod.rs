//! Core domain concepts shared across all subdomains.
//!
//! - [`game::Game`]: supported trading card games and their deck rules
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod game;
