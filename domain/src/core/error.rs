//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown game: {0}")]
    UnknownGame(String),

    #[error("Unknown deck section: {0}")]
    UnknownSection(String),

    #[error("Invalid deck request: {0}")]
    InvalidRequest(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_game_display() {
        let error = DomainError::UnknownGame("chess".to_string());
        assert_eq!(error.to_string(), "Unknown game: chess");
    }

    #[test]
    fn unknown_section_display() {
        let error = DomainError::UnknownSection("sideboard".to_string());
        assert_eq!(error.to_string(), "Unknown deck section: sideboard");
    }
}
