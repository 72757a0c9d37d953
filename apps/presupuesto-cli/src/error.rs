//! Error types for the CLI.

use std::path::PathBuf;

use presupuesto_core::{CoreError, ValidationError};

use crate::config::ConfigError;

/// CLI errors.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    Usage(String),

    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("Invalid budget document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Line {index}: {source}")]
    InvalidLine {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Invalid labor percentage: {0}")]
    InvalidLabor(#[source] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_error_mentions_index() {
        let err = CliError::InvalidLine {
            index: 3,
            source: ValidationError::Required {
                field: "material".to_string(),
            },
        };
        assert_eq!(err.to_string(), "Line 3: material is required");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: CliError = CoreError::EmptyBudget.into();
        assert_eq!(err.to_string(), "Budget has no material lines");
    }
}
