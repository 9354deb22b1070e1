//! Error types for the tribe simulation
//!
//! Provides a unified error type and the gene-level error variants shared by
//! every crate that touches a [`Genome`](crate::Genome).

use thiserror::Error;

use crate::types::gene::GeneName;

/// Result type alias using TribeError
pub type Result<T> = std::result::Result<T, TribeError>;

/// Unified error type for tribe operations
#[derive(Debug, Error)]
pub enum TribeError {
    // Genome errors
    #[error("Genome error: {0}")]
    Genome(#[from] GenomeError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Gene vector errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenomeError {
    #[error("Gene {gene} is missing from the genome")]
    MissingGene { gene: GeneName },

    #[error("No valid range configured for gene {gene}")]
    MissingRange { gene: GeneName },

    #[error("Invalid gene range: min {min} > max {max}")]
    InvalidRange { min: f64, max: f64 },
}

impl From<serde_json::Error> for TribeError {
    fn from(err: serde_json::Error) -> Self {
        TribeError::Serialization(err.to_string())
    }
}

/// `anyhow` only appears at the configuration loading edge
impl From<anyhow::Error> for TribeError {
    fn from(err: anyhow::Error) -> Self {
        TribeError::Config(format!("{err:#}"))
    }
}
