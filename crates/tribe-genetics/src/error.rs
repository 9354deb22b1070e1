//! Evolution engine errors

use thiserror::Error;
use tribe_common::GenomeError;

use crate::config::ConfigError;

/// Result type alias using EvolutionError
pub type Result<T> = std::result::Result<T, EvolutionError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvolutionError {
    #[error("Population is empty")]
    EmptyPopulation,

    #[error("Genome error: {0}")]
    Genome(#[from] GenomeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
