//! Evolution configuration

use std::collections::BTreeMap;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tribe_common::{GeneName, GeneRange};

/// Settings the engine reads on every generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Target population size
    pub initial_population: usize,
    /// Fraction of each generation kept as survivors, in (0, 1]
    pub survival_rate: f64,
    /// Per-gene mutation probability, in [0, 1]
    pub mutation_rate: f64,
    /// Mutation standard deviation as a fraction of the gene's range width
    pub mutation_strength: f64,
    /// Valid interval for every gene
    pub gene_ranges: BTreeMap<GeneName, GeneRange>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            initial_population: tribe_common::INITIAL_POPULATION,
            survival_rate: tribe_common::SURVIVAL_RATE,
            mutation_rate: tribe_common::MUTATION_RATE,
            mutation_strength: tribe_common::MUTATION_STRENGTH,
            gene_ranges: tribe_common::default_gene_ranges(),
        }
    }
}

/// Out-of-range configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("initial_population must be positive")]
    EmptyPopulation,

    #[error("survival_rate must be in (0, 1], got: {0}")]
    SurvivalRateOutOfRange(f64),

    #[error("mutation_rate must be between 0.0 and 1.0, got: {0}")]
    MutationRateOutOfRange(f64),

    #[error("mutation_strength must be a non-negative finite number, got: {0}")]
    InvalidMutationStrength(f64),

    #[error("gene range for {gene} is invalid: [{min}, {max}]")]
    InvalidGeneRange { gene: GeneName, min: f64, max: f64 },
}

impl EvolutionConfig {
    /// Load configuration from `.env` and `TRIBE_` prefixed environment variables
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let mut cfg = Self::default();

        if let Some(v) = env_var("TRIBE_INITIAL_POPULATION")? {
            cfg.initial_population = v;
        }
        if let Some(v) = env_var("TRIBE_SURVIVAL_RATE")? {
            cfg.survival_rate = v;
        }
        if let Some(v) = env_var("TRIBE_MUTATION_RATE")? {
            cfg.mutation_rate = v;
        }
        if let Some(v) = env_var("TRIBE_MUTATION_STRENGTH")? {
            cfg.mutation_strength = v;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.initial_population == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if !(self.survival_rate > 0.0 && self.survival_rate <= 1.0) {
            return Err(ConfigError::SurvivalRateOutOfRange(self.survival_rate));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        if !(self.mutation_strength.is_finite() && self.mutation_strength >= 0.0) {
            return Err(ConfigError::InvalidMutationStrength(self.mutation_strength));
        }
        for (gene, range) in &self.gene_ranges {
            if !(range.min.is_finite() && range.max.is_finite() && range.min <= range.max) {
                return Err(ConfigError::InvalidGeneRange {
                    gene: *gene,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }

    pub fn with_initial_population(mut self, size: usize) -> Self {
        self.initial_population = size;
        self
    }

    pub fn with_survival_rate(mut self, rate: f64) -> Self {
        self.survival_rate = rate;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn with_mutation_strength(mut self, strength: f64) -> Self {
        self.mutation_strength = strength;
        self
    }

    pub fn with_gene_ranges(mut self, ranges: BTreeMap<GeneName, GeneRange>) -> Self {
        self.gene_ranges = ranges;
        self
    }
}

fn env_var<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        Err(_) => Ok(None),
    }
}
