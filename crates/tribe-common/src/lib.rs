//! # Tribe Common
//!
//! Shared types and errors for the tribe simulation.
//!
//! ## Core Types
//!
//! - [`GeneName`]: the five heritable traits of a gatherer
//! - [`GeneRange`]: closed `[min, max]` interval a gene must stay within
//! - [`Genome`]: gene vector carried by each gatherer
//! - [`Gatherer`]: contract between the simulation and the evolution engine
//!
//! ## Defaults
//!
//! The constants below are the baseline evolution settings. The engine reads
//! them through its configuration layer and never mutates them.

use std::collections::BTreeMap;

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{GenomeError, Result, TribeError};
pub use types::{
    gatherer::Gatherer,
    gene::{GeneName, GeneRange, Genome},
};

/// Tribe version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target population size per generation
pub const INITIAL_POPULATION: usize = 50;

/// Fraction of the population selected as survivors
pub const SURVIVAL_RATE: f64 = 0.3;

/// Per-gene mutation probability
pub const MUTATION_RATE: f64 = 0.1;

/// Mutation standard deviation, relative to the gene's range width
pub const MUTATION_STRENGTH: f64 = 0.1;

/// Valid interval for every gene
pub const GENE_RANGES: [(GeneName, f64, f64); 5] = [
    (GeneName::Speed, 0.5, 3.0),
    (GeneName::Caution, 0.0, 1.0),
    (GeneName::SearchPattern, 0.0, 1.0),
    (GeneName::Efficiency, 0.5, 2.0),
    (GeneName::Cooperation, 0.0, 1.0),
];

/// [`GENE_RANGES`] as a lookup table
pub fn default_gene_ranges() -> BTreeMap<GeneName, GeneRange> {
    GENE_RANGES
        .iter()
        .map(|&(gene, min, max)| (gene, GeneRange { min, max }))
        .collect()
}
