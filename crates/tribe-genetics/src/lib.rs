//! # Genetics
//!
//! Generational evolution engine for the tribe simulation.
//!
//! ## Generation Cycle
//!
//! ```text
//! evaluate -> record -> select -> reproduce -> replace
//! ```
//!
//! - evaluate: every gatherer's fitness, ranked highest first
//! - record: best/average fitness and average traits of the whole generation
//! - select: tournament selection of `max(1, floor(n * survival_rate))`
//!   distinct survivors, tournaments of `max(2, n / 10)` contestants
//! - reproduce: uniform crossover of two survivors, then Gaussian mutation
//!   clamped to each gene's range
//! - replace: survivors rebuilt with fresh state plus offspring, back up to
//!   the configured population size
//!
//! ## Example
//!
//! ```ignore
//! let mut ga = GeneticAlgorithm::from_env()?;
//! let mut population: Vec<MyGatherer> = ga.create_initial_population();
//! for _ in 0..100 {
//!     simulate(&mut population);
//!     population = ga.create_next_generation(&population)?;
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod fitness;
pub mod history;
pub mod selection;
pub mod stats;
pub mod telemetry;
pub mod variation;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ConfigError, EvolutionConfig};
pub use engine::GeneticAlgorithm;
pub use error::{EvolutionError, Result};
pub use fitness::{FitnessRanking, RankedGatherer};
pub use history::{EvolutionState, FitnessRecord, TraitRecord};
pub use selection::TournamentSelector;
pub use stats::PopulationStats;
pub use telemetry::EvolutionMetrics;
pub use variation::{GaussianMutation, UniformCrossover};
