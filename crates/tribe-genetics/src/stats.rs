//! Population statistics
//!
//! A read-only snapshot of the current population. Averages cover the alive
//! gatherers; once the whole population has died they fall back to covering
//! everyone, so a wiped-out generation still reports what it looked like.

use serde::{Deserialize, Serialize};
use tribe_common::{Gatherer, GeneName, GenomeError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopulationStats {
    pub alive_count: usize,
    pub total_count: usize,
    pub avg_fitness: f64,
    pub best_fitness: f64,
    pub avg_speed: f64,
    pub avg_caution: f64,
    pub avg_cooperation: f64,
}

impl PopulationStats {
    /// Zeroed stats for an empty population, otherwise averages over the
    /// alive subset (or everyone if nobody is alive)
    pub fn collect<G: Gatherer>(population: &[G]) -> Result<Self, GenomeError> {
        if population.is_empty() {
            return Ok(Self::default());
        }

        let alive: Vec<&G> = population.iter().filter(|g| g.is_alive()).collect();
        let alive_count = alive.len();
        let sample = if alive.is_empty() {
            population.iter().collect()
        } else {
            alive
        };

        let fitness: Vec<f64> = sample.iter().map(|g| g.calculate_fitness()).collect();
        let count = sample.len() as f64;

        let avg_gene = |gene: GeneName| -> Result<f64, GenomeError> {
            let mut total = 0.0;
            for gatherer in &sample {
                total += gatherer.genes().value(gene)?;
            }
            Ok(total / count)
        };

        Ok(Self {
            alive_count,
            total_count: population.len(),
            avg_fitness: fitness.iter().sum::<f64>() / count,
            best_fitness: fitness.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            avg_speed: avg_gene(GeneName::Speed)?,
            avg_caution: avg_gene(GeneName::Caution)?,
            avg_cooperation: avg_gene(GeneName::Cooperation)?,
        })
    }

    pub fn survival_ratio(&self) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        self.alive_count as f64 / self.total_count as f64
    }
}
