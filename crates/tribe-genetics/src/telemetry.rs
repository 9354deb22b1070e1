//! Prometheus metrics for the evolution loop

use prometheus::{Gauge, IntCounter, IntGauge, Registry};

use crate::history::FitnessRecord;

/// Metrics updated after every completed generation
pub struct EvolutionMetrics {
    pub generation: IntGauge,
    pub generations_total: IntCounter,
    pub best_fitness: Gauge,
    pub avg_fitness: Gauge,
    pub survivors: IntGauge,
    pub offspring_total: IntCounter,
}

impl EvolutionMetrics {
    pub fn new() -> prometheus::Result<Self> {
        Ok(Self {
            generation: IntGauge::new("tribe_generation", "Current generation number")?,
            generations_total: IntCounter::new(
                "tribe_generations_total",
                "Total generational transitions completed",
            )?,
            best_fitness: Gauge::new(
                "tribe_best_fitness",
                "Best fitness of the last evaluated generation",
            )?,
            avg_fitness: Gauge::new(
                "tribe_avg_fitness",
                "Average fitness of the last evaluated generation",
            )?,
            survivors: IntGauge::new(
                "tribe_survivors",
                "Survivors carried into the current generation",
            )?,
            offspring_total: IntCounter::new(
                "tribe_offspring_total",
                "Total offspring bred by crossover and mutation",
            )?,
        })
    }

    pub fn register(&self, registry: &Registry) -> prometheus::Result<()> {
        registry.register(Box::new(self.generation.clone()))?;
        registry.register(Box::new(self.generations_total.clone()))?;
        registry.register(Box::new(self.best_fitness.clone()))?;
        registry.register(Box::new(self.avg_fitness.clone()))?;
        registry.register(Box::new(self.survivors.clone()))?;
        registry.register(Box::new(self.offspring_total.clone()))?;
        Ok(())
    }

    /// Record a completed transition into `next_generation`
    pub fn observe(
        &self,
        record: &FitnessRecord,
        next_generation: u64,
        survivors: usize,
        offspring: usize,
    ) {
        self.generation.set(next_generation as i64);
        self.generations_total.inc();
        self.best_fitness.set(record.best_fitness);
        self.avg_fitness.set(record.avg_fitness);
        self.survivors.set(survivors as i64);
        self.offspring_total.inc_by(offspring as u64);
    }
}
