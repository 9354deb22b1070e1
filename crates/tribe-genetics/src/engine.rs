//! Generational evolution engine
//!
//! [`GeneticAlgorithm`] owns the generation counter, both history logs and the
//! random source. Every operation is synchronous; mutating operations take
//! `&mut self`, so callers sharing an engine between threads must wrap it in
//! their own lock.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};
use tribe_common::{Gatherer, TribeError};

use crate::config::EvolutionConfig;
use crate::error::{EvolutionError, Result};
use crate::fitness::FitnessRanking;
use crate::history::{EvolutionState, FitnessRecord, TraitRecord};
use crate::selection::TournamentSelector;
use crate::stats::PopulationStats;
use crate::telemetry::EvolutionMetrics;
use crate::variation::{GaussianMutation, UniformCrossover};

pub struct GeneticAlgorithm<R = StdRng> {
    config: EvolutionConfig,
    selector: TournamentSelector,
    crossover: UniformCrossover,
    mutation: GaussianMutation,
    rng: R,
    state: EvolutionState,
    metrics: Option<Arc<EvolutionMetrics>>,
}

impl GeneticAlgorithm<StdRng> {
    /// Engine seeded from OS entropy
    pub fn new(config: EvolutionConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Reproducible engine
    pub fn with_seed(config: EvolutionConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Engine configured from `.env` and `TRIBE_` environment variables
    pub fn from_env() -> tribe_common::Result<Self> {
        let config = EvolutionConfig::load()?;
        Self::new(config).map_err(|err| TribeError::Config(err.to_string()))
    }
}

impl<R: Rng> GeneticAlgorithm<R> {
    pub fn with_rng(config: EvolutionConfig, rng: R) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            selector: TournamentSelector::new(config.survival_rate),
            crossover: UniformCrossover::default(),
            mutation: GaussianMutation::new(config.mutation_rate, config.mutation_strength),
            config,
            rng,
            state: EvolutionState::new(),
            metrics: None,
        })
    }

    /// Publish per-generation metrics
    pub fn with_metrics(mut self, metrics: Arc<EvolutionMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn state(&self) -> &EvolutionState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.state.generation
    }

    pub fn fitness_history(&self) -> &[FitnessRecord] {
        &self.state.fitness_history
    }

    pub fn trait_history(&self) -> &[TraitRecord] {
        &self.state.trait_history
    }

    pub fn latest_fitness(&self) -> Option<&FitnessRecord> {
        self.state.latest_fitness()
    }

    /// `initial_population` gatherers with their default genes
    pub fn create_initial_population<G: Gatherer>(&self) -> Vec<G> {
        (0..self.config.initial_population)
            .map(|_| G::spawn(None))
            .collect()
    }

    pub fn evaluate_fitness<G: Gatherer>(&self, population: &[G]) -> FitnessRanking {
        FitnessRanking::evaluate(population)
    }

    /// Population indices of the tournament winners
    pub fn select_survivors(&mut self, ranking: &FitnessRanking) -> Result<Vec<usize>> {
        self.selector.select(ranking, &mut self.rng)
    }

    /// Fresh child over `parent1`'s genes, without mutation
    pub fn crossover<G: Gatherer>(&mut self, parent1: &G, parent2: &G) -> Result<G> {
        let genes = self
            .crossover
            .cross(parent1.genes(), parent2.genes(), &mut self.rng)?;
        Ok(G::spawn(Some(genes)))
    }

    /// Mutate `gatherer`'s genes in place.
    ///
    /// Only ever pass a freshly built gatherer, never a member of a live
    /// population.
    pub fn mutate<G: Gatherer>(&mut self, gatherer: &mut G) -> Result<()> {
        self.mutation
            .apply(gatherer.genes_mut(), &self.config.gene_ranges, &mut self.rng)?;
        Ok(())
    }

    /// Evaluate, record, select and breed the next generation.
    ///
    /// Survivors are rebuilt from copies of their genes, so no runtime state
    /// crosses the generation boundary. Offspring fill the population back up
    /// to `initial_population`. On error the engine state is unchanged.
    #[instrument(skip(self, population), fields(generation = self.state.generation, size = population.len()))]
    pub fn create_next_generation<G: Gatherer>(&mut self, population: &[G]) -> Result<Vec<G>> {
        let ranking = self.evaluate_fitness(population);
        let generation = self.state.generation;

        let Some(fitness_record) = FitnessRecord::from_ranking(generation, &ranking) else {
            warn!("Refusing to evolve an empty population");
            return Err(EvolutionError::EmptyPopulation);
        };
        let trait_record = TraitRecord::from_genomes(
            generation,
            ranking.iter().map(|entry| population[entry.index].genes()),
        )?
        .ok_or(EvolutionError::EmptyPopulation)?;

        let survivors = self.select_survivors(&ranking)?;

        let offspring_count = self
            .config
            .initial_population
            .saturating_sub(survivors.len());
        let mut next = Vec::with_capacity(survivors.len() + offspring_count);
        next.extend(
            survivors
                .iter()
                .map(|&index| G::spawn(Some(population[index].genes().clone()))),
        );

        for _ in 0..offspring_count {
            let parent1 = self.pick_parent(&survivors)?;
            let parent2 = self.pick_parent(&survivors)?;
            let mut child = self.crossover(&population[parent1], &population[parent2])?;
            self.mutate(&mut child)?;
            next.push(child);
        }

        debug!(
            survivors = survivors.len(),
            offspring = offspring_count,
            "Next generation bred"
        );

        info!(
            generation,
            best_fitness = fitness_record.best_fitness,
            avg_fitness = fitness_record.avg_fitness,
            survivors = survivors.len(),
            offspring = offspring_count,
            "Generation complete"
        );

        if let Some(metrics) = &self.metrics {
            metrics.observe(&fitness_record, generation + 1, survivors.len(), offspring_count);
        }
        self.state.complete_generation(fitness_record, trait_record);

        Ok(next)
    }

    pub fn get_population_stats<G: Gatherer>(&self, population: &[G]) -> Result<PopulationStats> {
        Ok(PopulationStats::collect(population)?)
    }

    /// Start over from generation 1, handing back the finished run's state
    pub fn reset(&mut self) -> EvolutionState {
        debug!(generation = self.state.generation, "Resetting evolution state");
        std::mem::take(&mut self.state)
    }

    /// Both history logs and the generation counter as a JSON document
    pub fn history_json(&self) -> tribe_common::Result<String> {
        Ok(serde_json::to_string_pretty(&self.state)?)
    }

    /// Uniform pick with replacement from the survivor indices
    fn pick_parent(&mut self, survivors: &[usize]) -> Result<usize> {
        survivors
            .choose(&mut self.rng)
            .copied()
            .ok_or(EvolutionError::EmptyPopulation)
    }
}
