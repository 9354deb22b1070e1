//! Integration tests for the evolution engine
//!
//! Drives the public API end to end with a small foraging gatherer:
//! - Multi-generation runs with history bookkeeping
//! - Selection pressure across generations
//! - Stats fallback once a generation dies out
//! - Reset between runs

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tribe_common::{default_gene_ranges, Gatherer, GeneName, Genome};
use tribe_genetics::{EvolutionConfig, EvolutionError, GeneticAlgorithm};

/// Gatherer whose simulated haul depends on speed and efficiency
#[derive(Debug, Clone)]
struct Forager {
    genes: Genome,
    alive: bool,
    food: f64,
}

impl Forager {
    /// Stand-in for a simulation tick
    fn forage(&mut self) {
        let speed = self.genes.get(GeneName::Speed).unwrap_or(0.0);
        let efficiency = self.genes.get(GeneName::Efficiency).unwrap_or(0.0);
        let caution = self.genes.get(GeneName::Caution).unwrap_or(0.0);
        self.food += speed * efficiency;
        if caution < 0.1 {
            self.alive = false;
        }
    }
}

impl Gatherer for Forager {
    fn spawn(genes: Option<Genome>) -> Self {
        let genes = genes.unwrap_or_else(|| {
            GeneName::ALL
                .iter()
                .map(|&gene| {
                    let range = default_gene_ranges()[&gene];
                    (gene, range.min + range.span() * 0.25)
                })
                .collect()
        });
        Self {
            genes,
            alive: true,
            food: 0.0,
        }
    }

    fn genes(&self) -> &Genome {
        &self.genes
    }

    fn genes_mut(&mut self) -> &mut Genome {
        &mut self.genes
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn calculate_fitness(&self) -> f64 {
        self.food + if self.alive { 1.0 } else { 0.0 }
    }
}

fn random_population(size: usize, seed: u64) -> Vec<Forager> {
    let ranges = default_gene_ranges();
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| Forager::spawn(Some(Genome::random(&ranges, &mut rng))))
        .collect()
}

fn run(ga: &mut GeneticAlgorithm, mut population: Vec<Forager>, generations: usize) -> Vec<Forager> {
    for _ in 0..generations {
        population.iter_mut().for_each(Forager::forage);
        population = ga.create_next_generation(&population).unwrap();
    }
    population
}

#[cfg(test)]
mod generation_tests {
    use super::*;

    /// Test: history grows in lockstep with the generation counter
    #[test]
    fn test_multi_generation_bookkeeping() {
        let config = EvolutionConfig::default().with_initial_population(30);
        let mut ga = GeneticAlgorithm::with_seed(config, 11).unwrap();

        let population = run(&mut ga, random_population(30, 1), 10);

        assert_eq!(population.len(), 30);
        assert_eq!(ga.generation(), 11);
        assert_eq!(ga.fitness_history().len(), 10);
        assert_eq!(ga.trait_history().len(), 10);
        for (n, (fitness, traits)) in ga
            .fitness_history()
            .iter()
            .zip(ga.trait_history())
            .enumerate()
        {
            assert_eq!(fitness.generation, n as u64 + 1);
            assert_eq!(traits.generation, fitness.generation);
            assert!(fitness.best_fitness >= fitness.avg_fitness);
        }
    }

    /// Test: new generations start alive with nothing carried over
    #[test]
    fn test_next_generation_has_fresh_state() {
        let config = EvolutionConfig::default().with_initial_population(20);
        let mut ga = GeneticAlgorithm::with_seed(config, 5).unwrap();

        let mut population = random_population(20, 2);
        population.iter_mut().for_each(Forager::forage);
        let next = ga.create_next_generation(&population).unwrap();

        assert!(next.iter().all(|f| f.alive && f.food == 0.0));
    }

    /// Test: selection pushes the productive traits upward
    #[test]
    fn test_selection_improves_haul() {
        let config = EvolutionConfig::default()
            .with_initial_population(60)
            .with_mutation_rate(0.05);
        let mut ga = GeneticAlgorithm::with_seed(config, 1234).unwrap();

        run(&mut ga, random_population(60, 3), 25);

        let first = &ga.trait_history()[0];
        let last = ga.trait_history().last().unwrap();
        let productivity = |speed: f64, efficiency: f64| speed * efficiency;
        assert!(
            productivity(last.avg_speed, last.avg_efficiency)
                > productivity(first.avg_speed, first.avg_efficiency)
        );
    }

    /// Test: every gene stays in range over a long, heavily mutated run
    #[test]
    fn test_genes_stay_in_range() {
        let config = EvolutionConfig::default()
            .with_initial_population(25)
            .with_mutation_rate(0.8)
            .with_mutation_strength(2.0);
        let mut ga = GeneticAlgorithm::with_seed(config, 8).unwrap();

        let population = run(&mut ga, random_population(25, 4), 15);

        let ranges = default_gene_ranges();
        for forager in &population {
            let keys: HashSet<_> = forager.genes().names().collect();
            assert_eq!(keys.len(), GeneName::ALL.len());
            for (gene, value) in forager.genes().iter() {
                assert!(ranges[&gene].contains(value), "{gene} = {value}");
            }
        }
    }

    /// Test: an empty population is rejected without touching state
    #[test]
    fn test_empty_population_rejected() {
        let mut ga = GeneticAlgorithm::with_seed(EvolutionConfig::default(), 0).unwrap();

        let result = ga.create_next_generation::<Forager>(&[]);

        assert!(matches!(result, Err(EvolutionError::EmptyPopulation)));
        assert_eq!(ga.generation(), 1);
    }
}

#[cfg(test)]
mod stats_tests {
    use super::*;

    /// Test: a wiped-out generation reports averages over everyone
    #[test]
    fn test_stats_fallback_when_all_dead() {
        let ga = GeneticAlgorithm::with_seed(EvolutionConfig::default(), 0).unwrap();
        let mut population = random_population(8, 6);
        for forager in &mut population {
            forager.genes.set(GeneName::Caution, 0.0);
            forager.forage();
        }

        let stats = ga.get_population_stats(&population).unwrap();

        assert_eq!(stats.alive_count, 0);
        assert_eq!(stats.total_count, 8);
        assert!(stats.avg_fitness > 0.0);
        assert!(stats.avg_speed > 0.0);
        assert_eq!(stats.avg_caution, 0.0);
    }
}

#[cfg(test)]
mod reset_tests {
    use super::*;

    /// Test: reset starts a clean run and hands back the old one
    #[test]
    fn test_reset_between_runs() {
        let config = EvolutionConfig::default().with_initial_population(10);
        let mut ga = GeneticAlgorithm::with_seed(config, 21).unwrap();
        run(&mut ga, random_population(10, 7), 3);

        let finished = ga.reset();

        assert_eq!(finished.generation, 4);
        assert_eq!(finished.trait_history.len(), 3);
        assert_eq!(ga.generation(), 1);
        assert!(ga.fitness_history().is_empty());
        assert!(ga.trait_history().is_empty());

        run(&mut ga, random_population(10, 8), 2);
        assert_eq!(ga.generation(), 3);
    }
}
