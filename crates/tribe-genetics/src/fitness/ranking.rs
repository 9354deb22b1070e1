//! Fitness ranking: one fresh fitness query per gatherer, fittest first

use std::cmp::Ordering;

use tracing::warn;
use tribe_common::Gatherer;

/// A gatherer's position in the evaluated population and its fitness
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedGatherer {
    /// Index into the population the ranking was built from
    pub index: usize,
    pub fitness: f64,
}

/// Population sorted by fitness, highest first
///
/// Ties keep population order. NaN fitness ranks below every real value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitnessRanking {
    entries: Vec<RankedGatherer>,
}

impl FitnessRanking {
    /// Query every gatherer, alive or dead, and rank the results
    pub fn evaluate<G: Gatherer>(population: &[G]) -> Self {
        let entries = population
            .iter()
            .enumerate()
            .map(|(index, gatherer)| {
                let fitness = gatherer.calculate_fitness();
                if fitness.is_nan() {
                    warn!(index, "Gatherer reported NaN fitness");
                }
                RankedGatherer { index, fitness }
            })
            .collect();

        Self::from_entries(entries)
    }

    /// Rank precomputed entries
    pub fn from_entries(mut entries: Vec<RankedGatherer>) -> Self {
        // sort_by is stable, equal fitness keeps input order
        entries.sort_by(|a, b| {
            rank_key(b.fitness)
                .partial_cmp(&rank_key(a.fitness))
                .unwrap_or(Ordering::Equal)
        });
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RankedGatherer] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedGatherer> {
        self.entries.iter()
    }

    /// Fitness of the top-ranked gatherer
    pub fn best(&self) -> Option<f64> {
        self.entries.first().map(|entry| entry.fitness)
    }

    /// Arithmetic mean fitness
    pub fn average(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let total: f64 = self.entries.iter().map(|entry| entry.fitness).sum();
        Some(total / self.entries.len() as f64)
    }
}

/// Sort key that ranks NaN below every real value
pub(crate) fn rank_key(fitness: f64) -> f64 {
    if fitness.is_nan() {
        f64::NEG_INFINITY
    } else {
        fitness
    }
}

impl<'a> IntoIterator for &'a FitnessRanking {
    type Item = &'a RankedGatherer;
    type IntoIter = std::slice::Iter<'a, RankedGatherer>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestGatherer;

    #[test]
    fn test_sorted_descending() {
        let population: Vec<_> = [1.0, 7.5, 3.0, 9.0]
            .into_iter()
            .map(TestGatherer::with_fitness)
            .collect();

        let ranking = FitnessRanking::evaluate(&population);
        let indices: Vec<_> = ranking.iter().map(|entry| entry.index).collect();

        assert_eq!(indices, vec![3, 1, 2, 0]);
        assert_eq!(ranking.best(), Some(9.0));
        assert_eq!(ranking.average(), Some(5.125));
    }

    #[test]
    fn test_ties_keep_population_order() {
        let population: Vec<_> = (0..10).map(|_| TestGatherer::with_fitness(5.0)).collect();

        let ranking = FitnessRanking::evaluate(&population);

        assert_eq!(ranking.len(), 10);
        let indices: Vec<_> = ranking.iter().map(|entry| entry.index).collect();
        assert_eq!(indices, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_dead_gatherers_are_ranked() {
        let population = vec![
            TestGatherer::with_fitness(2.0).dead(),
            TestGatherer::with_fitness(4.0),
        ];

        let ranking = FitnessRanking::evaluate(&population);

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking.entries()[1].index, 0);
    }

    #[test]
    fn test_nan_fitness_ranks_last() {
        let population = vec![
            TestGatherer::with_fitness(1.0),
            TestGatherer::with_fitness(f64::NAN),
            TestGatherer::with_fitness(3.0),
        ];

        let ranking = FitnessRanking::evaluate(&population);
        let indices: Vec<_> = ranking.iter().map(|entry| entry.index).collect();
        assert_eq!(indices, vec![2, 0, 1]);
    }

    #[test]
    fn test_empty_population() {
        let ranking = FitnessRanking::evaluate::<TestGatherer>(&[]);
        assert!(ranking.is_empty());
        assert_eq!(ranking.best(), None);
        assert_eq!(ranking.average(), None);
    }
}
