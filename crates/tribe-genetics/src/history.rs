//! Per-generation history logs
//!
//! Every successful generational transition appends exactly one
//! [`FitnessRecord`] and one [`TraitRecord`], so both logs always have the
//! same length.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tribe_common::{GeneName, GenomeError, Genome};

use crate::fitness::FitnessRanking;

/// First generation number
pub const FIRST_GENERATION: u64 = 1;

/// Fitness summary of one evaluated generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessRecord {
    pub generation: u64,
    pub best_fitness: f64,
    pub avg_fitness: f64,
    pub recorded_at: DateTime<Utc>,
}

impl FitnessRecord {
    /// Summarize a ranking, `None` when it is empty
    pub fn from_ranking(generation: u64, ranking: &FitnessRanking) -> Option<Self> {
        Some(Self {
            generation,
            best_fitness: ranking.best()?,
            avg_fitness: ranking.average()?,
            recorded_at: Utc::now(),
        })
    }
}

/// Average gene values over a whole generation, survivors or not
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitRecord {
    pub generation: u64,
    pub avg_speed: f64,
    pub avg_caution: f64,
    pub avg_search_pattern: f64,
    pub avg_efficiency: f64,
    pub avg_cooperation: f64,
    pub recorded_at: DateTime<Utc>,
}

impl TraitRecord {
    /// Average every tracked gene over `genomes`.
    ///
    /// Each genome must carry all of [`GeneName::ALL`]. `None` when there
    /// are no genomes.
    pub fn from_genomes<'a, I>(generation: u64, genomes: I) -> Result<Option<Self>, GenomeError>
    where
        I: IntoIterator<Item = &'a Genome>,
    {
        let mut sums = [0.0f64; GeneName::ALL.len()];
        let mut count = 0usize;

        for genome in genomes {
            for (sum, gene) in sums.iter_mut().zip(GeneName::ALL) {
                *sum += genome.value(gene)?;
            }
            count += 1;
        }

        if count == 0 {
            return Ok(None);
        }

        let [speed, caution, search_pattern, efficiency, cooperation] =
            sums.map(|sum| sum / count as f64);

        Ok(Some(Self {
            generation,
            avg_speed: speed,
            avg_caution: caution,
            avg_search_pattern: search_pattern,
            avg_efficiency: efficiency,
            avg_cooperation: cooperation,
            recorded_at: Utc::now(),
        }))
    }

    pub fn average(&self, gene: GeneName) -> f64 {
        match gene {
            GeneName::Speed => self.avg_speed,
            GeneName::Caution => self.avg_caution,
            GeneName::SearchPattern => self.avg_search_pattern,
            GeneName::Efficiency => self.avg_efficiency,
            GeneName::Cooperation => self.avg_cooperation,
        }
    }
}

/// Generation counter plus both history logs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionState {
    pub generation: u64,
    pub fitness_history: Vec<FitnessRecord>,
    pub trait_history: Vec<TraitRecord>,
}

impl Default for EvolutionState {
    fn default() -> Self {
        Self::new()
    }
}

impl EvolutionState {
    pub fn new() -> Self {
        Self {
            generation: FIRST_GENERATION,
            fitness_history: Vec::new(),
            trait_history: Vec::new(),
        }
    }

    /// Append one generation's records and move to the next generation
    pub(crate) fn complete_generation(&mut self, fitness: FitnessRecord, traits: TraitRecord) {
        self.fitness_history.push(fitness);
        self.trait_history.push(traits);
        self.generation += 1;
    }

    pub fn latest_fitness(&self) -> Option<&FitnessRecord> {
        self.fitness_history.last()
    }

    pub fn latest_traits(&self) -> Option<&TraitRecord> {
        self.trait_history.last()
    }

    /// Number of generations completed since the last reset
    pub fn completed_generations(&self) -> usize {
        self.fitness_history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::RankedGatherer;

    #[test]
    fn test_fitness_record_from_ranking() {
        let ranking = FitnessRanking::from_entries(vec![
            RankedGatherer { index: 0, fitness: 2.0 },
            RankedGatherer { index: 1, fitness: 6.0 },
            RankedGatherer { index: 2, fitness: 4.0 },
        ]);

        let record = FitnessRecord::from_ranking(3, &ranking).unwrap();

        assert_eq!(record.generation, 3);
        assert_eq!(record.best_fitness, 6.0);
        assert_eq!(record.avg_fitness, 4.0);
        assert!(FitnessRecord::from_ranking(3, &FitnessRanking::default()).is_none());
    }

    #[test]
    fn test_trait_record_averages() {
        let low: Genome = GeneName::ALL.iter().map(|&gene| (gene, 0.0)).collect();
        let high: Genome = GeneName::ALL.iter().map(|&gene| (gene, 1.0)).collect();

        let record = TraitRecord::from_genomes(1, [&low, &high, &high])
            .unwrap()
            .unwrap();

        for gene in GeneName::ALL {
            assert!((record.average(gene) - 2.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_trait_record_requires_tracked_genes() {
        let partial = Genome::from([(GeneName::Speed, 1.0)]);

        let result = TraitRecord::from_genomes(1, [&partial]);
        assert_eq!(
            result,
            Err(GenomeError::MissingGene {
                gene: GeneName::Caution
            })
        );
    }

    #[test]
    fn test_trait_record_empty() {
        assert_eq!(TraitRecord::from_genomes(1, std::iter::empty::<&Genome>()).unwrap(), None);
    }

    #[test]
    fn test_new_state() {
        let state = EvolutionState::new();
        assert_eq!(state.generation, 1);
        assert!(state.fitness_history.is_empty());
        assert!(state.trait_history.is_empty());
        assert_eq!(state, EvolutionState::default());
    }
}
