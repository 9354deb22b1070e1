//! Tournament selection of survivors
//!
//! Each tournament samples a handful of distinct contestants from the ranked
//! population and keeps the fittest one that has not already survived. When
//! every contestant has already survived, the tournament is redrawn from the
//! gatherers still waiting, so each round adds exactly one survivor.
//! Survivors are identified by their index in the evaluated population, so
//! two gatherers with identical genes are still different survivors.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, instrument};

use crate::error::{EvolutionError, Result};
use crate::fitness::ranking::rank_key;
use crate::fitness::{FitnessRanking, RankedGatherer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TournamentSelector {
    survival_rate: f64,
}

impl TournamentSelector {
    pub fn new(survival_rate: f64) -> Self {
        Self { survival_rate }
    }

    /// `max(1, floor(total * survival_rate))`, never more than `total`
    pub fn survival_count(&self, total: usize) -> usize {
        let count = (total as f64 * self.survival_rate).floor() as usize;
        count.max(1).min(total)
    }

    /// 10% of the population, at least 2
    pub fn tournament_size(&self, total: usize) -> usize {
        (total / 10).max(2)
    }

    /// Run tournaments until `survival_count` distinct survivors are found.
    ///
    /// Returns population indices in the order they won.
    #[instrument(skip(self, ranking, rng), fields(total = ranking.len()))]
    pub fn select<R: Rng + ?Sized>(&self, ranking: &FitnessRanking, rng: &mut R) -> Result<Vec<usize>> {
        let total = ranking.len();
        if total == 0 {
            return Err(EvolutionError::EmptyPopulation);
        }

        let survival_count = self.survival_count(total);
        let contestants_per_round = self.tournament_size(total).min(total);

        let mut survivors = Vec::with_capacity(survival_count);
        let mut selected = HashSet::with_capacity(survival_count);
        let mut redraws = 0usize;

        while survivors.len() < survival_count {
            let winner = match tournament(ranking.entries(), contestants_per_round, &selected, rng) {
                Some(winner) => winner,
                None => {
                    redraws += 1;
                    let waiting: Vec<RankedGatherer> = ranking
                        .iter()
                        .filter(|entry| !selected.contains(&entry.index))
                        .copied()
                        .collect();
                    tournament(&waiting, contestants_per_round, &selected, rng)
                        .ok_or(EvolutionError::EmptyPopulation)?
                }
            };

            selected.insert(winner.index);
            survivors.push(winner.index);
        }

        debug!(
            survival_count,
            tournament_size = contestants_per_round,
            redraws,
            "Survivors selected"
        );

        Ok(survivors)
    }
}

/// Fittest contestant drawn from `pool` that has not already survived
fn tournament<R: Rng + ?Sized>(
    pool: &[RankedGatherer],
    size: usize,
    selected: &HashSet<usize>,
    rng: &mut R,
) -> Option<RankedGatherer> {
    pool.choose_multiple(rng, size)
        .filter(|contestant| !selected.contains(&contestant.index))
        .copied()
        .reduce(fitter)
}

/// Strictly greater fitness wins, so ties go to the earlier contestant.
/// NaN loses to every real value.
fn fitter(best: RankedGatherer, challenger: RankedGatherer) -> RankedGatherer {
    if rank_key(challenger.fitness) > rank_key(best.fitness) {
        challenger
    } else {
        best
    }
}
