//! Gaussian mutation with clamping
//!
//! Each gene mutates independently with probability `rate`. A mutated gene
//! receives a normal perturbation whose standard deviation is `strength`
//! times the width of the gene's range, then is clamped back into the range.

use std::collections::BTreeMap;

use rand::Rng;
use rand_distr::{Distribution, Normal};
use tribe_common::{GeneName, GeneRange, GenomeError, Genome};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianMutation {
    rate: f64,
    strength: f64,
}

impl GaussianMutation {
    pub fn new(rate: f64, strength: f64) -> Self {
        Self { rate, strength }
    }

    /// Mutate `genome` in place, returning how many genes changed.
    ///
    /// Only genes drawn for mutation need a configured range.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        genome: &mut Genome,
        ranges: &BTreeMap<GeneName, GeneRange>,
        rng: &mut R,
    ) -> Result<usize, GenomeError> {
        let mut mutated = 0;

        for (gene, value) in genome.iter_mut() {
            if rng.gen::<f64>() >= self.rate {
                continue;
            }

            let range = ranges
                .get(&gene)
                .ok_or(GenomeError::MissingRange { gene })?;
            let perturbation = Normal::new(0.0, self.strength * range.span())
                .map_err(|_| GenomeError::InvalidRange {
                    min: range.min,
                    max: range.max,
                })?
                .sample(rng);

            *value = range.clamp(*value + perturbation);
            mutated += 1;
        }

        Ok(mutated)
    }
}
