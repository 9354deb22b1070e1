//! Uniform crossover: every gene is an independent coin flip between parents

use rand::Rng;
use tribe_common::{GenomeError, Genome};

/// Probability of inheriting a gene from the first parent
pub const DEFAULT_MIX_RATE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformCrossover {
    mix_rate: f64,
}

impl Default for UniformCrossover {
    fn default() -> Self {
        Self::new(DEFAULT_MIX_RATE)
    }
}

impl UniformCrossover {
    pub fn new(mix_rate: f64) -> Self {
        Self { mix_rate }
    }

    /// Build a child genome over `first`'s genes.
    ///
    /// Genes only `second` carries are not inherited. A gene of `first` that
    /// `second` lacks is an error.
    pub fn cross<R: Rng + ?Sized>(
        &self,
        first: &Genome,
        second: &Genome,
        rng: &mut R,
    ) -> Result<Genome, GenomeError> {
        first
            .iter()
            .map(|(gene, value)| {
                if rng.gen::<f64>() < self.mix_rate {
                    Ok((gene, value))
                } else {
                    second.value(gene).map(|other| (gene, other))
                }
            })
            .collect()
    }
}
