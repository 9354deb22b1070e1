//! Genes - named, range-bounded real-valued traits
//!
//! A [`Genome`] maps every [`GeneName`] a gatherer carries to its current
//! value. Iteration always follows the canonical gene order so that a seeded
//! random source produces the same draws on every run.

use std::collections::BTreeMap;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenomeError;

/// The fixed set of heritable traits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneName {
    /// Movement speed multiplier
    Speed,
    /// Tendency to avoid danger
    Caution,
    /// Exploration style while foraging
    SearchPattern,
    /// Resource gathering efficiency
    Efficiency,
    /// Willingness to share with the tribe
    Cooperation,
}

impl GeneName {
    /// All genes in canonical order
    pub const ALL: [GeneName; 5] = [
        GeneName::Speed,
        GeneName::Caution,
        GeneName::SearchPattern,
        GeneName::Efficiency,
        GeneName::Cooperation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GeneName::Speed => "speed",
            GeneName::Caution => "caution",
            GeneName::SearchPattern => "search_pattern",
            GeneName::Efficiency => "efficiency",
            GeneName::Cooperation => "cooperation",
        }
    }
}

impl fmt::Display for GeneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed interval `[min, max]` a gene value must stay within
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneRange {
    pub min: f64,
    pub max: f64,
}

impl GeneRange {
    pub fn new(min: f64, max: f64) -> Result<Self, GenomeError> {
        // Written so that NaN bounds are rejected too
        if !(min <= max) {
            return Err(GenomeError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Width of the interval, used to scale mutation strength
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Uniform draw within the interval
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if !(self.span() > 0.0) {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }
}

impl fmt::Display for GeneRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Gene vector carried by a gatherer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Genome(BTreeMap<GeneName, f64>);

impl Genome {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Draw every gene uniformly from its configured range
    pub fn random<R: Rng + ?Sized>(ranges: &BTreeMap<GeneName, GeneRange>, rng: &mut R) -> Self {
        ranges
            .iter()
            .map(|(gene, range)| (*gene, range.sample(rng)))
            .collect()
    }

    pub fn get(&self, gene: GeneName) -> Option<f64> {
        self.0.get(&gene).copied()
    }

    /// Like [`Genome::get`], but a missing gene is an error
    pub fn value(&self, gene: GeneName) -> Result<f64, GenomeError> {
        self.get(gene).ok_or(GenomeError::MissingGene { gene })
    }

    /// Set a gene value, returning the previous one
    pub fn set(&mut self, gene: GeneName, value: f64) -> Option<f64> {
        self.0.insert(gene, value)
    }

    pub fn contains(&self, gene: GeneName) -> bool {
        self.0.contains_key(&gene)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = GeneName> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GeneName, f64)> + '_ {
        self.0.iter().map(|(gene, value)| (*gene, *value))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (GeneName, &mut f64)> + '_ {
        self.0.iter_mut().map(|(gene, value)| (*gene, value))
    }

    /// True if both genomes carry exactly the same genes
    pub fn same_genes(&self, other: &Genome) -> bool {
        self.0.keys().eq(other.0.keys())
    }
}

impl FromIterator<(GeneName, f64)> for Genome {
    fn from_iter<I: IntoIterator<Item = (GeneName, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(GeneName, f64); N]> for Genome {
    fn from(genes: [(GeneName, f64); N]) -> Self {
        genes.into_iter().collect()
    }
}
