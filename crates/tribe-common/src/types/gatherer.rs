//! Gatherer - the unit of selection
//!
//! The simulation owns what a gatherer does during its lifetime (movement,
//! foraging, survival). Evolution only needs the contract below: build one
//! from genes, read and write its genes, ask whether it is alive and how fit
//! it turned out to be.

use super::gene::Genome;

/// Agent entity evolved by the genetic algorithm
pub trait Gatherer {
    /// Create a fresh gatherer.
    ///
    /// `None` asks the implementation for its own default gene vector.
    /// The returned instance carries no runtime state from any previous
    /// gatherer, even when built from a copied genome.
    fn spawn(genes: Option<Genome>) -> Self
    where
        Self: Sized;

    fn genes(&self) -> &Genome;

    fn genes_mut(&mut self) -> &mut Genome;

    fn is_alive(&self) -> bool;

    /// Fitness at the end of a generation. Must not have side effects.
    fn calculate_fitness(&self) -> f64;
}
