//! Core types for the tribe simulation

pub mod gatherer;
pub mod gene;

pub use gatherer::Gatherer;
pub use gene::{GeneName, GeneRange, Genome};
