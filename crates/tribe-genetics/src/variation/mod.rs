//! Genetic variation: crossover and mutation
pub mod crossover;
pub mod mutation;

pub use self::crossover::UniformCrossover;
pub use self::mutation::GaussianMutation;
