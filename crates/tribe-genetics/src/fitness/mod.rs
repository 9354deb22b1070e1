//! Fitness evaluation module
pub mod ranking;

pub use self::ranking::{FitnessRanking, RankedGatherer};
