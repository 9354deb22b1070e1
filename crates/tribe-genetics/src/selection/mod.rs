//! Survivor selection module
pub mod tournament;

pub use self::tournament::TournamentSelector;
