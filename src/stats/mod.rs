//! Stats module - standings aggregation

mod calculator;
mod standings;

pub use calculator::StandingsCalculator;
pub use standings::{Standings, StandingsError, StandingsRow};
