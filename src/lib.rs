//! Poker Standings - league leaderboard and charts from a CSV game log.

pub mod charts;
pub mod config;
pub mod data;
pub mod report;
pub mod stats;

pub use config::{OutputFormat, ReportConfig};
pub use report::{run, Report, ReportError};
