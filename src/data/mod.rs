//! Data module - CSV loading and normalization

mod loader;
mod processor;

pub use loader::{DataLoadError, DataLoader, REQUIRED_COLUMNS};
pub use processor::{DataFormatError, DataProcessor, DATE_FORMAT};

use chrono::NaiveDate;

/// One row of the dataset as read from disk, before the date is parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawGameResult {
    pub date: String,
    pub game_id: i64,
    pub player: String,
    pub position: i64,
    pub points: f64,
    pub played: f64,
}

/// One normalized game result.
#[derive(Debug, Clone, PartialEq)]
pub struct GameResult {
    pub date: NaiveDate,
    pub game_id: i64,
    pub player: String,
    /// Finishing rank, 1 is a win.
    pub position: i64,
    pub points: f64,
    pub played: f64,
}

impl GameResult {
    /// Whether the row counts as a game actually played.
    pub fn participated(&self) -> bool {
        self.played > 0.0
    }

    pub fn is_win(&self) -> bool {
        self.position == 1
    }
}
