//! Data Processor Module
//! Normalizes raw rows: parses dates, everything else passes through.

use super::{GameResult, RawGameResult};
use chrono::NaiveDate;
use log::debug;
use thiserror::Error;

/// Date format used by the dataset.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug)]
pub enum DataFormatError {
    #[error("Invalid date '{value}' at row {row}, expected YYYY-MM-DD")]
    InvalidDate { row: usize, value: String },
}

/// Handles row normalization and filtering.
pub struct DataProcessor;

impl DataProcessor {
    /// Parse the date of every row. A single bad date fails the whole batch.
    pub fn normalize(raw: Vec<RawGameResult>) -> Result<Vec<GameResult>, DataFormatError> {
        let rows = raw
            .into_iter()
            .enumerate()
            .map(|(i, r)| {
                let date = Self::parse_date(&r.date).ok_or_else(|| DataFormatError::InvalidDate {
                    row: i + 1,
                    value: r.date.clone(),
                })?;

                Ok(GameResult {
                    date,
                    game_id: r.game_id,
                    player: r.player,
                    position: r.position,
                    points: r.points,
                    played: r.played,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Normalized {} rows", rows.len());
        Ok(rows)
    }

    /// Parse a single `YYYY-MM-DD` date.
    pub fn parse_date(value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
    }

    /// Rows that represent a game actually played.
    pub fn participated_only(rows: &[GameResult]) -> Vec<&GameResult> {
        rows.iter().filter(|r| r.participated()).collect()
    }
}
