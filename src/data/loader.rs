//! CSV Data Loader Module
//! Reads the game log with Polars and extracts typed rows.

use super::RawGameResult;
use log::{debug, info};
use polars::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Columns every dataset must carry.
pub const REQUIRED_COLUMNS: [&str; 6] = ["date", "game_id", "player", "position", "points", "played"];

#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("Dataset not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Missing or unreadable value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Loads the game log into memory.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file and convert every row into a [`RawGameResult`].
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<RawGameResult>, DataLoadError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(DataLoadError::NotFound(path.to_path_buf()));
        }

        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;

        info!("Loaded {} rows from {}", df.height(), path.display());
        Self::from_dataframe(&df)
    }

    /// Extract game results from an already loaded DataFrame.
    pub fn from_dataframe(df: &DataFrame) -> Result<Vec<RawGameResult>, DataLoadError> {
        let columns = Self::get_columns(df);
        debug!("Dataset columns: {:?}", columns);
        Self::verify_required_columns(&columns)?;

        let dates = df.column("date")?.cast(&DataType::String)?;
        let dates = dates.str()?;
        let players = df.column("player")?.cast(&DataType::String)?;
        let players = players.str()?;
        let game_ids = df.column("game_id")?.cast(&DataType::Int64)?;
        let game_ids = game_ids.i64()?;
        let positions = df.column("position")?.cast(&DataType::Int64)?;
        let positions = positions.i64()?;
        let points = df.column("points")?.cast(&DataType::Float64)?;
        let points = points.f64()?;
        let played = df.column("played")?.cast(&DataType::Float64)?;
        let played = played.f64()?;

        (0..df.height())
            .map(|i| {
                let row = i + 1;
                Ok(RawGameResult {
                    date: required(dates.get(i), "date", row)?.to_string(),
                    game_id: required(game_ids.get(i), "game_id", row)?,
                    player: required(players.get(i), "player", row)?.to_string(),
                    position: required(positions.get(i), "position", row)?,
                    points: required(points.get(i), "points", row)?,
                    played: required(played.get(i), "played", row)?,
                })
            })
            .collect()
    }

    /// Distinct player names in order of first appearance.
    pub fn distinct_players(rows: &[RawGameResult]) -> Vec<String> {
        let mut seen = HashSet::new();
        rows.iter()
            .filter(|r| seen.insert(r.player.as_str()))
            .map(|r| r.player.clone())
            .collect()
    }

    fn get_columns(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn verify_required_columns(headers: &[String]) -> Result<(), DataLoadError> {
        let headers: HashSet<&str> = headers.iter().map(|s| s.as_str()).collect();
        for column in REQUIRED_COLUMNS {
            if !headers.contains(column) {
                return Err(DataLoadError::MissingColumn(column.to_string()));
            }
        }
        Ok(())
    }
}

fn required<T>(value: Option<T>, column: &str, row: usize) -> Result<T, DataLoadError> {
    value.ok_or_else(|| DataLoadError::MissingValue {
        column: column.to_string(),
        row,
    })
}
