//! Standings table and its output formats.

use polars::prelude::*;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StandingsError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Aggregated results for a single player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsRow {
    pub player: String,
    pub games_played: u32,
    pub points: f64,
    /// `None` when the player has no game played.
    pub ppg: Option<f64>,
    pub wins: u32,
}

impl StandingsRow {
    /// Points per game, zero-filled when undefined.
    pub fn ppg(&self) -> f64 {
        self.ppg.unwrap_or(0.0)
    }
}

/// Standings ordered by points, highest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Standings {
    rows: Vec<StandingsRow>,
}

impl Standings {
    pub(crate) fn new(rows: Vec<StandingsRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[StandingsRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a player's row.
    pub fn get(&self, player: &str) -> Option<&StandingsRow> {
        self.rows.iter().find(|r| r.player == player)
    }

    /// Build a DataFrame with columns `player, games_played, points, ppg, wins`.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let players: Vec<&str> = self.rows.iter().map(|r| r.player.as_str()).collect();
        let games_played: Vec<u32> = self.rows.iter().map(|r| r.games_played).collect();
        let points: Vec<f64> = self.rows.iter().map(|r| r.points).collect();
        let ppg: Vec<Option<f64>> = self.rows.iter().map(|r| r.ppg).collect();
        let wins: Vec<u32> = self.rows.iter().map(|r| r.wins).collect();

        DataFrame::new(vec![
            Column::new("player".into(), players),
            Column::new("games_played".into(), games_played),
            Column::new("points".into(), points),
            Column::new("ppg".into(), ppg),
            Column::new("wins".into(), wins),
        ])
    }

    /// Write the standings as CSV. Undefined ppg is left empty.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), StandingsError> {
        let mut df = self.to_dataframe()?;
        CsvWriter::new(writer).include_header(true).finish(&mut df)?;
        Ok(())
    }

    /// Pretty-printed JSON array of rows. Undefined ppg is `null`.
    pub fn to_json(&self) -> Result<String, StandingsError> {
        Ok(serde_json::to_string_pretty(&self.rows)?)
    }
}

impl fmt::Display for Standings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|r| r.player.chars().count())
            .max()
            .unwrap_or(0)
            .max("player".len());

        writeln!(
            f,
            "{:<width$}  {:>12}  {:>10}  {:>8}  {:>5}",
            "player", "games_played", "points", "ppg", "wins"
        )?;
        writeln!(f, "{:-<1$}", "", width + 45)?;

        for row in &self.rows {
            // Undefined ppg is printed as "-" rather than a silent zero
            let ppg = row
                .ppg
                .map(|p| format!("{:.2}", p))
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                f,
                "{:<width$}  {:>12}  {:>10.2}  {:>8}  {:>5}",
                row.player, row.games_played, row.points, ppg, row.wins
            )?;
        }
        Ok(())
    }
}
