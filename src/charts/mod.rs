//! Charts module - Chart data preparation and rendering

mod renderer;
mod series;

pub use renderer::StaticChartRenderer;
pub use series::{cumulative_points, position_frequencies, PlayerSeries, PositionHistogram};

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name of the cumulative points chart.
pub const LINE_CHART_FILE: &str = "StandingsOverTime-line.png";
/// File name of the position histogram grid.
pub const HISTOGRAM_FILE: &str = "standings-hist.png";

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to render chart: {0}")]
    Render(String),
    #[error("No data to plot")]
    NoData,
    #[error("Invalid chart style: {0}")]
    Style(#[from] serde_json::Error),
}

/// Styling passed explicitly to every render call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub font_family: String,
    /// Line chart size in pixels (width, height).
    pub line_size: (u32, u32),
    /// Histogram grid size in pixels (width, height).
    pub histogram_size: (u32, u32),
    pub title_font_size: f64,
    pub subplot_title_font_size: f64,
    pub label_font_size: f64,
    pub tick_font_size: f64,
    pub line_width: u32,
    pub margin: u32,
    pub label_area_size: u32,
    /// Days added before the first and after the last date on the time axis.
    pub date_padding_days: i64,
    pub histogram_columns: usize,
    /// Histogram x axis always covers at least `1..=max_position`.
    pub max_position: i64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            line_size: (2600, 2200),
            histogram_size: (2500, 3000),
            title_font_size: 38.0,
            subplot_title_font_size: 30.0,
            label_font_size: 36.0,
            tick_font_size: 24.0,
            line_width: 4,
            margin: 30,
            label_area_size: 90,
            date_padding_days: 3,
            histogram_columns: 2,
            max_position: 6,
        }
    }
}

impl ChartStyle {
    /// Load a style from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ChartError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Override both image sizes.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.line_size = (width, height);
        self.histogram_size = (width, height);
        self
    }
}
