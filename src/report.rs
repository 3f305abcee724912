//! Report pipeline: load, normalize, aggregate, render.

use crate::charts::{
    cumulative_points, position_frequencies, ChartError, StaticChartRenderer, HISTOGRAM_FILE,
    LINE_CHART_FILE,
};
use crate::config::{OutputFormat, ReportConfig};
use crate::data::{DataFormatError, DataLoadError, DataLoader, DataProcessor, GameResult};
use crate::stats::{Standings, StandingsCalculator, StandingsError};
use log::{info, warn};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Load(#[from] DataLoadError),
    #[error(transparent)]
    Format(#[from] DataFormatError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error(transparent)]
    Output(#[from] StandingsError),
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a report run.
#[derive(Debug)]
pub struct Report {
    pub standings: Standings,
    /// Chart files written, empty when charts are disabled or there is no data.
    pub charts: Vec<PathBuf>,
}

/// Load and normalize the dataset.
pub fn load_results(path: &Path) -> Result<Vec<GameResult>, ReportError> {
    let raw = DataLoader::load_csv(path)?;
    info!("{} players in dataset", DataLoader::distinct_players(&raw).len());
    Ok(DataProcessor::normalize(raw)?)
}

/// Render both charts into `plots_dir`, creating it if needed.
pub fn render_charts(
    rows: &[GameResult],
    config: &ReportConfig,
) -> Result<Vec<PathBuf>, ChartError> {
    if rows.is_empty() {
        warn!("Dataset is empty, skipping charts");
        return Ok(Vec::new());
    }

    fs::create_dir_all(&config.plots_dir)?;

    let line_path = config.plots_dir.join(LINE_CHART_FILE);
    StaticChartRenderer::render_standings_over_time(
        &cumulative_points(rows),
        &config.style,
        &line_path,
    )?;

    let hist_path = config.plots_dir.join(HISTOGRAM_FILE);
    StaticChartRenderer::render_position_histograms(
        &position_frequencies(rows),
        &config.style,
        &hist_path,
    )?;

    Ok(vec![line_path, hist_path])
}

/// Run the whole pipeline: print the standings to `out`, then render charts.
/// Nothing is printed or rendered if loading or parsing fails.
pub fn run<W: Write>(config: &ReportConfig, out: W) -> Result<Report, ReportError> {
    let rows = load_results(&config.input)?;
    let standings = StandingsCalculator::compute(&rows);
    write_standings(&standings, config.format, out)?;

    let charts = if config.render_charts {
        render_charts(&rows, config)?
    } else {
        Vec::new()
    };

    Ok(Report { standings, charts })
}

/// Write the standings in the requested format.
pub fn write_standings<W: Write>(
    standings: &Standings,
    format: OutputFormat,
    mut out: W,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Table => write!(out, "{}", standings)?,
        OutputFormat::Csv => standings.write_csv(&mut out)?,
        OutputFormat::Json => writeln!(out, "{}", standings.to_json()?)?,
    }
    Ok(())
}
