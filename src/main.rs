//! Poker Standings - prints the league table and saves standings charts.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use poker_standings::charts::ChartStyle;
use poker_standings::config::{DEFAULT_DATASET, DEFAULT_PLOTS_DIR};
use poker_standings::{run, OutputFormat, ReportConfig};
use std::io;
use std::path::PathBuf;

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Csv,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Table => OutputFormat::Table,
            Format::Csv => OutputFormat::Csv,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser)]
#[command(name = "poker-standings")]
#[command(about = "Print poker league standings and plot them over time", long_about = None)]
struct Cli {
    /// Game log CSV (date, game_id, player, position, points, played)
    #[arg(short, long, env = "POKER_DATASET", default_value = DEFAULT_DATASET)]
    input: PathBuf,

    /// Directory the chart images are written to
    #[arg(long, env = "POKER_PLOTS_DIR", default_value = DEFAULT_PLOTS_DIR)]
    plots_dir: PathBuf,

    /// Only print the standings table
    #[arg(long)]
    no_charts: bool,

    /// Standings output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: Format,

    /// Chart width in pixels
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Chart height in pixels
    #[arg(long, requires = "width")]
    height: Option<u32>,

    /// Chart font family
    #[arg(long)]
    font: Option<String>,

    /// JSON file with chart style settings, applied before the flags above
    #[arg(long, env = "POKER_CHART_STYLE")]
    style: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<ReportConfig> {
        let mut style = match &self.style {
            Some(path) => ChartStyle::from_json_file(path)
                .with_context(|| format!("Failed to load chart style {}", path.display()))?,
            None => ChartStyle::default(),
        };
        if let (Some(width), Some(height)) = (self.width, self.height) {
            style = style.with_size(width, height);
        }
        if let Some(font) = self.font {
            style.font_family = font;
        }

        Ok(ReportConfig {
            input: self.input,
            plots_dir: self.plots_dir,
            render_charts: !self.no_charts,
            format: self.format.into(),
            style,
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = Cli::parse().into_config()?;

    let report = run(&config, io::stdout().lock())
        .with_context(|| format!("Failed to build report from {}", config.input.display()))?;

    for chart in &report.charts {
        info!("Wrote {}", chart.display());
    }

    Ok(())
}
