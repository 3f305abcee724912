//! Report configuration.

use crate::charts::ChartStyle;
use std::path::PathBuf;

pub const DEFAULT_DATASET: &str = "dataset.csv";
pub const DEFAULT_PLOTS_DIR: &str = "plots";

/// How the standings are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Fixed-width text table
    Table,
    Csv,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Table
    }
}

/// Settings for one report run
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub plots_dir: PathBuf,
    pub render_charts: bool,
    pub format: OutputFormat,
    pub style: ChartStyle,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_DATASET),
            plots_dir: PathBuf::from(DEFAULT_PLOTS_DIR),
            render_charts: true,
            format: OutputFormat::default(),
            style: ChartStyle::default(),
        }
    }
}
