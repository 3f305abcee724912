//! Static Chart Renderer
//! Draws the report charts to PNG files with plotters.
//!
//! Layout:
//! 1. Standings over time: one line per player, date on x, cumulative points on y,
//!    legend in the upper right corner
//! 2. Position histograms: one bar chart per player in a grid, positions on x,
//!    frequency on y

use super::{ChartError, ChartStyle, PlayerSeries, PositionHistogram};
use chrono::{Duration, NaiveDate};
use log::info;
use plotters::prelude::*;
use std::fmt::Display;
use std::path::Path;

// One color per player, wrapping around
const PALETTE: [RGBColor; 10] = [
    RGBColor(52, 152, 219),  // Blue
    RGBColor(231, 76, 60),   // Red
    RGBColor(46, 204, 113),  // Green
    RGBColor(155, 89, 182),  // Purple
    RGBColor(243, 156, 18),  // Orange
    RGBColor(26, 188, 156),  // Teal
    RGBColor(233, 30, 99),   // Pink
    RGBColor(0, 188, 212),   // Cyan
    RGBColor(121, 85, 72),   // Brown
    RGBColor(96, 125, 139),  // Blue Grey
];

fn render_err<E: Display>(err: E) -> ChartError {
    ChartError::Render(err.to_string())
}

/// Color for the player at `index`.
pub fn player_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render cumulative points per player over time.
    pub fn render_standings_over_time(
        series: &[PlayerSeries],
        style: &ChartStyle,
        path: &Path,
    ) -> Result<(), ChartError> {
        let dates = series.iter().flat_map(|s| s.points.iter().map(|(d, _)| *d));
        let (Some(first), Some(last)) = (dates.clone().min(), dates.max()) else {
            return Err(ChartError::NoData);
        };

        let values = series.iter().flat_map(|s| s.points.iter().map(|(_, p)| *p));
        let y_min = values.clone().fold(0.0_f64, f64::min);
        let y_max = values.fold(0.0_f64, f64::max);
        let y_pad = ((y_max - y_min) * 0.05).max(1.0);

        let padding = Duration::days(style.date_padding_days);
        let x_range = (first - padding)..(last + padding);

        let font = style.font_family.as_str();
        let root = BitMapBackend::new(path, style.line_size).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                "Player Standings Over Time",
                (font, style.title_font_size).into_font().style(FontStyle::Bold),
            )
            .margin(style.margin)
            .x_label_area_size(style.label_area_size)
            .y_label_area_size(style.label_area_size)
            .build_cartesian_2d(x_range, (y_min - y_pad)..(y_max + y_pad))
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .x_desc("Date")
            .y_desc("Points")
            .axis_desc_style((font, style.label_font_size))
            .label_style((font, style.tick_font_size))
            .x_label_formatter(&|d: &NaiveDate| d.format("%Y-%m-%d").to_string())
            .draw()
            .map_err(render_err)?;

        for (idx, s) in series.iter().enumerate() {
            let color = player_color(idx);
            chart
                .draw_series(LineSeries::new(
                    s.points.iter().copied(),
                    color.stroke_width(style.line_width),
                ))
                .map_err(render_err)?
                .label(s.player.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 30, y)], color.stroke_width(4))
                });

            chart
                .draw_series(
                    s.points
                        .iter()
                        .map(|&point| Circle::new(point, style.line_width + 2, color.filled())),
                )
                .map_err(render_err)?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font((font, style.label_font_size))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
        info!("Saved standings chart to {}", path.display());
        Ok(())
    }

    /// Render a grid of finishing position histograms, one cell per player.
    pub fn render_position_histograms(
        histograms: &[PositionHistogram],
        style: &ChartStyle,
        path: &Path,
    ) -> Result<(), ChartError> {
        if histograms.is_empty() {
            return Err(ChartError::NoData);
        }

        let columns = style.histogram_columns.max(1);
        let rows = histograms.len().div_ceil(columns);
        let max_position = histograms
            .iter()
            .filter_map(PositionHistogram::max_position)
            .fold(style.max_position.max(1), i64::max);
        let y_max = histograms
            .iter()
            .map(PositionHistogram::max_count)
            .max()
            .unwrap_or(0)
            + 1;

        let font = style.font_family.as_str();
        let root = BitMapBackend::new(path, style.histogram_size).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;
        let cells = root.split_evenly((rows, columns));

        for (idx, (cell, histogram)) in cells.iter().zip(histograms).enumerate() {
            let color = player_color(idx);
            let mut chart = ChartBuilder::on(cell)
                .caption(histogram.player.as_str(), (font, style.subplot_title_font_size))
                .margin(style.margin)
                .x_label_area_size(style.label_area_size / 2)
                .y_label_area_size(style.label_area_size / 2)
                .build_cartesian_2d((1i64..max_position + 1).into_segmented(), 0u32..y_max)
                .map_err(render_err)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .label_style((font, style.tick_font_size))
                .draw()
                .map_err(render_err)?;

            chart
                .draw_series(
                    Histogram::vertical(&chart)
                        .style(color.filled())
                        .margin(8)
                        .data(
                            histogram
                                .counts
                                .iter()
                                .filter(|(position, _)| (1..=max_position).contains(*position))
                                .map(|(&position, &count)| (position, count)),
                        ),
                )
                .map_err(render_err)?;
        }

        root.present().map_err(render_err)?;
        info!("Saved position histograms to {}", path.display());
        Ok(())
    }
}
