//! Text and JSON rendering of dashboard views.

use crate::error::AppResult;
use std::io::Write;
use streamdash_common::{format_value, truncate_string};
use streamdash_config::{OutputConfig, OutputFormat};
use streamdash_graphs::{ChartData, DashboardView};

/// Shown in place of a chart with nothing to draw.
pub const NO_DATA_MESSAGE: &str = "No data for the selected filters";

/// Longest series name printed in a table header.
const MAX_COLUMN_NAME: usize = 24;

/// Placeholder for a (period, group) cell without events.
const MISSING_CELL: &str = "-";

/// Writes views in the configured format.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
    decimals: usize,
}

impl Renderer {
    /// A renderer for the given format and precision.
    pub const fn new(format: OutputFormat, decimals: usize) -> Self {
        Self { format, decimals }
    }

    /// A renderer following the output configuration.
    pub const fn from_config(config: &OutputConfig) -> Self {
        Self::new(config.format, config.decimals)
    }

    /// Writes `view` to `out`.
    pub fn render<W: Write>(&self, view: &DashboardView, out: &mut W) -> AppResult<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, view)?;
                writeln!(out)?;
            }
            OutputFormat::Table => self.render_tables(view, out)?,
        }
        Ok(())
    }

    fn render_tables<W: Write>(&self, view: &DashboardView, out: &mut W) -> AppResult<()> {
        writeln!(
            out,
            "{} events matched, {} per {}",
            view.matched_events,
            view.measure.axis_label(),
            view.timeframe.name().to_lowercase()
        )?;

        for chart in &view.charts {
            writeln!(out)?;
            writeln!(out, "== {} ==", chart.title)?;
            if chart.is_empty() {
                writeln!(out, "{NO_DATA_MESSAGE}")?;
                continue;
            }
            for line in self.table_lines(chart) {
                writeln!(out, "{}", line.trim_end())?;
            }
        }
        Ok(())
    }

    /// One header line plus one line per period.
    fn table_lines(&self, chart: &ChartData) -> Vec<String> {
        let periods = chart.periods();
        let series = chart.pivot();

        let mut header = vec!["Period".to_string()];
        header.extend(series.iter().map(|s| truncate_string(&s.name, MAX_COLUMN_NAME)));

        let mut grid = vec![header];
        for (i, period) in periods.iter().enumerate() {
            let mut line = vec![period.label.clone()];
            line.extend(series.iter().map(|s| {
                s.values[i].map_or_else(
                    || MISSING_CELL.to_string(),
                    |value| format_value(value, self.decimals),
                )
            }));
            grid.push(line);
        }

        let widths: Vec<usize> = (0..grid[0].len())
            .map(|col| {
                grid.iter()
                    .map(|line| line[col].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        grid.iter()
            .map(|line| {
                line.iter()
                    .zip(&widths)
                    .enumerate()
                    .map(|(col, (cell, &width))| {
                        if col == 0 {
                            format!("{cell:<width$}")
                        } else {
                            format!("{cell:>width$}")
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("  ")
            })
            .collect()
    }
}
