//! Command-line interface.

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use streamdash_common::{Dimension, Granularity, Measure, Result};
use streamdash_config::{Config, OutputFormat, CONFIG_PATH_ENV};
use streamdash_data::{PercentageCategory, Selection};
use streamdash_graphs::DashboardRequest;

/// Streaming viewership dashboard.
///
/// Options left unset fall back to the configuration file, then to the
/// built-in defaults.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "streamdash", version, about)]
pub struct Args {
    /// Configuration file
    #[arg(long, env = CONFIG_PATH_ENV)]
    pub config: Option<PathBuf>,

    /// JSON event dataset
    #[arg(long)]
    pub data: Option<String>,

    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Period width: Daily, Weekly, Monthly, Quarterly or Yearly
    #[arg(long)]
    pub timeframe: Option<Granularity>,

    /// Viewer state, or "All States"
    #[arg(long)]
    pub state: Option<String>,

    /// Viewer timezone, or "All Timezones"
    #[arg(long)]
    pub timezone: Option<String>,

    /// Percentage bucket: 0-25%, 26-50%, 51-75% or 76-100%
    #[arg(long)]
    pub percentage: Option<String>,

    /// Show genre, or "All Genres"
    #[arg(long)]
    pub genre: Option<String>,

    /// Show rating, or "All Ratings"
    #[arg(long)]
    pub rating: Option<String>,

    /// Summed column
    #[arg(long)]
    pub measure: Option<Measure>,

    /// Number of shows in the "by show" chart
    #[arg(long)]
    pub top: Option<usize>,

    /// Output format: table or json
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the distinct values of a column and exit
    #[arg(long, value_name = "COLUMN")]
    pub list_values: Option<Dimension>,
}

impl Args {
    /// Applies the process-level options to the loaded configuration.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(path) = &self.data {
            config.data.path.clone_from(path);
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
    }

    /// Applies the dashboard options on top of `request`.
    ///
    /// Fails when the percentage bucket is not one of the four labels.
    pub fn apply_to_request(&self, request: &mut DashboardRequest) -> Result<()> {
        if self.start.is_some() {
            request.start_date = self.start;
        }
        if self.end.is_some() {
            request.end_date = self.end;
        }
        if let Some(timeframe) = self.timeframe {
            request.timeframe = timeframe;
        }
        if let Some(measure) = self.measure {
            request.measure = measure;
        }
        if let Some(top) = self.top {
            request.top_shows = top;
        }

        let text_filters = [
            (&self.state, &mut request.state),
            (&self.timezone, &mut request.timezone),
            (&self.genre, &mut request.genre),
            (&self.rating, &mut request.rating),
        ];
        for (input, selection) in text_filters {
            if let Some(input) = input {
                *selection = Selection::from_text(input);
            }
        }

        if let Some(input) = &self.percentage {
            request.percentage = input.parse::<Selection<PercentageCategory>>()?;
        }

        Ok(())
    }
}
