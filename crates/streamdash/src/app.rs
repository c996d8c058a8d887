//! Wiring between the command line, the configuration and the dashboard.

use crate::cli::Args;
use crate::error::AppResult;
use crate::render::Renderer;
use crate::session::Session;
use std::io::Write;
use streamdash_config::{Config, ConfigLoader, ConfigValidator};
use streamdash_data::EventStore;
use streamdash_graphs::DashboardRequest;
use tracing::{debug, instrument};

/// Loads the configuration and applies the command-line overrides.
///
/// An explicit `--config` path must exist; otherwise the standard lookup order
/// applies.
pub fn load_config(args: &Args) -> AppResult<Config> {
    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    args.apply_to_config(&mut config);
    ConfigValidator::validate(&config)?;
    Ok(config)
}

/// Runs one dashboard pass against `store` and writes the result to `out`.
///
/// With `--list-values` the distinct values of that column are printed
/// instead, one per line.
#[instrument(skip_all)]
pub fn execute<W: Write>(args: &Args, config: &Config, store: &EventStore, out: &mut W) -> AppResult<()> {
    if let Some(dimension) = args.list_values {
        let values = store.distinct_values(dimension);
        debug!(%dimension, values = values.len(), "Listing filter options");
        for value in values {
            writeln!(out, "{value}")?;
        }
        return Ok(());
    }

    let mut session = Session::new(DashboardRequest::from_config(&config.dashboard));
    let view = session.apply(store, |request| args.apply_to_request(request))?;

    Renderer::from_config(&config.output).render(view, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use streamdash_common::Dimension;
    use streamdash_data::testing::EventBuilder;

    fn store() -> EventStore {
        EventStore::from_events(vec![
            EventBuilder::new().at(2024, 11, 5).timezone("PST").build(),
            EventBuilder::new().at(2024, 12, 1).timezone("EST").build(),
            EventBuilder::new().at(2024, 12, 9).timezone("PST").build(),
        ])
    }

    fn run(args: &Args) -> AppResult<String> {
        let mut out = Vec::new();
        execute(args, &Config::default(), &store(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_list_values() {
        let args = Args {
            list_values: Some(Dimension::Timezone),
            ..Args::default()
        };
        assert_eq!(run(&args).unwrap(), "EST\nPST\n");
    }

    #[test]
    fn test_default_range_applies() {
        // The default range starts 2024-10-10, so every event matches
        let text = run(&Args::default()).unwrap();
        assert!(text.starts_with("3 events matched"));
    }

    #[test]
    fn test_invalid_filter_is_reported() {
        let args = Args {
            percentage: Some("most of it".to_string()),
            ..Args::default()
        };
        assert!(run(&args).is_err());
    }
}
