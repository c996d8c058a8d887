//! Early-return macros for `StreamDashError`

/// Returns early with an error.
///
/// A message (or format string) becomes a `Generic` error; any other
/// expression is converted with `Into<StreamDashError>`.
///
/// # Examples
///
/// ```rust
/// use streamdash_common::{bail, Result, StreamDashError};
///
/// fn require_rows(rows: usize, path: &str) -> Result<()> {
///     if rows == 0 {
///         bail!(StreamDashError::config(format!("dataset at {path} has no records")));
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::StreamDashError::new($msg))
    };
    ($err:expr $(,)?) => {
        return Err(::core::convert::Into::<$crate::StreamDashError>::into($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::StreamDashError::new(format!($fmt, $($arg)*)))
    };
}

/// Returns early with an error unless the condition holds.
///
/// Accepts the same error forms as [`bail!`].
///
/// # Examples
///
/// ```rust
/// use streamdash_common::{ensure, Result, StreamDashError};
///
/// fn check_top_shows(limit: usize) -> Result<()> {
///     ensure!(limit > 0, StreamDashError::validation_field("must be positive", "top_shows"));
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($rest:tt)+) => {
        if !$cond {
            $crate::bail!($($rest)+);
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{Result, StreamDashError};

    fn chart_count(enabled: usize) -> Result<usize> {
        ensure!(enabled > 0, "at least one chart must be enabled, got {}", enabled);
        Ok(enabled)
    }

    fn top_shows(limit: usize) -> Result<usize> {
        ensure!(
            limit <= 50,
            StreamDashError::validation_field(format!("limit {limit} is above 50"), "top_shows")
        );
        Ok(limit)
    }

    fn load_rows(rows: &[&str]) -> Result<usize> {
        if rows.is_empty() {
            bail!("dataset has no records");
        }
        Ok(rows.len())
    }

    #[test]
    fn test_bail_returns_generic_error() {
        let error = load_rows(&[]).unwrap_err();
        assert!(matches!(error, StreamDashError::Generic { .. }));
        assert_eq!(error.to_string(), "dataset has no records");
        assert_eq!(load_rows(&["{}"]).unwrap(), 1);
    }

    #[test]
    fn test_ensure_formats_message() {
        assert_eq!(chart_count(4).unwrap(), 4);
        assert_eq!(
            chart_count(0).unwrap_err().to_string(),
            "at least one chart must be enabled, got 0"
        );
    }

    #[test]
    fn test_ensure_keeps_error_variant() {
        assert_eq!(top_shows(5).unwrap(), 5);
        match top_shows(80).unwrap_err() {
            StreamDashError::Validation { message, field } => {
                assert_eq!(message, "limit 80 is above 50");
                assert_eq!(field.as_deref(), Some("top_shows"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
