//! Logging initialisation for the roadnet CLI.
//!
//! The report is the only thing `roadnet` writes to `stdout`, and only when no
//! output file is given. Every diagnostic goes to `stderr`, so
//! `roadnet analyze map.txt > report.txt` captures the report alone.
//!
//! Closing spans are logged with their timings. A typical human-format run at
//! the default level shows `providers.text.read`, `core.analyze` and
//! `cli.analyze` closing in that order, plus one `warn` per skipped map line
//! and per degenerate ratio.
//!
//! | Variable             | Meaning                                        |
//! |----------------------|------------------------------------------------|
//! | `ROADNET_LOG_FORMAT` | `human` (default, also when empty) or `json`   |
//! | `ROADNET_LOG`        | filter directives, e.g. `roadnet_core=debug`   |
//! | `RUST_LOG`           | filter directives used when `ROADNET_LOG` is unset |

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, filter::ParseError, fmt::format::FmtSpan, layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Selects the output format.
pub const LOG_FORMAT_ENV: &str = "ROADNET_LOG_FORMAT";
/// Filter directives specific to roadnet.
pub const LOG_FILTER_ENV: &str = "ROADNET_LOG";
const FALLBACK_FILTER_ENV: &str = "RUST_LOG";
const DEFAULT_DIRECTIVES: &str = "info";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying parse failure.
        #[source]
        source: env::VarError,
    },
    /// Unsupported log format requested via `ROADNET_LOG_FORMAT`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
    /// Filter directives could not be parsed.
    #[error("invalid log filter `{directives}` in `{name}`: {source}")]
    InvalidFilter {
        /// Variable the directives came from.
        name: &'static str,
        /// Raw directives.
        directives: String,
        /// Parser failure.
        #[source]
        source: ParseError,
    },
    /// Failed to install the global tracing subscriber.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Output format of the installed subscriber.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Compact single-line text.
    #[default]
    Human,
    /// One JSON object per line, with the enclosing span list.
    Json,
}

/// Logging configuration resolved from the environment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogSettings {
    format: LogFormat,
    filter_source: Option<&'static str>,
    directives: String,
}

impl LogSettings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    /// See [`LogSettings::from_lookup`].
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::from_lookup(|name| env::var(name))
    }

    /// Resolves settings through `lookup`, which behaves like [`env::var`].
    ///
    /// `ROADNET_LOG` takes precedence over `RUST_LOG`; empty values count as
    /// unset. Without either, the filter is `info`.
    ///
    /// # Errors
    /// Returns [`LoggingError`] when a variable is not Unicode or the format
    /// is unknown.
    ///
    /// # Examples
    /// ```
    /// use std::env::VarError;
    /// use roadnet_cli::logging::{LogFormat, LogSettings};
    ///
    /// let settings = LogSettings::from_lookup(|name| match name {
    ///     "ROADNET_LOG_FORMAT" => Ok("json".to_owned()),
    ///     "RUST_LOG" => Ok("roadnet_core=debug".to_owned()),
    ///     _ => Err(VarError::NotPresent),
    /// })?;
    /// assert_eq!(settings.format(), LogFormat::Json);
    /// assert_eq!(settings.directives(), "roadnet_core=debug");
    /// # Ok::<(), roadnet_cli::logging::LoggingError>(())
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LoggingError>
    where
        F: Fn(&'static str) -> Result<String, env::VarError>,
    {
        let read = |name: &'static str| match lookup(name) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(source @ env::VarError::NotUnicode(_)) => {
                Err(LoggingError::InvalidUnicode { name, source })
            }
        };

        let format = read(LOG_FORMAT_ENV)?
            .map(|raw| parse_log_format(&raw))
            .transpose()?
            .unwrap_or_default();

        let mut filter = None;
        for name in [LOG_FILTER_ENV, FALLBACK_FILTER_ENV] {
            if let Some(value) = read(name)?.filter(|value| !value.trim().is_empty()) {
                filter = Some((name, value));
                break;
            }
        }
        let (filter_source, directives) = match filter {
            Some((name, value)) => (Some(name), value),
            None => (None, DEFAULT_DIRECTIVES.to_owned()),
        };

        Ok(Self {
            format,
            filter_source,
            directives,
        })
    }

    /// Returns the output format.
    #[must_use]
    pub const fn format(&self) -> LogFormat {
        self.format
    }

    /// Returns the filter directives in effect.
    #[must_use]
    pub fn directives(&self) -> &str {
        &self.directives
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        EnvFilter::try_new(&self.directives).map_err(|source| LoggingError::InvalidFilter {
            name: self.filter_source.unwrap_or(LOG_FILTER_ENV),
            directives: self.directives.clone(),
            source,
        })
    }
}

/// Install global structured logging if it has not already been configured.
///
/// # Errors
/// Returns [`LoggingError`] if the settings are invalid or the subscriber
/// cannot be installed.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let settings = LogSettings::from_env()?;
    match install_subscriber(&settings) {
        Ok(()) => {}
        Err(LoggingError::InstallFailed { source }) => {
            eprintln!("structured logging already configured elsewhere: {source}");
        }
        Err(err) => return Err(err),
    }
    let _ = INITIALISED.set(());
    Ok(())
}

fn install_subscriber(settings: &LogSettings) -> Result<(), LoggingError> {
    let env_filter = settings.env_filter()?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let fmt_layer = match settings.format {
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
        LogFormat::Human => fmt_layer.compact().boxed(),
    };

    // The log bridge is optional; another logger may already own the slot.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}

fn parse_log_format(raw: &str) -> Result<LogFormat, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "human" | "" => Ok(LogFormat::Human),
        "json" => Ok(LogFormat::Json),
        other => Err(LoggingError::UnsupportedFormat {
            provided: other.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::ffi::OsString;

    use rstest::rstest;

    use super::*;

    fn settings(vars: &[(&'static str, &str)]) -> Result<LogSettings, LoggingError> {
        let vars: HashMap<&'static str, String> = vars
            .iter()
            .map(|(name, value)| (*name, (*value).to_owned()))
            .collect();
        LogSettings::from_lookup(|name| vars.get(name).cloned().ok_or(env::VarError::NotPresent))
    }

    #[rstest]
    #[case("human", LogFormat::Human)]
    #[case("HUMAN", LogFormat::Human)]
    #[case("", LogFormat::Human)]
    #[case(" json ", LogFormat::Json)]
    fn parse_log_format_accepts_supported_values(#[case] raw: &str, #[case] expected: LogFormat) {
        let format = parse_log_format(raw).expect("format must parse");
        assert_eq!(format, expected);
    }

    #[test]
    fn parse_log_format_rejects_unknown_values() {
        let err = parse_log_format("xml").expect_err("xml is not supported");
        match err {
            LoggingError::UnsupportedFormat { provided } => assert_eq!(provided, "xml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[rstest]
    #[case::defaults(&[], "info")]
    #[case::rust_log(&[("RUST_LOG", "warn")], "warn")]
    #[case::roadnet_log_wins(&[("RUST_LOG", "warn"), ("ROADNET_LOG", "roadnet_core=debug")], "roadnet_core=debug")]
    #[case::blank_roadnet_log_falls_back(&[("RUST_LOG", "error"), ("ROADNET_LOG", "  ")], "error")]
    fn filter_directives_follow_precedence(
        #[case] vars: &[(&'static str, &str)],
        #[case] expected: &str,
    ) {
        let resolved = settings(vars).expect("settings must resolve");
        assert_eq!(resolved.directives(), expected);
        assert_eq!(resolved.format(), LogFormat::Human);
    }

    #[test]
    fn invalid_directives_name_their_variable() {
        let resolved = settings(&[("ROADNET_LOG", "roadnet_core=loud")]).expect("settings resolve");
        match resolved.env_filter() {
            Err(LoggingError::InvalidFilter { name, directives, .. }) => {
                assert_eq!(name, "ROADNET_LOG");
                assert_eq!(directives, "roadnet_core=loud");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn non_unicode_format_is_reported() {
        let err = LogSettings::from_lookup(|name| match name {
            LOG_FORMAT_ENV => Err(env::VarError::NotUnicode(OsString::from("json"))),
            _ => Err(env::VarError::NotPresent),
        })
        .expect_err("non-unicode value must fail");
        assert!(matches!(
            err,
            LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                ..
            }
        ));
    }

    #[test]
    fn init_logging_is_idempotent() {
        init_logging().expect("logging must initialise");
        init_logging().expect("subsequent calls must be no-ops");
    }
}
