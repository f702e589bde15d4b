//! Logging initialisation for the arbor CLI.
//!
//! Installs a global `tracing` subscriber writing to stderr, in human or
//! JSON form, and bridges the `log` facade so crates using either API emit
//! structured events.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "ARBOR_LOG_FORMAT";

static INITIALISED: OnceLock<LogFormat> = OnceLock::new();

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// Unsupported log format requested via `ARBOR_LOG_FORMAT`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
}

/// Rendering used for diagnostics on stderr.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-field human-readable lines.
    #[default]
    Human,
    /// One JSON object per event, with the current span list.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

impl LogFormat {
    /// Reads the format from `ARBOR_LOG_FORMAT`, defaulting to human output.
    ///
    /// # Errors
    /// Returns [`LoggingError`] if the variable is not Unicode or names an
    /// unknown format.
    pub fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source,
            }),
        }
    }
}

/// Installs global structured logging if it has not already been configured.
///
/// The level is controlled via `RUST_LOG` and defaults to `info`. Returns the
/// format in effect; repeated calls return the first call's format.
///
/// # Errors
/// Returns [`LoggingError`] if `ARBOR_LOG_FORMAT` is invalid.
pub fn init_logging() -> Result<LogFormat, LoggingError> {
    if let Some(format) = INITIALISED.get() {
        return Ok(*format);
    }
    let format = LogFormat::from_env()?;
    install_subscriber(format);
    Ok(*INITIALISED.get_or_init(|| format))
}

fn install_subscriber(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let fmt_layer = match format {
        LogFormat::Human => fmt_layer.boxed(),
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // Another logger may already own the `log` slot; keep it.
    let _ = LogTracer::init();

    if let Err(err) = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
    {
        tracing::debug!(error = %err, "structured logging already configured elsewhere");
    }
}
