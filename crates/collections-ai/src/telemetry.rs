//! Tracing setup for the scoring engine. The scorers emit structured fields
//! (case ids, recovery and priority figures) from deep inside the pipeline,
//! so the subscriber keeps targets visible and quiets the HTTP stack unless
//! the operator asks for it.

use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Appended when the configured level is a bare level name, so request
/// plumbing does not drown out the per-case scoring logs.
const QUIET_HTTP_DIRECTIVES: &str = "hyper=warn,tower=warn,mio=warn";

#[derive(Debug)]
pub enum TelemetryError {
    Filter { directives: String, source: ParseError },
    Init(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Filter { directives, .. } => {
                write!(f, "cannot parse log directives '{}'", directives)
            }
            TelemetryError::Init(err) => write!(f, "tracing subscriber not installed: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Filter { source, .. } => Some(source),
            TelemetryError::Init(err) => Some(&**err),
        }
    }
}

/// A bare level ("info") gets the quiet-HTTP suffix; anything with explicit
/// directives is taken as-is.
fn filter_directives(log_level: &str) -> String {
    if log_level.contains(['=', ',']) {
        log_level.to_string()
    } else {
        format!("{log_level},{QUIET_HTTP_DIRECTIVES}")
    }
}

fn build_filter(directives: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directives).map_err(|source| TelemetryError::Filter {
        directives: directives.to_string(),
        source,
    })
}

/// Installs the global subscriber. `RUST_LOG` wins over the configured level
/// so a deployment can be re-filtered without touching its config.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&filter_directives(&config.log_level))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Init)
}
