//! Runtime configuration for the transcript driver.
//!
//! Values come from `.env` (if present) and then the process environment. Command-line flags
//! override them in `main`.

use std::env;

/// Section delimiter shared with the grader's output parser.
pub const DEFAULT_DELIMITER: &str = "&-=-&";

/// Tracing filter used when `CLIST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `sllist=trace`.
    pub log_filter: String,
    /// Token printed in front of every section name.
    pub delimiter: String,
}

impl HarnessConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_filter: lookup("CLIST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.into()),
            delimiter: lookup("CLIST_DELIMITER")
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DELIMITER.into()),
        }
    }
}
