use std::fmt::Display;

use thiserror::Error;

/// The one failure every external source can report.
///
/// Causes (process missing, permission denied, network failure, malformed output,
/// auth failure) are collapsed into a human readable `reason` for the server log.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{origin} unavailable: {reason}")]
pub struct SourceUnavailable {
    pub origin: &'static str,
    pub reason: String,
}

impl SourceUnavailable {
    pub fn new(origin: &'static str, reason: impl Display) -> Self {
        Self {
            origin,
            reason: reason.to_string(),
        }
    }
}

pub type SourceResult<T> = Result<T, SourceUnavailable>;
