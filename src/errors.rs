use std::path::PathBuf;

use thiserror::Error;

/// Faults that stop a validation run from reaching a verdict.
///
/// A missing plugin or map is not a fault; those are reported as
/// diagnostics inside a [`crate::CheckReport`].
#[derive(Error, Debug)]
pub enum GuardError {
    /// Configuration is missing a key or holds a value of the wrong type.
    #[error("config error: {message}")]
    Config { message: String },

    /// A filesystem probe failed for a reason other than absence.
    #[error("cannot inspect '{}': {source}", path.display())]
    Probe {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Convenience alias for `Result<T, GuardError>`.
pub type Result<T> = std::result::Result<T, GuardError>;

/// Transport failure while fetching a remote listing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{url}: {reason}")]
pub struct FetchError {
    /// URL that was requested.
    pub url: String,
    /// Transport-level reason (refused, timeout, HTTP status, ...).
    pub reason: String,
}

impl FetchError {
    /// Build a fetch error from any displayable cause.
    pub fn new(url: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}
