//! Error types for the agecalc crate.

use std::path::PathBuf;

use crate::age::InvalidReason;

/// Why an age could not be calculated for a selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgeError {
    /// A day, month, or year has not been chosen.
    #[error("Please fill in all fields.")]
    Incomplete,

    /// The chosen date failed validation.
    #[error("{0}")]
    Invalid(InvalidReason),

    /// The reference date precedes the birth date. Only reachable when an
    /// unvalidated date is passed to `compute_difference`.
    #[error("Invalid date! Please select a date in the past.")]
    BirthAfterReference,
}

impl From<InvalidReason> for AgeError {
    fn from(reason: InvalidReason) -> Self {
        match reason {
            InvalidReason::Incomplete => AgeError::Incomplete,
            other => AgeError::Invalid(other),
        }
    }
}

/// Failure reading or writing the persisted last calculation.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("earliest_year {earliest} is after latest_year {latest}")]
    InvalidYearRange { earliest: i32, latest: i32 },
}
