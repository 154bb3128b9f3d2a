//! Error types for the NBA injury tracker

use thiserror::Error;

use crate::cli::types::InjuryId;


pub type Result<T> = std::result::Result<T, TrackerError>;

/// Which baseline value of a teammate was unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineField {
    Minutes,
    Usage,
}

impl std::fmt::Display for BaselineField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BaselineField::Minutes => write!(f, "current minutes"),
            BaselineField::Usage => write!(f, "current usage"),
        }
    }
}

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse injury ID: {0}")]
    InvalidInjuryId(#[from] std::num::ParseIntError),

    #[error(
        "Injury {injury_id}: roster has no minutes or usage to redistribute \
         (total minutes {total_minutes}, total usage {total_usage})"
    )]
    DegenerateRoster {
        injury_id: InjuryId,
        total_minutes: f64,
        total_usage: f64,
    },

    #[error("Teammate {teammate} has zero {field}; no baseline to project from")]
    InsufficientBaseline {
        teammate: String,
        field: BaselineField,
    },

    #[error("Invalid record {record}: {field} = {value} ({reason})")]
    InvalidRecord {
        record: String,
        field: String,
        value: f64,
        reason: String,
    },

    #[error("Injury not found: {id}")]
    InjuryNotFound { id: InjuryId },

    #[error("Teammate not found on injury {injury_id}: {teammate}")]
    TeammateNotFound {
        injury_id: InjuryId,
        teammate: String,
    },

    #[error("No roster stored at {path}; run `init` or `import` first")]
    MissingRoster { path: String },

    #[error("Roster provider error: {message}")]
    Provider { message: String },
}

impl TrackerError {
    /// Build an `InvalidRecord` error.
    pub fn invalid(
        record: impl Into<String>,
        field: impl Into<String>,
        value: f64,
        reason: impl Into<String>,
    ) -> Self {
        TrackerError::InvalidRecord {
            record: record.into(),
            field: field.into(),
            value,
            reason: reason.into(),
        }
    }
}
