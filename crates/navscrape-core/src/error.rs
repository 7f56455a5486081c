use thiserror::Error;

use crate::StrategyId;

/// Validation and contract errors exposed by `navscrape-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("malformed number '{token}'")]
    MalformedNumber { token: String },
    #[error("'{token}' is not a valid calendar date")]
    InvalidDate { token: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("currency must be a 3-letter uppercase ISO code: '{value}'")]
    InvalidCurrency { value: String },
    #[error("fund name cannot be empty")]
    EmptyFundName,

    #[error("invalid strategy '{value}', expected one of direct, year_block, table, adjacent_lines")]
    InvalidStrategy { value: String },
    #[error("invalid dedup policy '{value}', expected first or last")]
    InvalidDedupPolicy { value: String },
    #[error("unknown fund profile '{value}'")]
    UnknownProfile { value: String },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },
    #[error("unix timestamp {seconds} is outside the supported range")]
    TimestampOutOfRange { seconds: i64 },

    #[error("series contains no points")]
    EmptySeries,
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no NAV points extracted (tried: {}); input excerpt:\n{excerpt}", join_strategies(.attempted))]
    EmptySeries {
        attempted: Vec<StrategyId>,
        excerpt: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("profile error: {0}")]
    Profile(#[from] serde_yaml::Error),
}

fn join_strategies(attempted: &[StrategyId]) -> String {
    if attempted.is_empty() {
        return String::from("none");
    }

    attempted
        .iter()
        .map(|strategy| strategy.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
