//! Extraction strategies.
//!
//! Each strategy scans a [`RawDocument`] for `(date, value)` evidence using one
//! pattern and returns unvalidated [`Candidate`]s. The [`crate::Engine`] runs
//! them in priority order and keeps the first one that yields points.

pub mod adjacent;
pub mod direct;
pub mod table;
pub mod year_block;

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{parse_decimal, CalendarDate, NavPoint, RawDocument, ValidationError};

pub use adjacent::AdjacentLines;
pub use direct::DirectDateValue;
pub use table::TableColumn;
pub use year_block::YearBlock;

/// Numeral token: digits with optional separators. Tokens with more than one
/// separator are still captured so the decimal parser can reject them.
pub(crate) static NUMERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:[.,]\d+)*").expect("valid numeral regex"));

/// Canonical strategy identifiers, in default priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyId {
    Direct,
    YearBlock,
    Table,
    AdjacentLines,
}

impl StrategyId {
    pub const ALL: [Self; 4] = [Self::Direct, Self::YearBlock, Self::Table, Self::AdjacentLines];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::YearBlock => "year_block",
            Self::Table => "table",
            Self::AdjacentLines => "adjacent_lines",
        }
    }
}

impl Display for StrategyId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyId {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "direct" => Ok(Self::Direct),
            "year_block" => Ok(Self::YearBlock),
            "table" => Ok(Self::Table),
            "adjacent_lines" => Ok(Self::AdjacentLines),
            other => Err(ValidationError::InvalidStrategy {
                value: other.to_owned(),
            }),
        }
    }
}

/// Date evidence as found in the source, not yet resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateToken {
    /// `DD/MM/YYYY` or `MM/YYYY`.
    Numeric(String),
    /// A month name scoped by the surrounding year block.
    MonthOfYear { year: i32, month: String },
    /// Free-form period cell from a table.
    Period(String),
}

impl DateToken {
    pub fn resolve(&self) -> Result<CalendarDate, ValidationError> {
        match self {
            Self::Numeric(token) => CalendarDate::parse_numeric(token),
            Self::MonthOfYear { year, month } => CalendarDate::from_month_name(*year, month)
                .unwrap_or_else(|| {
                    Err(ValidationError::InvalidDate {
                        token: format!("{month} {year}"),
                    })
                }),
            Self::Period(token) => CalendarDate::parse_period(token),
        }
    }
}

impl Display for DateToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(token) | Self::Period(token) => f.write_str(token),
            Self::MonthOfYear { year, month } => write!(f, "{month} {year}"),
        }
    }
}

/// Tentative `(date, value)` pair found by a strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub date: DateToken,
    pub value: String,
}

impl Candidate {
    pub fn new(date: DateToken, value: impl Into<String>) -> Self {
        Self {
            date,
            value: value.into(),
        }
    }

    /// Converts the raw tokens into a validated point.
    pub fn resolve(&self) -> Result<NavPoint, ValidationError> {
        let date = self.date.resolve()?;
        let value = parse_decimal(&self.value)?;
        NavPoint::new(date, value)
    }
}

/// One extraction pattern.
pub trait Extractor: Send + Sync {
    fn id(&self) -> StrategyId;

    /// Candidates in discovery order. Never fails; a document the pattern
    /// does not recognise yields an empty list.
    fn candidates(&self, document: &RawDocument) -> Vec<Candidate>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_strategy_ids() {
        assert_eq!(StrategyId::from_str("year-block").expect("must parse"), StrategyId::YearBlock);
        assert_eq!(StrategyId::from_str(" TABLE ").expect("must parse"), StrategyId::Table);

        let err = StrategyId::from_str("regex").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidStrategy { .. }));
    }

    #[test]
    fn resolves_candidates() {
        let candidate = Candidate::new(DateToken::Numeric("17/11/2025".into()), "€ 34,509");
        let point = candidate.resolve().expect("valid candidate");
        assert_eq!(point.date.to_string(), "2025-11-17");
        assert_eq!(point.value, 34.509);

        let month = Candidate::new(
            DateToken::MonthOfYear {
                year: 2024,
                month: "Gennaio".into(),
            },
            "15,234",
        );
        assert_eq!(month.resolve().expect("valid").date.to_string(), "2024-01-01");
    }

    #[test]
    fn reports_first_failing_conversion() {
        let bad_date = Candidate::new(DateToken::Numeric("31/02/2024".into()), "1,0");
        assert!(matches!(
            bad_date.resolve(),
            Err(ValidationError::InvalidDate { .. })
        ));

        let bad_value = Candidate::new(DateToken::Numeric("01/02/2024".into()), "1.234,5");
        assert!(matches!(
            bad_value.resolve(),
            Err(ValidationError::MalformedNumber { .. })
        ));
    }
}
