use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::{Date, Month};

use crate::ValidationError;

/// Italian month names as printed by fund pages, in calendar order.
pub const ITALIAN_MONTHS: [&str; 12] = [
    "gennaio",
    "febbraio",
    "marzo",
    "aprile",
    "maggio",
    "giugno",
    "luglio",
    "agosto",
    "settembre",
    "ottobre",
    "novembre",
    "dicembre",
];

/// Gregorian calendar date rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(Date);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        if !(1..=9999).contains(&year) {
            return None;
        }
        let month = Month::try_from(month).ok()?;
        Date::from_calendar_date(year, month, day).ok().map(Self)
    }

    /// Resolves `DD/MM/YYYY` or `MM/YYYY` (day defaults to the 1st).
    pub fn parse_numeric(token: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidDate {
            token: token.to_owned(),
        };

        let parts = token.trim().split('/').collect::<Vec<_>>();
        let (day, month, year) = match parts.as_slice() {
            [day, month, year] => (*day, *month, *year),
            [month, year] => ("1", *month, *year),
            _ => return Err(invalid()),
        };

        if !is_digits(day, 1, 2) || !is_digits(month, 1, 2) || !is_digits(year, 4, 4) {
            return Err(invalid());
        }

        let day = day.parse::<u8>().map_err(|_| invalid())?;
        let month = month.parse::<u8>().map_err(|_| invalid())?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;

        Self::from_ymd(year, month, day).ok_or_else(invalid)
    }

    /// Resolves a `(year, month name)` pair to the first of that month.
    ///
    /// Returns `None` when `name` is not an Italian month name; the lookup is
    /// a filter, not a parse step.
    pub fn from_month_name(year: i32, name: &str) -> Option<Result<Self, ValidationError>> {
        let month = month_number(name)?;
        Some(Self::from_ymd(year, month, 1).ok_or_else(|| ValidationError::InvalidDate {
            token: format!("{name} {year}"),
        }))
    }

    /// Resolves a table period cell: a numeric date or `"<month name> YYYY"`.
    pub fn parse_period(token: &str) -> Result<Self, ValidationError> {
        let trimmed = token.trim();
        if trimmed.contains('/') {
            return Self::parse_numeric(trimmed);
        }

        let invalid = || ValidationError::InvalidDate {
            token: token.to_owned(),
        };

        let mut words = trimmed.split_whitespace();
        let (Some(name), Some(year), None) = (words.next(), words.next(), words.next()) else {
            return Err(invalid());
        };
        if !is_digits(year, 4, 4) {
            return Err(invalid());
        }
        let year = year.parse::<i32>().map_err(|_| invalid())?;

        Self::from_month_name(year, name).unwrap_or_else(|| Err(invalid()))
    }

    pub fn parse_iso(input: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidDate {
            token: input.to_owned(),
        };

        let mut parts = input.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        if !is_digits(year, 4, 4) || !is_digits(month, 2, 2) || !is_digits(day, 2, 2) {
            return Err(invalid());
        }

        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u8>().map_err(|_| invalid())?;
        let day = day.parse::<u8>().map_err(|_| invalid())?;
        Self::from_ymd(year, month, day).ok_or_else(invalid)
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u8 {
        u8::from(self.0.month())
    }

    pub fn day(self) -> u8 {
        self.0.day()
    }
}

/// Case-insensitive Italian month lookup, `1..=12`.
pub fn month_number(name: &str) -> Option<u8> {
    let name = name.trim().to_lowercase();
    ITALIAN_MONTHS
        .iter()
        .position(|month| *month == name)
        .and_then(|index| u8::try_from(index + 1).ok())
}

fn is_digits(value: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit())
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse_iso(&value).map_err(D::Error::custom)
    }
}
