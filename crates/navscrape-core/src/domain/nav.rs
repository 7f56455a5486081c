use serde::Serialize;

use crate::{CalendarDate, ValidationError};

/// One net-asset-value observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NavPoint {
    pub date: CalendarDate,
    pub value: f64,
}

impl NavPoint {
    pub fn new(date: CalendarDate, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "value" });
        }
        if value < 0.0 {
            return Err(ValidationError::NegativeValue { field: "value" });
        }

        Ok(Self { date, value })
    }
}

/// Non-empty NAV series, unique by date and sorted ascending.
///
/// Only [`crate::SeriesBuilder`] constructs it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NavSeries {
    points: Vec<NavPoint>,
}

impl NavSeries {
    pub(crate) fn from_sorted(points: Vec<NavPoint>) -> Result<Self, ValidationError> {
        if points.is_empty() {
            return Err(ValidationError::EmptySeries);
        }
        debug_assert!(points.windows(2).all(|pair| pair[0].date < pair[1].date));
        Ok(Self { points })
    }

    pub fn points(&self) -> &[NavPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> &NavPoint {
        &self.points[0]
    }

    pub fn last(&self) -> &NavPoint {
        &self.points[self.points.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NavPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a NavSeries {
    type Item = &'a NavPoint;
    type IntoIter = std::slice::Iter<'a, NavPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u8) -> CalendarDate {
        CalendarDate::from_ymd(2024, 1, d).expect("valid date")
    }

    #[test]
    fn rejects_negative_and_non_finite_values() {
        let err = NavPoint::new(day(1), -0.5).expect_err("must fail");
        assert!(matches!(err, ValidationError::NegativeValue { .. }));

        let err = NavPoint::new(day(1), f64::NAN).expect_err("must fail");
        assert!(matches!(err, ValidationError::NonFiniteValue { .. }));

        let err = NavPoint::new(day(1), f64::INFINITY).expect_err("must fail");
        assert!(matches!(err, ValidationError::NonFiniteValue { .. }));
    }

    #[test]
    fn accepts_zero() {
        let point = NavPoint::new(day(1), 0.0).expect("zero is allowed");
        assert_eq!(point.value, 0.0);
    }

    #[test]
    fn empty_series_is_rejected() {
        let err = NavSeries::from_sorted(Vec::new()).expect_err("must fail");
        assert_eq!(err, ValidationError::EmptySeries);
    }

    #[test]
    fn exposes_span() {
        let series = NavSeries::from_sorted(vec![
            NavPoint::new(day(1), 10.0).expect("valid"),
            NavPoint::new(day(2), 11.0).expect("valid"),
        ])
        .expect("non-empty");

        assert_eq!(series.len(), 2);
        assert_eq!(series.first().value, 10.0);
        assert_eq!(series.last().value, 11.0);
    }
}
