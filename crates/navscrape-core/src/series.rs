use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, NavPoint, NavSeries, ValidationError};

/// Which point survives when several share a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DedupPolicy {
    /// Keep the first point in discovery order.
    #[default]
    First,
    /// Keep the last point in discovery order.
    Last,
}

impl DedupPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Last => "last",
        }
    }
}

impl Display for DedupPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DedupPolicy {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "first" | "first-wins" => Ok(Self::First),
            "last" | "last-wins" => Ok(Self::Last),
            other => Err(ValidationError::InvalidDedupPolicy {
                value: other.to_owned(),
            }),
        }
    }
}

/// Collects points, deduplicates by date and sorts ascending.
#[derive(Debug, Clone, Default)]
pub struct SeriesBuilder {
    policy: DedupPolicy,
    points: BTreeMap<CalendarDate, f64>,
    duplicates: usize,
}

impl SeriesBuilder {
    pub fn new(policy: DedupPolicy) -> Self {
        Self {
            policy,
            points: BTreeMap::new(),
            duplicates: 0,
        }
    }

    pub fn push(&mut self, point: NavPoint) {
        match self.points.get_mut(&point.date) {
            Some(existing) => {
                self.duplicates += 1;
                if self.policy == DedupPolicy::Last {
                    *existing = point.value;
                }
            }
            None => {
                self.points.insert(point.date, point.value);
            }
        }
    }

    pub fn extend<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = NavPoint>,
    {
        for point in points {
            self.push(point);
        }
    }

    /// Number of pushed points that collided with an earlier date.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn finish(self) -> Result<NavSeries, ValidationError> {
        let points = self
            .points
            .into_iter()
            .map(|(date, value)| NavPoint { date, value })
            .collect();
        NavSeries::from_sorted(points)
    }
}
