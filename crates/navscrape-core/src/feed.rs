//! Output encodings read by the portfolio tracker.
//!
//! Field names, field order and the delimited layout are fixed by the
//! consumer and must not change.

use serde::Serialize;

use crate::{CalendarDate, CoreError, FundMetadata, GeneratedAt, NavSeries};

pub const FEED_KIND: &str = "custom";
pub const DELIMITED_HEADER: &str = "Date;Value;Currency";
pub const DELIMITED_CURRENCY: &str = "EUR";
pub const VALUE_DECIMALS: usize = 4;

/// JSON price feed envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceFeed {
    pub name: String,
    pub isin: String,
    pub currency: String,
    pub feed: &'static str,
    pub source: String,
    pub last_updated: GeneratedAt,
    pub total_entries: usize,
    pub prices: Vec<FeedPrice>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeedPrice {
    pub date: CalendarDate,
    pub value: f64,
}

impl PriceFeed {
    pub fn new(series: &NavSeries, fund: &FundMetadata, generated_at: GeneratedAt) -> Self {
        let prices = series
            .iter()
            .map(|point| FeedPrice {
                date: point.date,
                value: round_value(point.value),
            })
            .collect::<Vec<_>>();

        Self {
            name: fund.name.clone(),
            isin: fund.isin.clone(),
            currency: fund.currency.clone(),
            feed: FEED_KIND,
            source: fund.source.clone(),
            last_updated: generated_at,
            total_entries: prices.len(),
            prices,
        }
    }

    /// Two-space indented JSON, non-ASCII left unescaped.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self).map_err(CoreError::from)
    }
}

/// Renders the JSON feed stamped with the current time.
pub fn serialize_json(series: &NavSeries, fund: &FundMetadata) -> Result<String, CoreError> {
    PriceFeed::new(series, fund, GeneratedAt::now()).to_json()
}

/// Renders `Date;Value;Currency` text, one `\n`-terminated line per point.
pub fn serialize_delimited(series: &NavSeries) -> String {
    let mut output = String::with_capacity(DELIMITED_HEADER.len() + 1 + series.len() * 24);
    output.push_str(DELIMITED_HEADER);
    output.push('\n');

    for point in series {
        output.push_str(&format!(
            "{};{:.*};{DELIMITED_CURRENCY}\n",
            point.date, VALUE_DECIMALS, point.value
        ));
    }

    output
}

/// Rounds to [`VALUE_DECIMALS`] places. Values too large to scale are already
/// integral and pass through unchanged.
fn round_value(value: f64) -> f64 {
    let scale = 10f64.powi(VALUE_DECIMALS as i32);
    let scaled = value * scale;
    if scaled.is_finite() {
        scaled.round() / scale
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DedupPolicy, NavPoint, SeriesBuilder};

    fn series() -> NavSeries {
        let mut builder = SeriesBuilder::new(DedupPolicy::First);
        for (day, value) in [(17, 34.509), (31, 34.831_449_9)] {
            let month = if day == 17 { 11 } else { 10 };
            let date = CalendarDate::from_ymd(2025, month, day).expect("valid date");
            builder.push(NavPoint::new(date, value).expect("valid point"));
        }
        builder.finish().expect("non-empty")
    }

    #[test]
    fn delimited_uses_fixed_layout() {
        let text = serialize_delimited(&series());
        assert_eq!(
            text,
            "Date;Value;Currency\n2025-10-31;34.8314;EUR\n2025-11-17;34.5090;EUR\n"
        );
    }

    #[test]
    fn rounds_feed_values_to_four_places() {
        let fund = FundMetadata::new("FONCHIM Crescita", "https://www.fonchim.it").expect("valid");
        let at = GeneratedAt::from_unix_seconds(0).expect("valid");
        let feed = PriceFeed::new(&series(), &fund, at);

        assert_eq!(feed.total_entries, 2);
        assert_eq!(feed.prices[0].value, 34.8314);
        assert_eq!(feed.prices[1].value, 34.509);
    }

    #[test]
    fn huge_values_survive_rounding() {
        let date = CalendarDate::from_ymd(2025, 1, 2).expect("valid date");
        let mut builder = SeriesBuilder::new(DedupPolicy::First);
        builder.push(NavPoint::new(date, 1e305).expect("finite value"));
        let series = builder.finish().expect("non-empty");

        let fund = FundMetadata::new("Fondo", "https://example.test").expect("valid");
        let at = GeneratedAt::from_unix_seconds(0).expect("valid");
        let feed = PriceFeed::new(&series, &fund, at);
        assert_eq!(feed.prices[0].value, 1e305);

        let json = feed.to_json().expect("serializable");
        assert!(!json.contains("null"));
    }
}
