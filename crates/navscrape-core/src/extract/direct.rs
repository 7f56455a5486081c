use std::sync::LazyLock;

use regex::Regex;

use super::{Candidate, DateToken, Extractor, StrategyId, NUMERAL_RE};
use crate::RawDocument;

// A date at the start of the line, then one or more numerals separated only
// by whitespace and currency markers.
static DIRECT_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{1,2}/\d{1,2}/\d{4}|\d{1,2}/\d{4})\b((?:\s*(?:€|EUR)?\s*\d+(?:[.,]\d+)*)+)",
    )
    .expect("valid direct line regex")
});

/// One row per line: `17/11/2025 € 26,042 € 34,509 € 12,849`.
///
/// `value_index` selects which numeral on the line belongs to the target
/// series; pages listing several sub-funds side by side put the wanted one
/// at a fixed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectDateValue {
    pub value_index: usize,
}

impl DirectDateValue {
    pub const fn new(value_index: usize) -> Self {
        Self { value_index }
    }
}

impl Extractor for DirectDateValue {
    fn id(&self) -> StrategyId {
        StrategyId::Direct
    }

    fn candidates(&self, document: &RawDocument) -> Vec<Candidate> {
        document
            .text
            .lines()
            .filter_map(|line| {
                let captures = DIRECT_LINE_RE.captures(line.trim())?;
                let date = captures.get(1)?.as_str();
                let values = captures.get(2)?.as_str();
                let value = NUMERAL_RE.find_iter(values).nth(self.value_index)?;
                Some(Candidate::new(
                    DateToken::Numeric(date.to_owned()),
                    value.as_str(),
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(extractor: DirectDateValue, text: &str) -> Vec<(String, String)> {
        extractor
            .candidates(&RawDocument::from_text(text))
            .into_iter()
            .map(|c| (c.date.to_string(), c.value))
            .collect()
    }

    #[test]
    fn picks_the_configured_column() {
        let text = "Data Stabilità Crescita Garantito\n\
                    17/11/2025 € 26,042 € 34,509 € 12,849\n\
                    31/10/2025 € 26,184 € 34,831 € 12,873";

        let found = values(DirectDateValue::new(1), text);
        assert_eq!(
            found,
            vec![
                ("17/11/2025".to_owned(), "34,509".to_owned()),
                ("31/10/2025".to_owned(), "34,831".to_owned()),
            ]
        );
    }

    #[test]
    fn accepts_month_year_dates_without_currency() {
        let found = values(DirectDateValue::default(), "  03/2024   15,234  ");
        assert_eq!(found, vec![("03/2024".to_owned(), "15,234".to_owned())]);
    }

    #[test]
    fn skips_lines_with_too_few_values() {
        assert!(values(DirectDateValue::new(2), "17/11/2025 € 26,042 € 34,509").is_empty());
    }

    #[test]
    fn requires_value_right_after_date() {
        assert!(values(DirectDateValue::default(), "17/11/2025 aggiornamento 26,042").is_empty());
        assert!(values(DirectDateValue::default(), "Aggiornato al 17/11/2025 € 26,042").is_empty());
        assert!(values(DirectDateValue::default(), "17/11/20251 2,0").is_empty());
    }

    #[test]
    fn keeps_malformed_tokens_for_later_rejection() {
        let found = values(DirectDateValue::default(), "17/11/2025 € 1.234,56");
        assert_eq!(found, vec![("17/11/2025".to_owned(), "1.234,56".to_owned())]);
    }
}
