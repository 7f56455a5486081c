use std::sync::LazyLock;

use regex::Regex;

use super::{Candidate, DateToken, Extractor, StrategyId};
use crate::segment::{segment, SegmentRule};
use crate::{month_number, RawDocument};

static NUMERAL_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:€\s*)?(\d+(?:[.,]\d+)*)(?:\s*€)?$").expect("valid numeral line regex")
});

/// Month name and value printed on consecutive lines under a year line:
///
/// ```text
/// 2024
/// Gennaio
/// 15,234
/// ```
///
/// Blank lines between the two are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdjacentLines;

impl Extractor for AdjacentLines {
    fn id(&self) -> StrategyId {
        StrategyId::AdjacentLines
    }

    fn candidates(&self, document: &RawDocument) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        for block in segment(&document.text, SegmentRule::Lines) {
            let lines = block
                .fragment
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>();

            for pair in lines.windows(2) {
                let (month, value) = (pair[0], pair[1]);
                if month_number(month).is_none() {
                    continue;
                }
                let Some(numeral) = NUMERAL_LINE_RE
                    .captures(value)
                    .and_then(|captures| captures.get(1))
                else {
                    continue;
                };

                candidates.push(Candidate::new(
                    DateToken::MonthOfYear {
                        year: block.year,
                        month: month.to_owned(),
                    },
                    numeral.as_str(),
                ));
            }
        }

        candidates
    }
}
