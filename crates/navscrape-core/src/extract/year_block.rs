use std::sync::LazyLock;

use regex::Regex;

use super::{Candidate, DateToken, Extractor, StrategyId};
use crate::segment::{segment, SegmentRule};
use crate::{month_number, RawDocument};

static WORD_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\p{L}+)\s+(\d+(?:[.,]\d+)*)").expect("valid word/value regex")
});

/// Month/value pairs inside `[YYYY]`-scoped blocks:
/// `[2024] Gennaio 15,234 Febbraio 15,401`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct YearBlock;

impl Extractor for YearBlock {
    fn id(&self) -> StrategyId {
        StrategyId::YearBlock
    }

    fn candidates(&self, document: &RawDocument) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        for block in segment(&document.text, SegmentRule::Marker) {
            for captures in WORD_VALUE_RE.captures_iter(block.fragment) {
                let (Some(word), Some(value)) = (captures.get(1), captures.get(2)) else {
                    continue;
                };
                if month_number(word.as_str()).is_none() {
                    continue;
                }

                candidates.push(Candidate::new(
                    DateToken::MonthOfYear {
                        year: block.year,
                        month: word.as_str().to_owned(),
                    },
                    value.as_str(),
                ));
            }
        }

        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_months_with_the_enclosing_year() {
        let document = RawDocument::from_text(
            "Valori quota [2024] Gennaio 15,234 Febbraio 15,401 [2023] Dicembre 14,987",
        );

        let found = YearBlock
            .candidates(&document)
            .into_iter()
            .map(|c| (c.date.to_string(), c.value))
            .collect::<Vec<_>>();

        assert_eq!(
            found,
            vec![
                ("Gennaio 2024".to_owned(), "15,234".to_owned()),
                ("Febbraio 2024".to_owned(), "15,401".to_owned()),
                ("Dicembre 2023".to_owned(), "14,987".to_owned()),
            ]
        );
    }

    #[test]
    fn ignores_prose_and_unscoped_months() {
        let document = RawDocument::from_text(
            "Marzo 9,9 prima del blocco\n[2024]\nRendimento 3,2 percento, Aprile 15,6 e Totale 99",
        );

        let found = YearBlock.candidates(&document);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].date.to_string(), "Aprile 2024");
        assert_eq!(found[0].value, "15,6");
    }
}
