use super::{Candidate, DateToken, Extractor, StrategyId};
use crate::{RawDocument, Table};

pub const DEFAULT_DATE_LABELS: [&str; 4] = ["data", "date", "periodo", "mese"];

/// Pairs a date column with a series column in structured tables.
///
/// The header row is the first row holding both a date label and the series
/// label. Without a series label the `value_index`-th non-date column is
/// used, matching [`super::DirectDateValue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub series_label: Option<String>,
    pub date_labels: Vec<String>,
    pub value_index: usize,
}

impl Default for TableColumn {
    fn default() -> Self {
        Self {
            series_label: None,
            date_labels: DEFAULT_DATE_LABELS.iter().map(|label| (*label).to_owned()).collect(),
            value_index: 0,
        }
    }
}

impl TableColumn {
    pub fn with_series_label(mut self, label: impl Into<String>) -> Self {
        self.series_label = Some(label.into());
        self
    }

    pub fn with_value_index(mut self, value_index: usize) -> Self {
        self.value_index = value_index;
        self
    }

    fn locate_columns(&self, table: &Table) -> Option<(usize, usize, usize)> {
        table.rows.iter().enumerate().find_map(|(row_index, row)| {
            let headers = row.iter().map(|cell| cell.trim().to_lowercase()).collect::<Vec<_>>();

            let value_col = match &self.series_label {
                Some(label) => {
                    let label = label.to_lowercase();
                    headers.iter().position(|header| header.contains(&label))?
                }
                None => {
                    let date_col = self.date_column(&headers, None)?;
                    (0..headers.len())
                        .filter(|index| *index != date_col && !headers[*index].is_empty())
                        .nth(self.value_index)?
                }
            };
            let date_col = self.date_column(&headers, Some(value_col))?;

            Some((row_index, date_col, value_col))
        })
    }

    fn date_column(&self, headers: &[String], except: Option<usize>) -> Option<usize> {
        headers.iter().enumerate().position(|(index, header)| {
            Some(index) != except
                && self
                    .date_labels
                    .iter()
                    .any(|label| header.contains(&label.to_lowercase()))
        })
    }
}

impl Extractor for TableColumn {
    fn id(&self) -> StrategyId {
        StrategyId::Table
    }

    fn candidates(&self, document: &RawDocument) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        for table in &document.tables {
            let Some((header_row, date_col, value_col)) = self.locate_columns(table) else {
                log::debug!("table without recognisable header skipped");
                continue;
            };

            for row in table.rows.iter().skip(header_row + 1) {
                let (Some(date), Some(value)) = (row.get(date_col), row.get(value_col)) else {
                    continue;
                };
                candidates.push(Candidate::new(
                    DateToken::Period(date.trim().to_owned()),
                    value.trim(),
                ));
            }
        }

        candidates
    }
}
