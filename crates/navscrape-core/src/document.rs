use serde::{Deserialize, Serialize};

pub const EXCERPT_CUT_MARK: &str = "[...] ";

/// Page content handed over by the fetch layer.
///
/// `text` is the flattened page body; `tables` carries any HTML tables the
/// fetch layer captured, row by row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<Table>,
}

impl RawDocument {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tables: Vec::new(),
        }
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    /// Tail of the text for failure reports: the last `max_lines` non-blank
    /// lines, cut to the last `max_chars` characters. A cut is marked with
    /// [`EXCERPT_CUT_MARK`].
    pub fn excerpt(&self, max_lines: usize, max_chars: usize) -> String {
        let lines = self
            .text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
            .collect::<Vec<_>>();
        let skip = lines.len().saturating_sub(max_lines);
        let tail = lines[skip..].join("\n");

        let chars = tail.chars().count();
        if chars <= max_chars {
            return tail;
        }
        let cut = tail
            .char_indices()
            .nth(chars - max_chars)
            .map_or(tail.len(), |(index, _)| index);
        format!("{EXCERPT_CUT_MARK}{}", &tail[cut..])
    }
}

/// Ordered rows of cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}
