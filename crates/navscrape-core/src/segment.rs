use std::sync::LazyLock;

use regex::Regex;

static YEAR_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)\[(\d{4})\]|^[ \t]*(\d{4})[ \t\r]*$").expect("valid year marker regex")
});

/// How year context is discovered in the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRule {
    /// `[YYYY]` tokens anywhere, or lines holding only a year.
    Marker,
    /// Lines holding exactly four digits.
    Lines,
}

/// Text attributed to one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub year: i32,
    pub fragment: &'a str,
}

/// Splits `text` into year-scoped fragments.
///
/// Text before the first year marker has no context and is dropped.
pub fn segment(text: &str, rule: SegmentRule) -> Vec<Segment<'_>> {
    match rule {
        SegmentRule::Marker => split_on_markers(text),
        SegmentRule::Lines => split_on_year_lines(text),
    }
}

fn split_on_markers(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut current: Option<(i32, usize)> = None;

    for captures in YEAR_MARKER_RE.captures_iter(text) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        let Some(year) = captures
            .get(1)
            .or_else(|| captures.get(2))
            .and_then(|year| year.as_str().parse::<i32>().ok())
        else {
            continue;
        };

        if let Some((previous, start)) = current.take() {
            segments.push(Segment {
                year: previous,
                fragment: &text[start..whole.start()],
            });
        }
        current = Some((year, whole.end()));
    }

    if let Some((year, start)) = current {
        segments.push(Segment {
            year,
            fragment: &text[start..],
        });
    }

    segments
}

fn split_on_year_lines(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut current: Option<(i32, usize)> = None;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        let Some(year) = year_line(line) else {
            continue;
        };
        if let Some((previous, start)) = current.take() {
            segments.push(Segment {
                year: previous,
                fragment: &text[start..line_start],
            });
        }
        current = Some((year, offset));
    }

    if let Some((year, start)) = current {
        segments.push(Segment {
            year,
            fragment: &text[start..],
        });
    }

    segments
}

fn year_line(line: &str) -> Option<i32> {
    let trimmed = line.trim();
    if trimmed.len() == 4 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        trimmed.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_bracketed_markers() {
        let segments = segment(
            "intro Gennaio 1,0 [2024] Gennaio 15,234 [2023] Dicembre 14,9",
            SegmentRule::Marker,
        );

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].year, 2024);
        assert_eq!(segments[0].fragment.trim(), "Gennaio 15,234");
        assert_eq!(segments[1].year, 2023);
        assert_eq!(segments[1].fragment.trim(), "Dicembre 14,9");
    }

    #[test]
    fn marker_rule_accepts_bare_year_lines() {
        let segments = segment("2025\nMarzo 10,1\n  2024  \nMarzo 9,8\n", SegmentRule::Marker);
        let years = segments.iter().map(|s| s.year).collect::<Vec<_>>();
        assert_eq!(years, vec![2025, 2024]);
        assert!(segments[0].fragment.contains("Marzo 10,1"));
    }

    #[test]
    fn line_rule_ignores_inline_years() {
        let text = "Rendimenti 2024\n2024\nGennaio\n15,234\n2023\nDicembre\n14,900";
        let segments = segment(text, SegmentRule::Lines);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].year, 2024);
        assert_eq!(segments[0].fragment, "Gennaio\n15,234\n");
        assert_eq!(segments[1].year, 2023);
        assert_eq!(segments[1].fragment, "Dicembre\n14,900");
    }

    #[test]
    fn no_marker_means_no_segments() {
        assert!(segment("Gennaio 15,234", SegmentRule::Marker).is_empty());
        assert!(segment("Gennaio\n15,234", SegmentRule::Lines).is_empty());
    }
}
