use std::fmt;
use std::path::Path;

use navscrape_core::{CalendarDate, Extraction, FundMetadata};

use crate::error::CliError;

/// First/last view of an extracted series, printed after every run.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    pub fund: String,
    pub strategy: String,
    pub entries: usize,
    pub first_date: CalendarDate,
    pub last_date: CalendarDate,
    pub first_value: f64,
    pub last_value: f64,
    /// Total change in percent; absent for a single point or a zero start.
    pub change_pct: Option<f64>,
}

impl SeriesSummary {
    pub fn new(extraction: &Extraction, fund: &FundMetadata) -> Self {
        let first = extraction.series.first();
        let last = extraction.series.last();
        let change_pct = (extraction.series.len() >= 2 && first.value > 0.0)
            .then(|| (last.value - first.value) / first.value * 100.0);

        Self {
            fund: fund.name.clone(),
            strategy: extraction.strategy.to_string(),
            entries: extraction.series.len(),
            first_date: first.date,
            last_date: last.date,
            first_value: first.value,
            last_value: last.value,
            change_pct,
        }
    }
}

impl fmt::Display for SeriesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {} entries via {}", self.fund, self.entries, self.strategy)?;
        writeln!(f, "  period: {} .. {}", self.first_date, self.last_date)?;
        write!(
            f,
            "  first: {:.4}  last: {:.4}",
            self.first_value, self.last_value
        )?;
        if let Some(change) = self.change_pct {
            write!(f, "  change: {change:+.2}%")?;
        }
        Ok(())
    }
}

pub fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    std::fs::write(path, contents).map_err(|error| CliError::io(path.display().to_string(), error))?;
    log::info!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}
