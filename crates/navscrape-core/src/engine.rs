use std::collections::HashSet;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::extract::table::DEFAULT_DATE_LABELS;
use crate::extract::{AdjacentLines, DirectDateValue, Extractor, TableColumn, YearBlock};
use crate::{
    CoreError, DedupPolicy, FundMetadata, NavSeries, RawDocument, SeriesBuilder, StrategyId,
};

pub const DEFAULT_EXCERPT_LINES: usize = 50;
pub const DEFAULT_EXCERPT_CHARS: usize = 4000;

/// Tunables for one fund page layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Position of the target series among the values of a row.
    pub value_index: usize,
    /// Header text of the target series column in tables.
    pub series_label: Option<String>,
    pub date_labels: Vec<String>,
    pub dedup: DedupPolicy,
    /// Strategies in priority order.
    pub strategies: Vec<StrategyId>,
    pub excerpt_lines: usize,
    /// Character cap on the failure excerpt, applied after `excerpt_lines`.
    pub excerpt_chars: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            value_index: 0,
            series_label: None,
            date_labels: DEFAULT_DATE_LABELS.iter().map(|label| (*label).to_owned()).collect(),
            dedup: DedupPolicy::First,
            strategies: StrategyId::ALL.to_vec(),
            excerpt_lines: DEFAULT_EXCERPT_LINES,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }
}

/// Successful extraction with provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction {
    pub series: NavSeries,
    pub strategy: StrategyId,
    pub source: String,
    /// Strategies tried, in order, ending with the one that matched.
    pub attempted: Vec<StrategyId>,
    pub candidates: usize,
    pub discarded: usize,
    pub duplicates: usize,
    pub warnings: Vec<String>,
}

impl Extraction {
    pub fn point_count(&self) -> usize {
        self.series.len()
    }
}

pub type ExtractionOutcome = Result<Extraction, CoreError>;

/// Ordered extractor chain. Stateless; share freely across threads.
pub struct Engine {
    extractors: Vec<Box<dyn Extractor>>,
    dedup: DedupPolicy,
    excerpt_lines: usize,
    excerpt_chars: usize,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}

impl Engine {
    pub fn new(config: &ExtractionConfig) -> Self {
        let extractors = dedupe_chain(&config.strategies)
            .into_iter()
            .map(|strategy| build_extractor(strategy, config))
            .collect();

        Self::with_extractors(extractors, config.dedup)
            .with_excerpt_limits(config.excerpt_lines, config.excerpt_chars)
    }

    pub fn with_extractors(extractors: Vec<Box<dyn Extractor>>, dedup: DedupPolicy) -> Self {
        Self {
            extractors,
            dedup,
            excerpt_lines: DEFAULT_EXCERPT_LINES,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }

    pub fn with_excerpt_limits(mut self, lines: usize, chars: usize) -> Self {
        self.excerpt_lines = lines;
        self.excerpt_chars = chars;
        self
    }

    pub fn strategies(&self) -> Vec<StrategyId> {
        self.extractors.iter().map(|extractor| extractor.id()).collect()
    }

    /// Runs the chain and stops at the first strategy that yields candidates.
    ///
    /// Candidates that fail date or value conversion are skipped. When the
    /// chain finds no candidates, or every candidate of the matching strategy
    /// is malformed, the error carries the tried strategies and the tail of
    /// the input.
    pub fn extract(&self, document: &RawDocument, fund: &FundMetadata) -> ExtractionOutcome {
        let mut attempted = Vec::with_capacity(self.extractors.len());
        let mut missed = 0usize;

        for extractor in &self.extractors {
            let strategy = extractor.id();
            attempted.push(strategy);

            let candidates = extractor.candidates(document);
            if candidates.is_empty() {
                debug!("{strategy}: no candidates");
                missed += 1;
                continue;
            }
            let found = candidates.len();
            let mut builder = SeriesBuilder::new(self.dedup);
            let mut discarded = 0usize;

            for candidate in &candidates {
                match candidate.resolve() {
                    Ok(point) => builder.push(point),
                    Err(error) => {
                        discarded += 1;
                        debug!(
                            "{strategy}: discarded candidate ({}, '{}'): {error}",
                            candidate.date, candidate.value
                        );
                    }
                }
            }

            let duplicates = builder.duplicates();
            let Ok(series) = builder.finish() else {
                debug!("{strategy}: all {found} candidate(s) malformed, chain stopped");
                return Err(self.empty_series(attempted, document));
            };

            let mut warnings = Vec::new();
            if missed > 0 {
                warnings.push(format!(
                    "strategy '{strategy}' matched after {missed} strategy(ies) found nothing"
                ));
            }
            if discarded > 0 {
                warnings.push(format!(
                    "{discarded} of {found} candidate(s) discarded as malformed"
                ));
            }
            if duplicates > 0 {
                warnings.push(format!(
                    "{duplicates} duplicate date(s) resolved with '{}' policy",
                    self.dedup
                ));
            }

            info!(
                "{}: {} point(s) via '{strategy}' ({} to {})",
                fund.name,
                series.len(),
                series.first().date,
                series.last().date
            );

            return Ok(Extraction {
                series,
                strategy,
                source: fund.source.clone(),
                attempted,
                candidates: found,
                discarded,
                duplicates,
                warnings,
            });
        }

        Err(self.empty_series(attempted, document))
    }

    fn empty_series(&self, attempted: Vec<StrategyId>, document: &RawDocument) -> CoreError {
        CoreError::EmptySeries {
            attempted,
            excerpt: document.excerpt(self.excerpt_lines, self.excerpt_chars),
        }
    }
}

fn build_extractor(strategy: StrategyId, config: &ExtractionConfig) -> Box<dyn Extractor> {
    match strategy {
        StrategyId::Direct => Box::new(DirectDateValue::new(config.value_index)),
        StrategyId::YearBlock => Box::new(YearBlock),
        StrategyId::Table => Box::new(TableColumn {
            series_label: config.series_label.clone(),
            date_labels: config.date_labels.clone(),
            value_index: config.value_index,
        }),
        StrategyId::AdjacentLines => Box::new(AdjacentLines),
    }
}

fn dedupe_chain(chain: &[StrategyId]) -> Vec<StrategyId> {
    let mut seen = HashSet::new();
    chain
        .iter()
        .copied()
        .filter(|strategy| seen.insert(*strategy))
        .collect()
}
