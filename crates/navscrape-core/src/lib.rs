//! Core engine for navscrape.
//!
//! This crate contains:
//! - Locale-aware number and date normalization
//! - Year segmentation and the ordered extraction strategy chain
//! - Series deduplication/sorting
//! - Price-feed (JSON) and delimited-text serialization
//!
//! Everything here is synchronous and free of I/O; fetching pages and
//! writing files belong to the caller.

pub mod document;
pub mod domain;
pub mod engine;
pub mod error;
pub mod extract;
pub mod feed;
pub mod fund;
pub mod profile;
pub mod segment;
pub mod series;

pub use document::{RawDocument, Table, EXCERPT_CUT_MARK};
pub use domain::{
    month_number, parse_decimal, CalendarDate, GeneratedAt, NavPoint, NavSeries, ITALIAN_MONTHS,
};
pub use engine::{Engine, Extraction, ExtractionConfig, ExtractionOutcome};
pub use error::{CoreError, ValidationError};
pub use extract::{Candidate, DateToken, Extractor, StrategyId};
pub use feed::{serialize_delimited, serialize_json, FeedPrice, PriceFeed};
pub use fund::FundMetadata;
pub use profile::{builtin_profiles, FundProfile};
pub use segment::{segment, Segment, SegmentRule};
pub use series::{DedupPolicy, SeriesBuilder};

/// Extracts a NAV series from `document` with the default strategy chain.
pub fn extract(document: &RawDocument, fund: &FundMetadata) -> ExtractionOutcome {
    Engine::default().extract(document, fund)
}
