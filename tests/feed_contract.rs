//! Contract tests for the files read by the portfolio tracker.

use navscrape_core::{
    extract, serialize_delimited, serialize_json, FundMetadata, GeneratedAt, PriceFeed,
    RawDocument,
};
use serde_json::Value;

fn fonte() -> FundMetadata {
    FundMetadata::new("FONTE Dinamico", "https://www.fondofonte.it").expect("valid fund")
}

fn year_block_page() -> RawDocument {
    RawDocument::from_text("[2024] Gennaio 15,234 Febbraio 15,401")
}

#[test]
fn json_feed_matches_the_consumer_layout() {
    let outcome = extract(&year_block_page(), &fonte()).expect("must extract");
    let at = GeneratedAt::parse("2025-11-18T06:30:00Z").expect("valid timestamp");

    let json = PriceFeed::new(&outcome.series, &fonte(), at)
        .to_json()
        .expect("serializable");

    let expected = r#"{
  "name": "FONTE Dinamico",
  "isin": "N/A",
  "currency": "EUR",
  "feed": "custom",
  "source": "https://www.fondofonte.it",
  "last_updated": "2025-11-18T06:30:00Z",
  "total_entries": 2,
  "prices": [
    {
      "date": "2024-01-01",
      "value": 15.234
    },
    {
      "date": "2024-02-01",
      "value": 15.401
    }
  ]
}"#;
    assert_eq!(json, expected);
}

#[test]
fn json_feed_keeps_non_ascii_names_readable() {
    let fund = FundMetadata::new("Fondo Più Crescita", "https://example.test")
        .expect("valid fund")
        .with_isin("IT0001234567");
    let outcome = extract(&year_block_page(), &fund).expect("must extract");

    let json = serialize_json(&outcome.series, &fund).expect("serializable");
    assert!(json.contains("Fondo Più Crescita"));

    let value: Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(value["isin"], "IT0001234567");
    assert_eq!(value["total_entries"], 2);
    assert!(value["last_updated"]
        .as_str()
        .is_some_and(|stamp| stamp.ends_with('Z')));
}

#[test]
fn delimited_text_has_header_and_four_decimals() {
    let outcome = extract(&year_block_page(), &fonte()).expect("must extract");

    assert_eq!(
        serialize_delimited(&outcome.series),
        "Date;Value;Currency\n2024-01-01;15.2340;EUR\n2024-02-01;15.4010;EUR\n"
    );
}

#[test]
fn serialization_is_deterministic_for_a_fixed_timestamp() {
    let outcome = extract(&year_block_page(), &fonte()).expect("must extract");
    let at = GeneratedAt::from_unix_seconds(1_763_447_400).expect("valid timestamp");

    let first = PriceFeed::new(&outcome.series, &fonte(), at).to_json().expect("json");
    let second = PriceFeed::new(&outcome.series, &fonte(), at).to_json().expect("json");

    assert_eq!(first, second);
}
