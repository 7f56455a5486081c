use serde::{Deserialize, Serialize};

use crate::{CoreError, ExtractionConfig, FundMetadata, StrategyId, ValidationError};

/// A fund page: metadata for the feed plus how to read the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundProfile {
    pub id: String,
    pub fund: FundMetadata,
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

impl FundProfile {
    /// Parses and validates a YAML profile.
    ///
    /// ```yaml
    /// id: fonchim-crescita
    /// fund:
    ///   name: FONCHIM Crescita
    ///   source: https://www.fonchim.it
    /// extraction:
    ///   value_index: 1
    ///   series_label: Crescita
    /// ```
    pub fn from_yaml_str(input: &str) -> Result<Self, CoreError> {
        let profile: Self = serde_yaml::from_str(input)?;
        profile.fund.validate()?;
        Ok(profile)
    }

    pub fn builtin(id: &str) -> Result<Self, ValidationError> {
        builtin_profiles()
            .into_iter()
            .find(|profile| profile.id.eq_ignore_ascii_case(id.trim()))
            .ok_or_else(|| ValidationError::UnknownProfile {
                value: id.to_owned(),
            })
    }
}

/// Layouts of the pages the scraper was first written for.
pub fn builtin_profiles() -> Vec<FundProfile> {
    vec![
        FundProfile {
            id: String::from("fonchim-crescita"),
            fund: FundMetadata {
                name: String::from("FONCHIM Crescita"),
                isin: String::from("N/A"),
                currency: String::from("EUR"),
                source: String::from("https://www.fonchim.it"),
            },
            // Data | Stabilità | Crescita | Garantito | Moneta
            extraction: ExtractionConfig {
                value_index: 1,
                series_label: Some(String::from("Crescita")),
                ..ExtractionConfig::default()
            },
        },
        FundProfile {
            id: String::from("fonte-dinamico"),
            fund: FundMetadata {
                name: String::from("FONTE Dinamico"),
                isin: String::from("N/A"),
                currency: String::from("EUR"),
                source: String::from("https://www.fondofonte.it"),
            },
            extraction: ExtractionConfig {
                strategies: vec![StrategyId::YearBlock, StrategyId::AdjacentLines],
                ..ExtractionConfig::default()
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DedupPolicy;

    #[test]
    fn loads_yaml_profile_with_defaults() {
        let profile = FundProfile::from_yaml_str(
            "id: custom\nfund:\n  name: Fondo Test\n  source: https://example.test\nextraction:\n  value_index: 2\n  dedup: last\n  strategies: [table, direct]\n",
        )
        .expect("valid profile");

        assert_eq!(profile.fund.isin, "N/A");
        assert_eq!(profile.fund.currency, "EUR");
        assert_eq!(profile.extraction.value_index, 2);
        assert_eq!(profile.extraction.dedup, DedupPolicy::Last);
        assert_eq!(
            profile.extraction.strategies,
            vec![StrategyId::Table, StrategyId::Direct]
        );
        assert_eq!(profile.extraction.excerpt_lines, 50);
        assert_eq!(profile.extraction.excerpt_chars, 4000);
    }

    #[test]
    fn rejects_invalid_profile_fund() {
        let err = FundProfile::from_yaml_str(
            "id: bad\nfund:\n  name: Fondo\n  source: x\n  currency: euro\n",
        )
        .expect_err("must fail");
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidCurrency { .. })
        ));
    }

    #[test]
    fn finds_builtin_profiles() {
        let profile = FundProfile::builtin("FONCHIM-crescita").expect("known profile");
        assert_eq!(profile.extraction.value_index, 1);

        let err = FundProfile::builtin("unknown").expect_err("must fail");
        assert!(matches!(err, ValidationError::UnknownProfile { .. }));
    }
}
