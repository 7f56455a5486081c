use serde::{Deserialize, Serialize};

use crate::ValidationError;

pub const DEFAULT_ISIN: &str = "N/A";
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Descriptive fund data copied into the price feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundMetadata {
    pub name: String,
    #[serde(default = "default_isin")]
    pub isin: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Page URL or other identifier of where the data was scraped from.
    pub source: String,
}

impl FundMetadata {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Result<Self, ValidationError> {
        let metadata = Self {
            name: name.into(),
            isin: default_isin(),
            currency: default_currency(),
            source: source.into(),
        };
        metadata.validate()?;
        Ok(metadata)
    }

    pub fn with_isin(mut self, isin: impl Into<String>) -> Self {
        let isin = isin.into();
        self.isin = if isin.trim().is_empty() {
            default_isin()
        } else {
            isin.trim().to_owned()
        };
        self
    }

    pub fn with_currency(mut self, currency: impl AsRef<str>) -> Result<Self, ValidationError> {
        self.currency = validate_currency_code(currency.as_ref())?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyFundName);
        }
        validate_currency_code(&self.currency)?;
        Ok(())
    }
}

fn default_isin() -> String {
    DEFAULT_ISIN.to_owned()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_owned()
}

fn validate_currency_code(value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.len() == 3 && value.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(value.to_owned())
    } else {
        Err(ValidationError::InvalidCurrency {
            value: value.to_owned(),
        })
    }
}
