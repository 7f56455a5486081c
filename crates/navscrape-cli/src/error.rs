use navscrape_core::{CoreError, StrategyId, ValidationError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no NAV data found (strategies tried: {}); last lines of the page:\n{excerpt}", strategy_list(.attempted))]
    EmptySeries {
        attempted: Vec<StrategyId>,
        excerpt: String,
    },

    #[error(transparent)]
    Core(CoreError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::EmptySeries { .. } => 3,
            Self::Core(_) | Self::Command(_) | Self::Serialization(_) | Self::Io { .. } => 10,
        }
    }

    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(error) => Self::Validation(error),
            CoreError::EmptySeries { attempted, excerpt } => Self::EmptySeries { attempted, excerpt },
            other => Self::Core(other),
        }
    }
}

fn strategy_list(attempted: &[StrategyId]) -> String {
    attempted
        .iter()
        .map(|strategy| strategy.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_has_its_own_exit_code() {
        let error = CliError::from(CoreError::EmptySeries {
            attempted: vec![StrategyId::Direct],
            excerpt: String::from("Pagina vuota"),
        });

        assert_eq!(error.exit_code(), 3);
        let message = error.to_string();
        assert!(message.contains("direct"));
        assert!(message.contains("Pagina vuota"));
    }

    #[test]
    fn validation_errors_are_unwrapped() {
        let error = CliError::from(CoreError::Validation(ValidationError::EmptyFundName));
        assert!(matches!(error, CliError::Validation(ValidationError::EmptyFundName)));
        assert_eq!(error.exit_code(), 2);
    }
}
