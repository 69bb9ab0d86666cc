use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("token list is missing or empty")]
    Missing,
    #[error("token list has an empty entry at position {position}")]
    EmptyToken { position: usize },
}

/// Comma-separated tokens exactly as given: no trimming, duplicates kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<String>,
}

impl TokenList {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        if raw.is_empty() {
            return Err(ConfigError::Missing);
        }
        let tokens: Vec<String> = raw.split(',').map(ToOwned::to_owned).collect();
        if let Some(position) = tokens.iter().position(String::is_empty) {
            return Err(ConfigError::EmptyToken { position });
        }
        Ok(Self { tokens })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromStr for TokenList {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
