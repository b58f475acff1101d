//! Storefront configuration.
use crate::pagination::PAGE_SIZE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Public product listing used when no other endpoint is configured.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Endpoint answering a plain GET with a JSON array of products.
    pub catalog_url: String,
    pub page_size: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl StorefrontConfig {
    #[must_use]
    pub fn default_config() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            page_size: PAGE_SIZE,
        }
    }

    /// Parse a config document; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON for this shape.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg = StorefrontConfig::from_json(r#"{"page_size": 12}"#).expect("config parses");
        assert_eq!(cfg.page_size, 12);
        assert_eq!(cfg.catalog_url, DEFAULT_CATALOG_URL);
        assert_eq!(StorefrontConfig::from_json("{}").expect("empty"), StorefrontConfig::default());
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(StorefrontConfig::from_json("page_size = 6").is_err());
    }
}
