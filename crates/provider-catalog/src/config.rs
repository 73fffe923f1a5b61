//! Grid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::search::{FilterOptions, SortBy, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, DEFAULT_PAGE_SIZE};

/// Product grid configuration.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Products shown initially and added per "load more".
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Upper end of the max-price slider, and the default max price.
    #[serde(default = "default_price_ceiling")]
    pub price_ceiling: f64,

    /// Slider step for the max-price control.
    #[serde(default = "default_price_step")]
    pub price_step: f64,

    /// Sort order after a reset.
    #[serde(default)]
    pub default_sort: SortBy,

    /// Whether "clear filters" also rewinds the visible-count cursor.
    #[serde(default)]
    pub reset_cursor_on_clear: bool,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_price_ceiling() -> f64 {
    DEFAULT_MAX_PRICE
}

fn default_price_step() -> f64 {
    10.0
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            price_ceiling: default_price_ceiling(),
            price_step: default_price_step(),
            default_sort: SortBy::default(),
            reset_cursor_on_clear: false,
        }
    }
}

impl GridConfig {
    /// Parse a TOML config.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a file; `.json` is parsed as JSON, anything else as
    /// TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Ok(serde_json::from_str(&content)?)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Filters a grid starts with and resets to.
    pub fn default_filters(&self) -> FilterOptions {
        FilterOptions::new()
            .with_price_range(DEFAULT_MIN_PRICE, self.price_ceiling)
            .with_sort(self.default_sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = GridConfig::from_toml_str("").unwrap();
        assert_eq!(config, GridConfig::default());
        assert_eq!(config.page_size, 6);
        assert_eq!(config.price_ceiling, 500.0);
        assert_eq!(config.price_step, 10.0);
        assert!(!config.reset_cursor_on_clear);
    }

    #[test]
    fn test_partial_config() {
        let config = GridConfig::from_toml_str(
            r#"
            page_size = 12
            default_sort = "popular"
            reset_cursor_on_clear = true
            "#,
        )
        .unwrap();
        assert_eq!(config.page_size, 12);
        assert_eq!(config.default_sort, SortBy::Popular);
        assert!(config.reset_cursor_on_clear);
        assert_eq!(config.price_ceiling, 500.0);
    }

    #[test]
    fn test_default_filters_follow_config() {
        let config = GridConfig {
            price_ceiling: 1000.0,
            default_sort: SortBy::Rating,
            ..GridConfig::default()
        };
        let filters = config.default_filters();
        assert_eq!(filters.max_price, 1000.0);
        assert_eq!(filters.sort_by, SortBy::Rating);
        assert_eq!(GridConfig::default().default_filters(), FilterOptions::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = GridConfig::from_toml_str("page_size = \"six\"").unwrap_err();
        assert!(matches!(err, CatalogError::Toml(_)));
    }
}
