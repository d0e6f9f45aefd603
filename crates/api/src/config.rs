//! Resource layer configuration.

use storefront_core::{CatalogError, CatalogResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_MAX_DEPTH: usize = 8;

pub const BASE_URL_VAR: &str = "STOREFRONT_BASE_URL";
pub const MAX_DEPTH_VAR: &str = "STOREFRONT_MAX_DEPTH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceConfig {
    /// Prefix for generated storefront URLs (sample downloads, booking slots).
    pub base_url: String,
    /// Deepest nesting allowed through variants and grouped members.
    pub max_depth: usize,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ResourceConfig {
    /// Read `STOREFRONT_BASE_URL` and `STOREFRONT_MAX_DEPTH` from the process environment.
    pub fn from_env() -> CatalogResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CatalogResult<Self> {
        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| {
            tracing::warn!("{BASE_URL_VAR} not set; using {DEFAULT_BASE_URL}");
            DEFAULT_BASE_URL.to_string()
        });

        let max_depth = match lookup(MAX_DEPTH_VAR) {
            None => DEFAULT_MAX_DEPTH,
            Some(raw) => {
                let depth: usize = raw.trim().parse().map_err(|e| {
                    CatalogError::validation(format!("{MAX_DEPTH_VAR}={raw:?}: {e}"))
                })?;
                if depth == 0 {
                    return Err(CatalogError::validation(format!(
                        "{MAX_DEPTH_VAR} must be at least 1"
                    )));
                }
                depth
            }
        };

        Ok(Self {
            base_url,
            max_depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ResourceConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ResourceConfig::default());
    }

    #[test]
    fn reads_both_values() {
        let config = ResourceConfig::from_lookup(lookup_from(&[
            (BASE_URL_VAR, "https://shop.test"),
            (MAX_DEPTH_VAR, " 3 "),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://shop.test");
        assert_eq!(config.max_depth, 3);
    }

    #[test]
    fn rejects_non_numeric_depth() {
        let err = ResourceConfig::from_lookup(lookup_from(&[(MAX_DEPTH_VAR, "deep")])).unwrap_err();
        match err {
            CatalogError::Validation(msg) => assert!(msg.contains(MAX_DEPTH_VAR)),
            _ => panic!("Expected Validation error for non-numeric depth"),
        }
    }

    #[test]
    fn rejects_zero_depth() {
        let err = ResourceConfig::from_lookup(lookup_from(&[(MAX_DEPTH_VAR, "0")])).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }
}
