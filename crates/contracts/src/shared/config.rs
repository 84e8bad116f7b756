use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Data file path, relative to the page.
    pub data_path: String,
    /// Query parameter carrying the cache-busting timestamp.
    pub cache_bust_param: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    pub search_debounce_ms: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: "data/ga-ela.json".to_string(),
            cache_bust_param: "v".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Georgia ELA Standards Guide".to_string(),
            search_debounce_ms: 200,
        }
    }
}

impl CatalogConfig {
    /// Data file URL with the cache-busting parameter appended.
    pub fn request_url(&self, timestamp: i64) -> String {
        let separator = if self.data_path.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}={}",
            self.data_path, separator, self.cache_bust_param, timestamp
        )
    }
}

/// Default configuration, identical to `AppConfig::default()`
pub const DEFAULT_CONFIG: &str = r#"
[catalog]
data_path = "data/ga-ela.json"
cache_bust_param = "v"

[ui]
title = "Georgia ELA Standards Guide"
search_debounce_ms = 200
"#;

/// Load configuration from a TOML document
///
/// Missing sections and keys keep their defaults; `None` yields the defaults.
pub fn load_config(source: Option<&str>) -> anyhow::Result<AppConfig> {
    match source {
        Some(text) => {
            let config: AppConfig = toml::from_str(text)?;
            log::debug!("Loaded configuration: {:?}", config);
            Ok(config)
        }
        None => {
            log::info!("Using default configuration");
            Ok(AppConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(Some(DEFAULT_CONFIG)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.catalog.data_path, "data/ga-ela.json");
    }

    #[test]
    fn test_partial_override() {
        let config = load_config(Some("[ui]\ntitle = \"Custom\"\n")).unwrap();
        assert_eq!(config.ui.title, "Custom");
        assert_eq!(config.ui.search_debounce_ms, 200);
        assert_eq!(config.catalog, CatalogConfig::default());
    }

    #[test]
    fn test_none_is_default() {
        assert_eq!(load_config(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(load_config(Some("[ui\ntitle = 3")).is_err());
        assert!(load_config(Some("[ui]\nsearch_debounce_ms = \"fast\"")).is_err());
    }

    #[test]
    fn test_request_url() {
        let catalog = CatalogConfig::default();
        assert_eq!(catalog.request_url(1700000000000), "data/ga-ela.json?v=1700000000000");

        let catalog = CatalogConfig {
            data_path: "data/ga-ela.json?lang=en".to_string(),
            cache_bust_param: "_ts".to_string(),
        };
        assert_eq!(catalog.request_url(42), "data/ga-ela.json?lang=en&_ts=42");
    }
}
