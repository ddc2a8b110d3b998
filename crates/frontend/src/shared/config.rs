use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub uploads: UploadsConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Prefix of every REST call, proxied to the backend
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadsConfig {
    /// Prefix of stored images (recipes, ingredients, user photos)
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    pub alert_timeout_ms: u32,
    /// Delay before leaving a success screen (activation, password reset)
    pub redirect_delay_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "/api"

[uploads]
base_url = "/uploads"

[ui]
alert_timeout_ms = 3000
redirect_delay_ms = 3000
"#;

/// Id of the optional `<script type="application/toml">` override in index.html
const CONFIG_ELEMENT_ID: &str = "app-config";

static CONFIG: Lazy<AppConfig> = Lazy::new(load_config);

pub fn config() -> &'static AppConfig {
    &CONFIG
}

/// Load configuration
///
/// Search order:
/// 1. Host page override merged over the defaults
/// 2. Falls back to embedded default config
fn load_config() -> AppConfig {
    let override_toml = host_page_override();
    match parse_config(override_toml.as_deref()) {
        Ok(config) => {
            if override_toml.is_some() {
                log::info!("Loaded config override from #{}", CONFIG_ELEMENT_ID);
            }
            config
        }
        Err(e) => {
            log::warn!("Ignoring invalid config override: {}", e);
            default_config()
        }
    }
}

fn default_config() -> AppConfig {
    toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "/api".to_string(),
            },
            uploads: UploadsConfig {
                base_url: "/uploads".to_string(),
            },
            ui: UiConfig {
                alert_timeout_ms: 3000,
                redirect_delay_ms: 3000,
            },
        }
    }
}

fn host_page_override() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}

/// Parses the defaults and merges `override_toml` over them, key by key
pub fn parse_config(override_toml: Option<&str>) -> Result<AppConfig, String> {
    let mut merged: toml::Value = toml::from_str(DEFAULT_CONFIG)
        .map_err(|e| format!("Failed to parse default config: {}", e))?;

    if let Some(text) = override_toml {
        let overrides: toml::Value =
            toml::from_str(text).map_err(|e| format!("Failed to parse config override: {}", e))?;
        merge_values(&mut merged, overrides);
    }

    merged
        .try_into()
        .map_err(|e| format!("Failed to read config: {}", e))
}

fn merge_values(base: &mut toml::Value, overrides: toml::Value) {
    match (base, overrides) {
        (toml::Value::Table(base_table), toml::Value::Table(override_table)) => {
            for (key, value) in override_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<AppConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.base_url, "/api");
        assert_eq!(config.uploads.base_url, "/uploads");
        assert_eq!(config.ui.alert_timeout_ms, 3000);
    }

    #[test]
    fn test_embedded_config_matches_fallback() {
        let embedded = parse_config(None).unwrap();
        let fallback = AppConfig::default();
        assert_eq!(embedded.api.base_url, fallback.api.base_url);
        assert_eq!(embedded.uploads.base_url, fallback.uploads.base_url);
        assert_eq!(embedded.ui.alert_timeout_ms, fallback.ui.alert_timeout_ms);
        assert_eq!(embedded.ui.redirect_delay_ms, fallback.ui.redirect_delay_ms);
    }

    #[test]
    fn test_override_merges_single_keys() {
        let config = parse_config(Some(
            r#"
            [uploads]
            base_url = "https://cdn.menument.pt/uploads"
            "#,
        ))
        .unwrap();
        assert_eq!(config.uploads.base_url, "https://cdn.menument.pt/uploads");
        assert_eq!(config.api.base_url, "/api");
        assert_eq!(config.ui.redirect_delay_ms, 3000);
    }

    #[test]
    fn test_invalid_override_is_an_error() {
        assert!(parse_config(Some("[ui]\nalert_timeout_ms = \"soon\"")).is_err());
        assert!(parse_config(Some("not toml at all [")).is_err());
    }
}
