use serde::{Deserialize, Serialize};

/// Base URL used when `config.toml` has no `[api]` section.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn enabled() -> bool {
    true
}

/// Feature flags controlling optional dashboard surfaces.
///
/// Loaded from `config.toml` when the app starts. Every field defaults to
/// `true` so a missing or incomplete config file keeps the full dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Self-service farmer registration from the login screen.
    #[serde(default = "enabled")]
    pub registration: bool,
    /// Analytics page for admin and government roles.
    #[serde(default = "enabled")]
    pub analytics: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            registration: true,
            analytics: true,
        }
    }
}

/// Where the remote API lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Replace the base URL when an override is present and non-blank.
    /// A trailing slash is dropped so paths can be appended directly.
    pub fn with_base_url_override(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        while self.api.base_url.ends_with('/') {
            self.api.base_url.pop();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_enabled() {
        let flags = FeatureFlags::default();
        assert!(flags.registration);
        assert!(flags.analytics);
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            analytics = false
            "#,
        )
        .unwrap();
        assert!(!config.features.analytics);
        assert!(config.features.registration);
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn deserialize_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://api.cropcover.example/v1"

            [features]
            registration = false
            analytics = false
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.cropcover.example/v1");
        assert!(!config.features.registration);
        assert!(!config.features.analytics);
    }

    #[test]
    fn base_url_override() {
        let config = AppConfig::default().with_base_url_override(Some("https://x.test/api/"));
        assert_eq!(config.api.base_url, "https://x.test/api");

        let config = AppConfig::default().with_base_url_override(Some("  "));
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);

        let config = AppConfig::default().with_base_url_override(None);
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }
}
