use shared_types::AppConfig;

/// `config.toml` at the workspace root, embedded at compile time.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Parse the embedded config, falling back to defaults when it is invalid.
/// `AGRI_API_URL` set at build time overrides the API base URL.
pub fn load_config() -> AppConfig {
    parse_config(CONFIG_TOML, option_env!("AGRI_API_URL"))
}

fn parse_config(raw: &str, base_url_override: Option<&str>) -> AppConfig {
    let config = toml::from_str::<AppConfig>(raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config.toml could not be parsed; using defaults");
        AppConfig::default()
    });
    tracing::info!(features = ?config.features, "loaded dashboard config");
    config.with_base_url_override(base_url_override)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::DEFAULT_API_BASE_URL;

    #[test]
    fn embedded_config_parses() {
        let config = toml::from_str::<AppConfig>(CONFIG_TOML).unwrap();
        assert!(config.features.registration);
        assert!(config.features.analytics);
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let config = parse_config("[api\nbase_url = ", None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn override_wins_over_file() {
        let config = parse_config(
            "[api]\nbase_url = \"http://file.test\"\n",
            Some("https://override.test/api/"),
        );
        assert_eq!(config.api.base_url, "https://override.test/api");
        let config = parse_config("", None);
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    }
}
