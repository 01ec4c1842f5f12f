use dotenvy::dotenv;
use log::error;
use serde::Deserialize;
use std::env;

const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// Placeholder shipped in the site's sample `.env`; treated as "no token".
pub const MAP_TOKEN_PLACEHOLDER: &str = "your_mapbox_access_token_here";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub sanity_project_id: String,
    pub sanity_dataset: String,
    pub sanity_api_version: String,
    pub sanity_use_cdn: bool,
    pub sanity_api_token: Option<String>,
    pub site_url: String,
    pub map_access_token: Option<String>,
    pub http_bind_address: Option<String>,
    pub request_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sanity_project_id: "uekmuuz9".to_string(),
            sanity_dataset: "production".to_string(),
            sanity_api_version: "2025-05-24".to_string(),
            sanity_use_cdn: true,
            sanity_api_token: None,
            site_url: "https://dar-al-khayma.com".to_string(),
            map_access_token: None,
            http_bind_address: None,
            request_timeout_seconds: 30,
        }
    }
}

impl Config {
    /// Site url without a trailing slash, ready for path concatenation.
    pub fn base_url(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }

    pub fn map_token(&self) -> Option<&str> {
        self.map_access_token
            .as_deref()
            .filter(|token| !token.trim().is_empty() && *token != MAP_TOKEN_PLACEHOLDER)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("SANITY_PROJECT_ID") {
            self.sanity_project_id = value;
        }
        if let Ok(value) = env::var("SANITY_DATASET") {
            self.sanity_dataset = value;
        }
        if let Ok(value) = env::var("SANITY_API_VERSION") {
            self.sanity_api_version = value;
        }
        if let Ok(value) = env::var("SANITY_API_TOKEN") {
            self.sanity_api_token = Some(value);
        }
        if let Ok(value) = env::var("SITE_URL") {
            self.site_url = value;
        }
        if let Ok(value) = env::var("MAPBOX_ACCESS_TOKEN") {
            self.map_access_token = Some(value);
        }
        if let Ok(value) = env::var("HTTP_BIND_ADDRESS") {
            self.http_bind_address = Some(value);
        }
    }
}

pub fn create_test_config() -> Config {
    Config {
        sanity_project_id: "test-project".to_string(),
        sanity_dataset: "test".to_string(),
        sanity_api_version: "2025-05-24".to_string(),
        sanity_use_cdn: false,
        sanity_api_token: Some("xxx".to_string()),
        site_url: "https://dar-al-khayma.com".to_string(),
        map_access_token: None,
        http_bind_address: None,
        request_timeout_seconds: 5,
    }
}

pub fn read_config() -> Config {
    dotenv().ok();
    let mut config = match env::var(CONFIG_PATH_ENV) {
        Ok(config_path) => std::fs::read(&config_path)
            .map_err(|e| format!("{config_path}: {e}"))
            .and_then(|bytes| toml::from_slice(&bytes).map_err(|e| e.to_string()))
            .unwrap_or_else(|err| {
                error!("failed to read config: {err}");
                std::process::exit(1);
            }),
        Err(_) => Config::default(),
    };
    config.apply_env_overrides();
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            sanity_dataset = "staging"
            site_url = "https://example.ma/"
            "#,
        )
        .unwrap();

        assert_eq!(config.sanity_dataset, "staging");
        assert_eq!(config.sanity_project_id, "uekmuuz9");
        assert_eq!(config.request_timeout_seconds, 30);
        assert_eq!(config.base_url(), "https://example.ma");
    }

    #[test]
    fn placeholder_map_token_counts_as_missing() {
        let mut config = create_test_config();
        assert_eq!(config.map_token(), None);

        config.map_access_token = Some(MAP_TOKEN_PLACEHOLDER.to_string());
        assert_eq!(config.map_token(), None);

        config.map_access_token = Some("pk.real".to_string());
        assert_eq!(config.map_token(), Some("pk.real"));
    }
}
