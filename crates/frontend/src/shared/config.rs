//! Application configuration
//!
//! Defaults are embedded in the bundle as TOML. The API base URLs can be
//! overridden at build time with `STOREFRONT_CATEGORY_API` and
//! `STOREFRONT_SIGNUP_API`.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub auth: AuthConfig,
    pub notice: NoticeConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the catalogue service (categories)
    pub category_base: String,
    /// Base URL of the account service (signup)
    pub signup_base: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// localStorage key holding the bearer token written by the login flow
    pub token_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NoticeConfig {
    pub timeout_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
category_base = "https://e-com-customizer.onrender.com/api/v1"
signup_base = "https://ecomm-backend-7g4k.onrender.com/api/v1"

[auth]
token_key = "token"

[notice]
timeout_ms = 3000
"#;

static CONFIG: Lazy<Config> = Lazy::new(|| {
    let mut config = load_config().expect("embedded default config must parse");
    config.apply_overrides(
        option_env!("STOREFRONT_CATEGORY_API"),
        option_env!("STOREFRONT_SIGNUP_API"),
    );
    log::debug!(
        "Using category API {} and signup API {}",
        config.api.category_base,
        config.api.signup_base
    );
    config
});

/// Parse the embedded default configuration
pub fn load_config() -> Result<Config, toml::de::Error> {
    toml::from_str(DEFAULT_CONFIG)
}

/// Global configuration, parsed on first access
pub fn config() -> &'static Config {
    &CONFIG
}

impl Config {
    /// Replace API base URLs with build-time values when they are set and non-empty
    pub fn apply_overrides(&mut self, category_base: Option<&str>, signup_base: Option<&str>) {
        if let Some(base) = category_base.filter(|b| !b.trim().is_empty()) {
            self.api.category_base = base.trim().to_string();
        }
        if let Some(base) = signup_base.filter(|b| !b.trim().is_empty()) {
            self.api.signup_base = base.trim().to_string();
        }
    }
}
