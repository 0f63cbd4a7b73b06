//! Configuration management for the search proxy
//!
//! Every Agoda domain constant (locale, currency, platform IDs, sort policy,
//! price attributes) lives here rather than inline in the query builder, so
//! the translation logic stays parametric over a single injected structure.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Transport-level settings for the upstream GraphQL endpoint.
///
/// Header values are fixed per deployment and never vary per request.
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub endpoint: String,
    pub origin: String,
    pub referer: String,
    pub language_locale: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
}

/// Domain constants embedded into every upstream query.
#[derive(Debug, Deserialize, Clone)]
pub struct AgodaConstants {
    pub locale: String,
    pub currency: String,
    pub origin_country: String,
    pub platform_id: i64,
    pub storefront_id: i64,
    pub device_type_id: i64,
    pub sort_field: String,
    pub sort_order: String,
    pub page_size: i64,
    pub price_attribute_ids: Vec<i64>,
}

/// Fallback search parameters applied when the caller omits them.
#[derive(Debug, Deserialize, Clone)]
pub struct SearchDefaults {
    pub city_id: i64,
    pub checkin: String,
    pub checkout: String,
    pub adults: u32,
    pub rooms: u32,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub agoda: AgodaConstants,
    #[serde(default)]
    pub defaults: SearchDefaults,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration (optional, compiled-in defaults apply)
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix AGODA_PROXY_)
            .add_source(
                Environment::with_prefix("AGODA_PROXY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://www.agoda.com/graphql/search".to_string(),
            origin: "https://www.agoda.com".to_string(),
            referer: "https://www.agoda.com/".to_string(),
            language_locale: "en-us".to_string(),
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                .to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Default for AgodaConstants {
    fn default() -> Self {
        Self {
            locale: "en-us".to_string(),
            currency: "INR".to_string(),
            origin_country: "IN".to_string(),
            platform_id: 1001,
            storefront_id: 3,
            device_type_id: 1,
            sort_field: "Recommended".to_string(),
            sort_order: "Desc".to_string(),
            page_size: 50,
            price_attribute_ids: vec![8, 1, 18, 7, 11, 2, 3],
        }
    }
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            city_id: 9395,
            checkin: "2025-11-19".to_string(),
            checkout: "2025-11-20".to_string(),
            adults: 2,
            rooms: 1,
        }
    }
}
