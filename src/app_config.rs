use crate::catalog::IPSW_ME_API;
use crate::log_level_deserializer::log_level;
use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::time::Duration;
use tracing::Level;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    catalog: Catalog,
}

impl AppConfig {
    /// Layers built-in defaults, `config.toml`, `config_local.toml` and `IPSW_*` environment
    /// variables, e.g. `IPSW_CATALOG__URL`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(environment())
    }

    fn load_with(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("core.log_level", "info")?
            .set_default("catalog.url", IPSW_ME_API)?
            .set_default("catalog.timeout", "30s")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    pub fn with_catalog_url(mut self, url: String) -> Self {
        self.catalog.url = url;
        self
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

fn environment() -> Environment {
    Environment::with_prefix("IPSW").prefix_separator("_").separator("__")
}

#[derive(Debug, Deserialize)]
pub struct Core {
    #[serde(deserialize_with = "log_level")]
    log_level: Level,
}

impl Core {
    pub fn log_level(&self) -> Level {
        self.log_level
    }
}

#[derive(Debug, Deserialize)]
pub struct Catalog {
    url: String,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
}

impl Catalog {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core { log_level: Level::INFO },
                catalog: Catalog {
                    url: IPSW_ME_API.to_string(),
                    timeout: Duration::from_secs(5),
                },
            },
        }
    }

    pub fn catalog_url(mut self, url: String) -> Self {
        self.config.catalog.url = url;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.catalog.timeout = timeout;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
