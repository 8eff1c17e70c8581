//! Framework configuration. [Application](crate::application::Application) uses the
//! [ApplicationConfig] to configure itself.
//!
//! By default, the config is created with opinionated default values, which can then be overwritten
//! by environment variables prefixed with `IOC_` or `ioc.json` file.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const CONFIG_ENV_PREFIX: &str = "IOC";

/// Name of the default config file.
pub const CONFIG_FILE: &str = "ioc.json";

/// Filter used for the default tracing logger.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Framework configuration.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApplicationConfig {
    /// Should a default tracing logger be installed in the scope of the application.
    pub install_tracing_logger: bool,
    /// Filter directives for the default tracing logger, in the `RUST_LOG` format.
    pub log_filter: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            install_tracing_logger: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl From<OptionalApplicationConfig> for ApplicationConfig {
    fn from(value: OptionalApplicationConfig) -> Self {
        let default = Self::default();
        Self {
            install_tracing_logger: value
                .install_tracing_logger
                .unwrap_or(default.install_tracing_logger),
            log_filter: value.log_filter.unwrap_or(default.log_filter),
        }
    }
}

impl ApplicationConfig {
    /// Loads the config from the default config file and environment, falling back to defaults for
    /// missing values.
    pub fn init_from_environment() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(CONFIG_ENV_PREFIX))
            .build()
            .and_then(|config| config.try_deserialize::<OptionalApplicationConfig>())
            .map(|config| config.into())
    }
}

#[derive(Deserialize, Default)]
struct OptionalApplicationConfig {
    install_tracing_logger: Option<bool>,
    log_filter: Option<String>,
}
