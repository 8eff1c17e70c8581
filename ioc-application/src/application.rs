//! Core application framework functionality.

use crate::config::ApplicationConfig;
use config::ConfigError;
use derive_more::Constructor;
use ioc_container::context::{application_context, ApplicationContext};
use ioc_container::ContainerError;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Error loading configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Error initializing container: {0}")]
    Container(#[from] ContainerError),
}

/// Creates an [Application] bound to the process-wide context, with configuration loaded from the
/// environment.
pub fn create_default() -> Result<Application<'static>, ApplicationError> {
    let config = ApplicationConfig::init_from_environment()?;
    Ok(Application::new(application_context(), config))
}

/// Main entrypoint for the application. Bootstraps the application and initializes the
/// [ApplicationContext].
#[derive(Constructor)]
pub struct Application<'a> {
    context: &'a ApplicationContext,
    config: ApplicationConfig,
}

impl<'a> Application<'a> {
    /// Installs the tracing logger, if configured, and initializes the context. Returns the ready
    /// context on success.
    pub fn run(&self) -> Result<&'a ApplicationContext, ApplicationError> {
        if self.config.install_tracing_logger {
            self.install_tracing_logger();
        }

        info!("Initializing application context...");

        self.context.init()?;

        info!("Application context ready.");
        Ok(self.context)
    }

    /// Returns the configuration used by this application.
    pub fn config(&self) -> &ApplicationConfig {
        &self.config
    }

    fn install_tracing_logger(&self) {
        // a logger installed by the host takes precedence
        if let Err(error) = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(&self.config.log_filter))
            .try_init()
        {
            debug!(%error, "Tracing logger not installed.");
        }
    }
}
