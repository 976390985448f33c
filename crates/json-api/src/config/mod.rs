//! Server configuration module

use clap::Parser;

use crate::config::{
    logging::LoggingConfig, segments::SegmentsConfig, server::ServerRuntimeConfig,
};

pub(crate) mod logging;
pub(crate) mod segments;
pub(crate) mod server;

/// Mensa JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "mensa-json", about = "Mensa offer service JSON API", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// User-segment service settings.
    #[command(flatten)]
    pub segments: SegmentsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
