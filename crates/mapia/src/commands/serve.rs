//! `mapia serve` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use mapia_config::{CliSettings, Config};
use mapia_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover mapia.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Public site base URL used in sitemap entries (overrides config).
    #[arg(long, env = "MAPIA_SITE_URL")]
    site_url: Option<String>,

    /// Enable verbose output (request and fetch logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            site_url: self.site_url,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!("Site URL: {}", config.site.url));
        output.info(&format!(
            "Post store: {} (table: {})",
            config.store.url, config.store.table
        ));

        let store = Arc::new(super::build_store(&config));
        run_server(server_config_from_config(&config), store)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
