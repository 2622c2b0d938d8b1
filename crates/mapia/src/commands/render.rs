//! `mapia render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use mapia_config::{CliSettings, Config};
use mapia_posts::PostStore;
use mapia_sitemap::post_sitemap;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Path to configuration file (default: auto-discover mapia.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Public site base URL used in sitemap entries (overrides config).
    #[arg(long, env = "MAPIA_SITE_URL")]
    site_url: Option<String>,

    /// Write the sitemap to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output (fetch logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the posts cannot be fetched,
    /// a post cannot be rendered, or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            site_url: self.site_url,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let posts = super::build_store(&config).fetch_posts()?;
        let sitemap = post_sitemap(&config.site.url, &posts)?;
        let xml = sitemap.to_xml();

        if let Some(path) = &self.output {
            std::fs::write(path, &xml)?;
            output.success(&format!(
                "Wrote {} URLs to {}",
                sitemap.len(),
                path.display()
            ));
        } else {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(xml.as_bytes())?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
        }

        Ok(())
    }
}
