//! CLI runner - fetches and prints gists

use crate::cli::commands::{Cli, OutputFormat};
use crate::config::FetchConfig;
use crate::error::Result;
use crate::gists::{Credential, GistFetcher, TracingObserver};
use crate::types::Gist;
use std::fs;
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let credential = Credential::from_option(self.cli.token.as_deref())?;
        let config = self.fetch_config()?;

        let mut fetcher = GistFetcher::from_config(config)?;
        if self.cli.verbose {
            fetcher = fetcher.with_observer(Arc::new(TracingObserver));
        }

        let start = Instant::now();
        let gists = fetcher.fetch_all_with(&credential).await?;
        info!(
            "Fetched {} gists in {:.2}s",
            gists.len(),
            start.elapsed().as_secs_f64()
        );

        let rendered = render(&gists, self.cli.format)?;
        match &self.cli.output {
            Some(path) => {
                fs::write(path, rendered)?;
                info!("Wrote gists to {}", path.display());
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(rendered.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }

    /// Resolve the configuration: file first, then command-line overrides
    pub fn fetch_config(&self) -> Result<FetchConfig> {
        let mut config = match &self.cli.config {
            Some(path) => FetchConfig::from_file(path)?,
            None => FetchConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(location) = self.cli.auth {
            config.auth_location = location;
        }
        if let Some(per_page) = self.cli.per_page {
            config.per_page = per_page;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Render gists in the requested format, newline-terminated
pub fn render(gists: &[Gist], format: OutputFormat) -> Result<String> {
    let mut out = match format {
        OutputFormat::Json => serde_json::to_string(gists)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(gists)?,
        OutputFormat::Count => gists.len().to_string(),
        OutputFormat::Ids => gists
            .iter()
            .filter_map(|g| g.get("id").and_then(|id| id.as_str()))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    out.push('\n');
    Ok(out)
}
