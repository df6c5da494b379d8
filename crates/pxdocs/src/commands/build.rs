//! `pxdocs build` command implementation.

use std::path::PathBuf;

use clap::Args;
use pxdocs_config::{CliSettings, Config};
use pxdocs_site::{build_site_config, to_json, write_site_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover pxdocs.toml).
    #[arg(short, long, env = "PXDOCS_CONFIG")]
    config: Option<PathBuf>,

    /// Output file (overrides config, default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON (default: enabled).
    #[arg(long)]
    pretty: Option<bool>,

    /// Emit compact JSON.
    #[arg(long, conflicts_with = "pretty")]
    compact: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, a nav file cannot be loaded,
    /// or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            pretty: self.resolve_pretty(),
            output: self.output,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Configuration: {}", path.display()));
        } else {
            output.warning("No pxdocs.toml found, using built-in defaults");
        }

        let site = build_site_config(&config)?;
        let pretty = config.output_resolved.pretty;

        match &config.output_resolved.path {
            Some(path) => {
                write_site_config(&site, path, pretty)?;
                output.success(&format!(
                    "Wrote site configuration for {} locale(s) to {}",
                    site.locales.len(),
                    path.display()
                ));
            }
            None => output.data(&to_json(&site, pretty)?)?,
        }

        Ok(())
    }

    /// Resolve `pretty` from --pretty/--compact flags.
    fn resolve_pretty(&self) -> Option<bool> {
        self.compact.then_some(false).or(self.pretty)
    }
}
