//! `pxdocs sidebar` command implementation.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use pxdocs_config::Config;
use pxdocs_sidebar::{LocaleSidebar, NavEntry, SidebarSpec, build_locale_sidebar};
use pxdocs_site::sidebar_labels;

use crate::error::CliError;
use crate::output::Output;

/// Sidebar output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum SidebarFormat {
    /// Indented outline.
    #[default]
    Tree,
    /// JSON as emitted in the site configuration.
    Json,
}

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Path to configuration file (default: auto-discover pxdocs.toml).
    #[arg(short, long, env = "PXDOCS_CONFIG")]
    config: Option<PathBuf>,

    /// Locale prefix to show (default: first configured locale).
    #[arg(short, long)]
    locale: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: SidebarFormat,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the locale is unknown.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;

        let locale = match self.locale.as_deref() {
            Some(prefix) => config.locale(prefix).ok_or_else(|| {
                let known: Vec<_> = config.locales.iter().map(|l| l.prefix.as_str()).collect();
                CliError::Validation(format!(
                    "Unknown locale {prefix:?} (configured: {})",
                    known.join(", ")
                ))
            })?,
            None => config
                .locales
                .first()
                .ok_or_else(|| CliError::Validation("No locales configured".to_owned()))?,
        };

        let sidebar = build_locale_sidebar(&locale.prefix, &sidebar_labels(&locale.sidebar));

        let rendered = match self.format {
            SidebarFormat::Tree => render_tree(&sidebar),
            SidebarFormat::Json => serde_json::to_string_pretty(&sidebar)
                .map_err(|e| CliError::Validation(e.to_string()))?,
        };
        output.data(&rendered)?;

        Ok(())
    }
}

/// Render a locale's sidebars as an indented outline.
fn render_tree(sidebar: &LocaleSidebar) -> String {
    let mut out = String::new();
    for (prefix, spec) in sidebar.iter() {
        match spec {
            SidebarSpec::Auto => {
                let _ = writeln!(out, "{prefix} (auto)");
            }
            SidebarSpec::Entries(entries) => {
                let _ = writeln!(out, "{prefix}");
                render_entries(&mut out, entries, 1);
            }
        }
    }
    out
}

fn render_entries(out: &mut String, entries: &[NavEntry], depth: usize) {
    let indent = "  ".repeat(depth);
    for entry in entries {
        match entry {
            NavEntry::Leaf(path) => {
                let _ = writeln!(out, "{indent}- {path}");
            }
            NavEntry::Group(node) => {
                let title = node.title.as_deref().unwrap_or("(untitled)");
                let _ = write!(out, "{indent}+ {title}");
                if let Some(base) = &node.base_path {
                    let _ = write!(out, " [{base}]");
                }
                if node.collapsable {
                    let _ = write!(out, " (collapsable)");
                }
                out.push('\n');
                render_entries(out, &node.children, depth + 1);
            }
        }
    }
}
