//! Assembly of [`SiteConfig`] from a loaded [`Config`].
//!
//! Sidebars are rebuilt from scratch on every call. Navigation bars are
//! defined outside this crate: each locale may point at a JSON file whose
//! content is passed through untouched.

use std::path::{Path, PathBuf};

use pxdocs_config::{AssetRule, Config, LocaleConfig, SidebarLabelsConfig};
use pxdocs_sidebar::{SidebarLabels, build_locale_sidebar};

use crate::site_config::{
    AssetRuleOptions, AssetRuleSettings, HeadTag, MarkdownSettings, PostcssSettings, SiteConfig,
    SiteLocale, ThemeLocale, ThemeSettings, TocSettings,
};

/// Error returned when the site configuration cannot be assembled or written.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Navigation bar file could not be read.
    #[error("Failed to read nav file {}: {source}", .path.display())]
    NavRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Navigation bar file is not valid JSON.
    #[error("Invalid nav file {}: {source}", .path.display())]
    NavParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Serialization of the site configuration failed.
    #[error("Failed to serialize site configuration: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Output file could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Build the site framework configuration.
///
/// # Errors
///
/// Returns [`SiteError::NavRead`] or [`SiteError::NavParse`] if a locale's
/// navigation bar file is missing or malformed.
pub fn build_site_config(config: &Config) -> Result<SiteConfig, SiteError> {
    let mut theme_locales = Vec::with_capacity(config.locales.len());
    for locale in &config.locales {
        theme_locales.push((locale.prefix.clone(), build_theme_locale(locale)?));
    }

    let site = SiteConfig {
        locales: config
            .locales
            .iter()
            .map(|locale| (locale.prefix.clone(), site_locale(locale)))
            .collect(),
        head: config
            .head
            .icon
            .as_deref()
            .filter(|icon| !icon.is_empty())
            .map(HeadTag::icon)
            .into_iter()
            .collect(),
        theme_config: ThemeSettings {
            smooth_scroll: config.theme.smooth_scroll,
            theme_change: config.theme.theme_change,
            docs_repo: config.theme.docs_repo.clone(),
            docs_dir: config.theme.docs_dir.clone(),
            docs_branch: config.theme.docs_branch.clone(),
            edit_links: config.theme.edit_links,
            locales: theme_locales,
        },
        plugins: config.plugins.clone(),
        extra_watch_files: watch_files(config),
        postcss: PostcssSettings {
            plugins: config.postcss.plugins.clone(),
        },
        markdown: MarkdownSettings {
            toc: TocSettings {
                include_level: config.markdown.toc_levels.clone(),
            },
            plugins: config.markdown.plugins.clone(),
        },
        asset_rules: config.assets.iter().map(asset_rule).collect(),
    };

    tracing::debug!(
        locales = site.locales.len(),
        asset_rules = site.asset_rules.len(),
        "Built site configuration"
    );

    Ok(site)
}

fn site_locale(locale: &LocaleConfig) -> SiteLocale {
    SiteLocale {
        lang: locale.lang.clone(),
        title: locale.title.clone(),
        description: locale.description.clone(),
    }
}

fn build_theme_locale(locale: &LocaleConfig) -> Result<ThemeLocale, SiteError> {
    let nav = locale.nav_path.as_deref().map(load_nav).transpose()?;
    let sidebar = build_locale_sidebar(&locale.prefix, &sidebar_labels(&locale.sidebar));

    tracing::debug!(
        prefix = %locale.prefix,
        routes = sidebar.len(),
        has_nav = nav.is_some(),
        "Built locale sidebar"
    );

    Ok(ThemeLocale {
        label: locale.label.clone(),
        select_text: locale.select_text.clone(),
        aria_label: locale.aria_label.clone(),
        edit_link_text: locale.edit_link_text.clone(),
        last_updated: locale.last_updated.clone(),
        theme_change_text: locale.theme_change_text.clone(),
        nav,
        sidebar,
    })
}

/// Convert configured labels into sidebar builder labels.
pub fn sidebar_labels(labels: &SidebarLabelsConfig) -> SidebarLabels {
    SidebarLabels {
        feature: labels.feature.clone(),
        config: labels.config.clone(),
        inbound: labels.inbound.clone(),
        outbound: labels.outbound.clone(),
        transport: labels.transport.clone(),
    }
}

/// Load a navigation bar definition.
fn load_nav(path: &Path) -> Result<serde_json::Value, SiteError> {
    let content = std::fs::read_to_string(path).map_err(|source| SiteError::NavRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| SiteError::NavParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Configured watch files followed by each locale's nav file, without repeats.
fn watch_files(config: &Config) -> Vec<String> {
    let mut files = config.extra_watch_files.clone();
    for nav in config.locales.iter().filter_map(|l| l.nav.as_ref()) {
        if !files.contains(nav) {
            files.push(nav.clone());
        }
    }
    files
}

fn asset_rule(rule: &AssetRule) -> AssetRuleSettings {
    AssetRuleSettings {
        name: rule.name.clone(),
        test: rule.test.clone(),
        loader: rule.loader.clone(),
        options: AssetRuleOptions {
            name: rule.output_name.clone(),
        },
    }
}

/// Serialize the site configuration to JSON.
///
/// # Errors
///
/// Returns [`SiteError::Serialize`] if serialization fails.
pub fn to_json(site: &SiteConfig, pretty: bool) -> Result<String, SiteError> {
    let json = if pretty {
        serde_json::to_string_pretty(site)?
    } else {
        serde_json::to_string(site)?
    };
    Ok(json)
}

/// Write the site configuration to a file, creating parent directories.
///
/// # Errors
///
/// Returns [`SiteError::Write`] if the file cannot be written.
pub fn write_site_config(site: &SiteConfig, path: &Path, pretty: bool) -> Result<(), SiteError> {
    let mut json = to_json(site, pretty)?;
    json.push('\n');

    let write_err = |source| SiteError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, json).map_err(write_err)?;

    tracing::info!(path = %path.display(), "Wrote site configuration");
    Ok(())
}
