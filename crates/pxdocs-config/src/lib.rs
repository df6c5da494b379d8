//! Configuration management for pxdocs.
//!
//! Parses `pxdocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Every section has
//! defaults that reproduce the Project X documentation site, so an empty
//! file (or no file at all) yields the full two-locale configuration.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `theme.docs_repo`
//! - `theme.docs_branch`
//! - `output.path`

mod expand;
mod locale;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Deserializer};

pub use locale::{LocaleConfig, SidebarLabelsConfig};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override output file path.
    pub output: Option<PathBuf>,
    /// Override pretty-printing of the emitted JSON.
    pub pretty: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "pxdocs.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Head tag configuration.
    pub head: HeadConfig,
    /// Theme configuration shared by all locales.
    pub theme: ThemeConfig,
    /// Locales in declaration order. The first one is the default locale.
    pub locales: Vec<LocaleConfig>,
    /// Site framework plugins.
    pub plugins: Vec<String>,
    /// Additional files the site framework watches in dev mode.
    pub extra_watch_files: Vec<String>,
    /// `PostCSS` configuration.
    pub postcss: PostcssConfig,
    /// Markdown configuration.
    pub markdown: MarkdownConfig,
    /// Asset loader rules.
    pub assets: Vec<AssetRule>,
    /// Output configuration (paths are relative strings from TOML).
    output: OutputConfigRaw,

    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            head: HeadConfig::default(),
            theme: ThemeConfig::default(),
            locales: locale::default_locales(),
            plugins: vec![
                "@vuepress/back-to-top".to_owned(),
                "vuepress-plugin-mermaidjs".to_owned(),
            ],
            extra_watch_files: vec![
                ".vuepress/nav/en.js".to_owned(),
                ".vuepress/nav/zh.js".to_owned(),
            ],
            postcss: PostcssConfig::default(),
            markdown: MarkdownConfig::default(),
            assets: default_assets(),
            output: OutputConfigRaw::default(),
            output_resolved: OutputConfig::default(),
            config_path: None,
        }
    }
}

/// Head tag configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HeadConfig {
    /// Favicon URL. An empty string in TOML removes the favicon tag.
    #[serde(deserialize_with = "empty_as_none")]
    pub icon: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

impl Default for HeadConfig {
    fn default() -> Self {
        Self {
            icon: Some("/logo.png".to_owned()),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Smooth scrolling for in-page anchors.
    pub smooth_scroll: bool,
    /// Show the light/dark theme switch.
    pub theme_change: bool,
    /// Repository hosting the documentation sources (`owner/name`).
    pub docs_repo: Option<String>,
    /// Documentation directory inside the repository.
    pub docs_dir: String,
    /// Branch edit links point to.
    pub docs_branch: String,
    /// Show "edit this page" links.
    pub edit_links: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            smooth_scroll: true,
            theme_change: true,
            docs_repo: Some("xtls/Xray-docs-next".to_owned()),
            docs_dir: "docs".to_owned(),
            docs_branch: "main".to_owned(),
            edit_links: true,
        }
    }
}

/// `PostCSS` configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PostcssConfig {
    /// `PostCSS` plugin packages.
    pub plugins: Vec<String>,
}

impl Default for PostcssConfig {
    fn default() -> Self {
        Self {
            plugins: vec!["autoprefixer".to_owned()],
        }
    }
}

/// Markdown configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Heading levels included in the table of contents.
    pub toc_levels: Vec<u8>,
    /// Markdown parser plugins.
    pub plugins: Vec<String>,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            toc_levels: vec![2],
            plugins: vec!["markdown-it-footnote".to_owned()],
        }
    }
}

/// Asset loader rule registered with the site bundler.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AssetRule {
    /// Rule name.
    pub name: String,
    /// Regular expression matched against requested file paths.
    pub test: String,
    /// Loader handling matched files.
    pub loader: String,
    /// Output file name template.
    pub output_name: String,
}

impl AssetRule {
    /// Rule emitting `.webp` images under `assets/img/` with a content hash.
    #[must_use]
    pub fn webp() -> Self {
        Self {
            name: "webp".to_owned(),
            test: r"\.(webp)(\?.*)?$".to_owned(),
            loader: "file-loader".to_owned(),
            output_name: "assets/img/[name].[hash:8].[ext]".to_owned(),
        }
    }

    /// Compile the `test` pattern.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the pattern is not a valid regex.
    pub fn pattern(&self) -> Result<Regex, ConfigError> {
        Regex::new(&self.test).map_err(|e| {
            ConfigError::Validation(format!("assets.{}.test is not a valid regex: {e}", self.name))
        })
    }
}

fn default_assets() -> Vec<AssetRule> {
    vec![AssetRule::webp()]
}

/// Raw output configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    path: Option<String>,
    pretty: Option<bool>,
}

/// Resolved output configuration with absolute paths.
#[derive(Debug)]
pub struct OutputConfig {
    /// File to write the site configuration to. `None` writes to stdout.
    pub path: Option<PathBuf>,
    /// Pretty-print the emitted JSON.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            pretty: true,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`theme.docs_repo`").
        field: String,
        /// Error message (e.g., "${`DOCS_REPO`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `pxdocs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(output) = &settings.output {
            self.output_resolved.path = Some(output.clone());
        }
        if let Some(pretty) = settings.pretty {
            self.output_resolved.pretty = pretty;
        }
    }

    /// Locale registered for an exact URL prefix.
    #[must_use]
    pub fn locale(&self, prefix: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|l| l.prefix == prefix)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            locales = config.locales.len(),
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_locales()?;
        self.validate_markdown()?;
        self.validate_assets()?;
        Ok(())
    }

    /// Validate locale configuration.
    ///
    /// Prefixes without surrounding slashes are accepted: they only produce
    /// odd sidebar paths, so they are reported as warnings.
    fn validate_locales(&self) -> Result<(), ConfigError> {
        if self.locales.is_empty() {
            return Err(ConfigError::Validation(
                "at least one [[locales]] entry is required".to_owned(),
            ));
        }

        let mut seen = HashSet::new();
        for locale in &self.locales {
            require_non_empty(&locale.prefix, "locales.prefix")?;
            if !seen.insert(locale.prefix.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate locale prefix {:?}",
                    locale.prefix
                )));
            }
            require_non_empty(&locale.lang, &format!("locales.{}.lang", locale.prefix))?;
            for (name, label) in locale.sidebar.fields() {
                require_non_empty(label, &format!("locales.{}.sidebar.{name}", locale.prefix))?;
            }
            if !locale.has_well_formed_prefix() {
                tracing::warn!(
                    prefix = %locale.prefix,
                    "Locale prefix should start and end with '/'; sidebar paths are concatenated as-is"
                );
            }
        }

        Ok(())
    }

    /// Validate markdown configuration.
    fn validate_markdown(&self) -> Result<(), ConfigError> {
        if let Some(level) = self
            .markdown
            .toc_levels
            .iter()
            .find(|level| !(1..=6).contains(*level))
        {
            return Err(ConfigError::Validation(format!(
                "markdown.toc_levels must be between 1 and 6, got {level}"
            )));
        }
        Ok(())
    }

    /// Validate asset rules.
    fn validate_assets(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for rule in &self.assets {
            require_non_empty(&rule.name, "assets.name")?;
            if !seen.insert(rule.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate asset rule {:?}",
                    rule.name
                )));
            }
            require_non_empty(&rule.loader, &format!("assets.{}.loader", rule.name))?;
            require_non_empty(&rule.output_name, &format!("assets.{}.output_name", rule.name))?;
            rule.pattern()?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_opt(&mut self.theme.docs_repo, "theme.docs_repo")?;
        self.theme.docs_branch = expand::expand_env(&self.theme.docs_branch, "theme.docs_branch")?;
        expand::expand_opt(&mut self.output.path, "output.path")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        for locale in &mut self.locales {
            locale.nav_path = locale.nav.as_deref().map(|nav| config_dir.join(nav));
        }

        self.output_resolved = OutputConfig {
            path: self.output.path.as_deref().map(|p| config_dir.join(p)),
            pretty: self.output.pretty.unwrap_or(true),
        };
    }
}
