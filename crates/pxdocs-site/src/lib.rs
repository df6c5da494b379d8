//! Site configuration assembly for pxdocs.
//!
//! This crate provides:
//! - [`SiteConfig`]: the configuration object the static-site framework loads
//! - [`build_site_config`]: assembly from a loaded [`pxdocs_config::Config`]
//! - JSON output helpers
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use pxdocs_config::Config;
//! use pxdocs_site::{build_site_config, to_json};
//!
//! let site = build_site_config(&Config::default())?;
//! let sidebar = site.sidebar("/en/").unwrap();
//! assert!(sidebar.get("/en/config/").is_some());
//!
//! let json = to_json(&site, true)?;
//! assert!(json.contains("themeConfig"));
//! # Ok(())
//! # }
//! ```

mod builder;
mod site_config;

pub use builder::{SiteError, build_site_config, sidebar_labels, to_json, write_site_config};
pub use site_config::{
    AssetRuleOptions, AssetRuleSettings, HeadTag, MarkdownSettings, PostcssSettings, SiteConfig,
    SiteLocale, ThemeLocale, ThemeSettings, TocSettings,
};
