//! Site framework configuration object.
//!
//! Mirrors the object the static-site framework loads at startup. Field
//! names serialize in the framework's camelCase convention, and every
//! prefix-keyed map keeps declaration order.

use std::collections::BTreeMap;

use pxdocs_sidebar::LocaleSidebar;
use serde::{Serialize, Serializer};

/// Complete site configuration consumed by the site framework.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Page metadata per locale prefix.
    #[serde(serialize_with = "ordered_map")]
    pub locales: Vec<(String, SiteLocale)>,
    /// Extra `<head>` tags.
    pub head: Vec<HeadTag>,
    /// Theme settings.
    pub theme_config: ThemeSettings,
    /// Site framework plugins.
    pub plugins: Vec<String>,
    /// Additional files watched in dev mode.
    pub extra_watch_files: Vec<String>,
    /// `PostCSS` settings.
    pub postcss: PostcssSettings,
    /// Markdown settings.
    pub markdown: MarkdownSettings,
    /// Rules the bundler hook registers.
    pub asset_rules: Vec<AssetRuleSettings>,
}

impl SiteConfig {
    /// Sidebar map of a locale.
    #[must_use]
    pub fn sidebar(&self, prefix: &str) -> Option<&LocaleSidebar> {
        self.theme_config
            .locales
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, locale)| &locale.sidebar)
    }
}

/// Page metadata of one locale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteLocale {
    /// Language tag (`lang` attribute of the pages).
    pub lang: String,
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
}

/// `<head>` tag serialized as `[tag, attributes]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeadTag(pub String, pub BTreeMap<String, String>);

impl HeadTag {
    /// Favicon link tag.
    #[must_use]
    pub fn icon(href: &str) -> Self {
        let attrs = BTreeMap::from([
            ("rel".to_owned(), "icon".to_owned()),
            ("href".to_owned(), href.to_owned()),
        ]);
        Self("link".to_owned(), attrs)
    }
}

/// Theme settings.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    /// Smooth scrolling for in-page anchors.
    pub smooth_scroll: bool,
    /// Show the light/dark theme switch.
    pub theme_change: bool,
    /// Repository hosting the sources, omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_repo: Option<String>,
    /// Documentation directory inside the repository.
    pub docs_dir: String,
    /// Branch edit links point to.
    pub docs_branch: String,
    /// Show "edit this page" links.
    pub edit_links: bool,
    /// UI strings, nav bar and sidebars per locale prefix.
    #[serde(serialize_with = "ordered_map")]
    pub locales: Vec<(String, ThemeLocale)>,
}

/// Theme settings of one locale.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeLocale {
    /// Name shown in the language picker.
    pub label: String,
    /// Language picker button text.
    pub select_text: String,
    /// Accessible label of the language picker.
    pub aria_label: String,
    /// Text of the "edit this page" link.
    pub edit_link_text: String,
    /// Label preceding the last-updated timestamp.
    pub last_updated: String,
    /// Tooltip of the light/dark theme switch.
    pub theme_change_text: String,
    /// Navigation bar, passed through from its definition file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav: Option<serde_json::Value>,
    /// Sidebar trees keyed by route prefix.
    pub sidebar: LocaleSidebar,
}

/// `PostCSS` settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostcssSettings {
    /// `PostCSS` plugin names.
    pub plugins: Vec<String>,
}

/// Markdown settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MarkdownSettings {
    /// Table of contents settings.
    pub toc: TocSettings,
    /// markdown-it plugin names.
    pub plugins: Vec<String>,
}

/// Table of contents settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TocSettings {
    /// Heading levels listed in the table of contents.
    pub include_level: Vec<u8>,
}

/// Asset rule as registered with the bundler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AssetRuleSettings {
    /// Rule name.
    pub name: String,
    /// Regular expression matched against request paths.
    pub test: String,
    /// Bundler loader handling matched files.
    pub loader: String,
    /// Loader options.
    pub options: AssetRuleOptions,
}

/// Loader options of an asset rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AssetRuleOptions {
    /// Output file name template.
    pub name: String,
}

/// Serialize `(key, value)` pairs as a map in their given order.
fn ordered_map<T, S>(entries: &[(String, T)], serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    serializer.collect_map(entries.iter().map(|(k, v)| (k, v)))
}
