//! Per-locale configuration.
//!
//! Each `[[locales]]` table carries the page metadata, theme UI strings and
//! sidebar group labels of one language. The defaults reproduce the two
//! locales of the Project X documentation: Simplified Chinese at `/` and
//! English at `/en/`.

use std::path::PathBuf;

use serde::Deserialize;

/// Configuration of one locale.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LocaleConfig {
    /// URL prefix of the locale (e.g. `/` or `/en/`).
    pub prefix: String,
    /// Language tag of the rendered pages.
    pub lang: String,
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
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
    /// Navigation bar definition file (JSON), relative to the config file.
    pub nav: Option<String>,
    /// Group labels of the configuration-reference sidebar.
    pub sidebar: SidebarLabelsConfig,

    /// Resolved navigation bar file path (set after loading).
    #[serde(skip)]
    pub nav_path: Option<PathBuf>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::english("/")
    }
}

impl LocaleConfig {
    /// Simplified Chinese locale at the given prefix.
    #[must_use]
    pub fn chinese(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_owned(),
            lang: "zh-CN".to_owned(),
            title: "Project X".to_owned(),
            description: "Xray 官方文档".to_owned(),
            label: "简体中文".to_owned(),
            select_text: "选择语言".to_owned(),
            aria_label: "选择语言".to_owned(),
            edit_link_text: "帮助我们改善此页面！".to_owned(),
            last_updated: "上次更新".to_owned(),
            theme_change_text: "切换主题".to_owned(),
            nav: None,
            sidebar: SidebarLabelsConfig {
                feature: "特性详解".to_owned(),
                config: "基础配置".to_owned(),
                inbound: "入站代理".to_owned(),
                outbound: "出站代理".to_owned(),
                transport: "底层传输".to_owned(),
            },
            nav_path: None,
        }
    }

    /// English locale at the given prefix.
    #[must_use]
    pub fn english(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_owned(),
            lang: "en-US".to_owned(),
            title: "Project X".to_owned(),
            description: "Xray official documentation".to_owned(),
            label: "English".to_owned(),
            select_text: "Languages".to_owned(),
            aria_label: "Select language".to_owned(),
            edit_link_text: "Help us improve this page!".to_owned(),
            last_updated: "Last Updated".to_owned(),
            theme_change_text: "Switch themes".to_owned(),
            nav: None,
            sidebar: SidebarLabelsConfig::default(),
            nav_path: None,
        }
    }

    /// Whether the prefix starts and ends with `/`.
    #[must_use]
    pub fn has_well_formed_prefix(&self) -> bool {
        self.prefix.starts_with('/') && self.prefix.ends_with('/')
    }
}

/// Group labels of the configuration-reference sidebar.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SidebarLabelsConfig {
    /// Title of the collapsable feature-details group.
    pub feature: String,
    /// Title of the basic-configuration group.
    pub config: String,
    /// Title of the inbound-protocols group.
    pub inbound: String,
    /// Title of the outbound-protocols group.
    pub outbound: String,
    /// Title of the transports group.
    pub transport: String,
}

impl Default for SidebarLabelsConfig {
    fn default() -> Self {
        Self {
            feature: "Feature Details".to_owned(),
            config: "Basic Config".to_owned(),
            inbound: "Inbounds".to_owned(),
            outbound: "Outbounds".to_owned(),
            transport: "Transport".to_owned(),
        }
    }
}

impl SidebarLabelsConfig {
    /// Labels paired with their config field names, in sidebar order.
    pub(crate) fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("feature", self.feature.as_str()),
            ("config", self.config.as_str()),
            ("inbound", self.inbound.as_str()),
            ("outbound", self.outbound.as_str()),
            ("transport", self.transport.as_str()),
        ]
    }
}

/// Locales of the Project X documentation.
pub(crate) fn default_locales() -> Vec<LocaleConfig> {
    vec![LocaleConfig::chinese("/"), LocaleConfig::english("/en/")]
}
