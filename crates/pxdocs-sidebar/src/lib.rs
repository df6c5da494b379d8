//! Sidebar trees for the pxdocs site configuration.
//!
//! This crate provides:
//! - [`NavNode`], [`NavEntry`] and [`SidebarSpec`]: the sidebar data model
//! - Builders for the configuration-reference and guide sidebars
//! - [`build_locale_sidebar`]: every sidebar of one locale keyed by URL prefix
//!
//! All builders are pure. Calling them twice with the same input yields
//! equal trees.
//!
//! # Example
//!
//! ```
//! use pxdocs_sidebar::build_config_sidebar;
//!
//! let sidebar = build_config_sidebar(
//!     "Feature Details", "Basic Config", "Inbounds", "Outbounds", "Transport", "/en/",
//! );
//! assert_eq!(sidebar.len(), 5);
//!
//! let inbounds = sidebar[2].as_group().unwrap();
//! assert_eq!(inbounds.base_path.as_deref(), Some("/en/config/inbounds/"));
//! ```

mod builder;
mod node;

pub use builder::{
    SidebarLabels, build_config_sidebar, build_level0_sidebar, build_level1_sidebar,
    build_level2_sidebar, build_locale_sidebar,
};
pub use node::{LocaleSidebar, NavEntry, NavNode, SidebarSpec};
