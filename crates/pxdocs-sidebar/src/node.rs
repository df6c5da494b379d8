//! Sidebar tree types.
//!
//! A sidebar is an ordered list of [`NavEntry`] values. Leaves are relative
//! page identifiers, groups are [`NavNode`] records with their own children.
//! Serialization follows the shape the site framework reads: leaves are bare
//! strings, groups are objects, and an automatically inferred sidebar is the
//! literal string `"auto"`.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Titled sidebar group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavNode {
    /// Group heading. Absent for untitled groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Whether the group can be collapsed in the rendered menu.
    #[serde(skip_serializing_if = "is_default_collapsable")]
    pub collapsable: bool,
    /// Prefix the site renderer applies to relative children.
    ///
    /// Plain string concatenation, never checked against real content.
    #[serde(rename = "path", skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    /// Ordered group entries.
    pub children: Vec<NavEntry>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_default_collapsable(collapsable: &bool) -> bool {
    *collapsable
}

impl NavNode {
    /// Create a collapsable titled group with leaf children.
    pub fn group<I, S>(title: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: Some(title.into()),
            collapsable: true,
            base_path: None,
            children: children.into_iter().map(NavEntry::leaf).collect(),
        }
    }

    /// Pin the group open in the rendered menu.
    #[must_use]
    pub fn expanded(mut self) -> Self {
        self.collapsable = false;
        self
    }

    /// Set the base path applied to relative children.
    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }
}

/// One sidebar entry: a page reference or a nested group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// Relative page identifier (e.g. `inbounds/vless`).
    Leaf(String),
    /// Nested titled group.
    Group(NavNode),
}

impl NavEntry {
    /// Create a leaf entry.
    pub fn leaf(path: impl Into<String>) -> Self {
        Self::Leaf(path.into())
    }

    /// Leaf path, if this entry is a leaf.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(path) => Some(path),
            Self::Group(_) => None,
        }
    }

    /// Group node, if this entry is a group.
    #[must_use]
    pub fn as_group(&self) -> Option<&NavNode> {
        match self {
            Self::Group(node) => Some(node),
            Self::Leaf(_) => None,
        }
    }
}

impl From<NavNode> for NavEntry {
    fn from(node: NavNode) -> Self {
        Self::Group(node)
    }
}

/// Sidebar assigned to one URL prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SidebarSpec {
    /// Let the site framework infer the sidebar from page headings.
    Auto,
    /// Explicit ordered entries.
    Entries(Vec<NavEntry>),
}

impl Serialize for SidebarSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::Entries(entries) => entries.serialize(serializer),
        }
    }
}

impl From<Vec<NavEntry>> for SidebarSpec {
    fn from(entries: Vec<NavEntry>) -> Self {
        Self::Entries(entries)
    }
}

/// Sidebars of one locale keyed by URL prefix.
///
/// The site framework matches prefixes in declaration order, so insertion
/// order is kept and serialized as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocaleSidebar {
    routes: Vec<(String, SidebarSpec)>,
}

impl LocaleSidebar {
    /// Create an empty sidebar map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sidebar for a URL prefix.
    pub fn push(&mut self, prefix: impl Into<String>, sidebar: impl Into<SidebarSpec>) {
        self.routes.push((prefix.into(), sidebar.into()));
    }

    /// Sidebar registered for an exact prefix.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&SidebarSpec> {
        self.routes
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, sidebar)| sidebar)
    }

    /// Prefixes in declaration order.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(p, _)| p.as_str())
    }

    /// Iterate over `(prefix, sidebar)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SidebarSpec)> {
        self.routes.iter().map(|(p, s)| (p.as_str(), s))
    }

    /// Number of registered prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no prefix is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Serialize for LocaleSidebar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.routes.len()))?;
        for (prefix, sidebar) in &self.routes {
            map.serialize_entry(prefix, sidebar)?;
        }
        map.end()
    }
}
