//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod sidebar;

pub(crate) use build::BuildArgs;
pub(crate) use sidebar::SidebarArgs;
