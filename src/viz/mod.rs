//! Plot configuration: the figure as a whole and each panel in it.

pub mod config;
pub mod panel;
