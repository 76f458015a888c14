//! CLI command implementations

pub mod config;
pub mod gallery;
pub mod map;
