//! CLI command implementations

pub mod info;
pub mod install;
pub mod list;
pub mod repo;
pub mod search;
pub mod uninstall;
pub mod update;
pub mod upgrade;
