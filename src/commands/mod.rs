//! CLI command implementations

pub mod build;
pub mod clean;
pub mod deploy;
pub mod init;
pub mod list;
pub mod new;
