//! CLI command implementations

pub mod completions;
pub mod config;
pub mod describe;
pub mod io;
pub mod paths;
