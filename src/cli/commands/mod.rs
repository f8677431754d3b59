//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod heatmap;
pub mod init;
pub mod query;
pub mod refresh;
pub mod status;
pub mod validate;
