//! CLI command implementations.
//!
//! # Command Modules
//!
//! - [`generate`] - Render style presets and slice them
//! - [`init`] - Configuration initialization
//! - [`slice`] - Slice an existing map image
//! - [`styles`] - List style presets

pub mod common;
pub mod generate;
pub mod init;
pub mod slice;
pub mod styles;
