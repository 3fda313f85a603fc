//! Unit tests for the PrintDock client core.
//!
//! ## Test Modules
//!
//! - **support**: scripted backend, prompt and pause doubles
//! - **format_tests**: byte size and timestamp formatting
//! - **view_tests**: partitioning, filter pills and both list modes
//! - **selection_tests**: select-all, bulk print button, upload pipeline state
//! - **dispatch_tests**: print, delete and upload flows against the scripted backend
//! - **config_tests**: configuration defaults, layering and validation
//! - **cli_tests**: subcommand mapping and text rendering
//!
//! Run a single module with e.g. `cargo test dispatch_tests`.

pub mod support;
pub mod selection_tests;
#[cfg(feature = "native")]
pub mod cli_tests;
