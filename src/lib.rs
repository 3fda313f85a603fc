//! # PrintDock Client Library
//!
//! Client-side core of PrintDock, a small service that converts uploaded PDFs,
//! keeps a history of them grouped by folder and sends them to a printer. This
//! crate holds everything the front-ends share; the service itself is remote.
//!
//! ## Architecture
//!
//! - The web UI (`webui/`, Dioxus) builds against this crate with
//!   `default-features = false` and supplies a fetch-based [`backend::Backend`].
//! - The `printdock` binary (feature `native`) drives the same dispatcher from
//!   the terminal over [`client::HttpBackend`].
//!
//! ## Core Components
//!
//! - [`types`]: wire types of the print service
//! - [`format`]: byte size and timestamp formatting
//! - [`store`]: cached history plus the active folder filter
//! - [`filters`]: filter pills derived from the history
//! - [`view`]: flat / grouped projection of the history list
//! - [`selection`]: checked rows and the bulk print button
//! - [`upload`]: drop zone and convert button state
//! - [`state`]: the page state tying the above together
//! - [`tasks`]: ordered runner for bulk operations
//! - [`dispatch`]: actions to backend requests
//! - [`config`], [`error`]: settings and error taxonomy

pub mod backend;
#[cfg(feature = "native")]
pub mod cli;
#[cfg(feature = "native")]
pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod filters;
pub mod format;
pub mod prompt;
pub mod selection;
pub mod state;
pub mod store;
pub mod tasks;
pub mod types;
pub mod upload;
pub mod view;

#[cfg(test)]
mod tests;
