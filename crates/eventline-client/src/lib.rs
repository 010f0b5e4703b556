//! CLI, event store, output rendering, actions
//!
//! This crate provides the `eventline` command-line interface.

pub mod actions;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod store;

pub use cli::Cli;
pub use error::{ClientError, ClientResult};
pub use store::EventStore;
