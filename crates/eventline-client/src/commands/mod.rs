//! Command implementations.

pub mod config;
pub mod events;
pub mod parse;
pub mod timeline;
