//! `tourdesk-cli` library crate.
//!
//! Exposes the command implementations for integration testing. The binary
//! entrypoint lives in `main.rs`.

pub mod commands;
pub mod config;
pub mod prefs;
pub mod store;
