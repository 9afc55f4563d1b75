//! # Logging
//!
//! Structured logging for the client, built on `tracing`.
//!
//! - **[`config`]**: [`LogConfig`] read from `RUST_LOG` / `VOXIA_LOG_DIR`
//! - **[`logger`]**: subscriber setup (stderr or daily-rotated file) and panic logging
//!
//! Services emit events with `tracing::{debug, info, warn}` and wrap network calls in
//! `#[tracing::instrument]` spans. Secrets (passwords, tokens) are always skipped.

pub mod config;
pub mod logger;

pub use config::LogConfig;
