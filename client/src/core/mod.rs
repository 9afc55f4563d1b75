//! # Core Abstractions
//!
//! Core traits and error types shared by every service.
//!
//! - **[`error`]**: [`AppError`] and the `Result<T>` alias
//! - **[`service`]**: [`ApiService`], the seam between API consumers and the HTTP client
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use voxia_client::config::ClientConfig;
//! use voxia_client::core::ApiService;
//! use voxia_client::services::api::ApiClient;
//!
//! # fn main() -> voxia_client::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::from_config(&config)?);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::ApiService;
