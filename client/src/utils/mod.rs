//! # Utility Functions
//!
//! Form-level helpers used before anything reaches the network.
//!
//! ## Modules
//!
//! - **[`validation`]**: Input validation (email, password, names)
//! - **[`wizard`]**: The multi-step card creation form
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Media URL resolution and id decoding at the API boundary
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
pub mod wizard;
