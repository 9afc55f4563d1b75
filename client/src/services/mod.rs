//! # Services
//!
//! Everything between the front end and the network.
//!
//! - **[`api`]**: HTTP client and one module per endpoint family
//! - **[`statistics`]**: pure play-count summaries, plus loading every favorite card
//! - **[`storage`]**: local key-value store and bearer-token persistence
//!
//! Dependencies run leaf-to-root:
//!
//! ```text
//! storage::TokenStorage ← api::ApiClient ← api::{auth, user, home, favorites} ← statistics
//! ```

pub mod api;
pub mod statistics;
pub mod storage;
