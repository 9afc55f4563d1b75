//! # Voxia Client - Library Root
//!
//! Data layer of the Voxia AAC (augmentative and alternative communication) app: users
//! tap picture cards that speak a word aloud, group cards into categories, keep their
//! own favorites, and look at how often each card was played.
//!
//! This crate talks to the Voxia REST API, keeps the auth token on disk, and derives
//! play-count statistics. The `voxia` binary (`main.rs`) is a thin command-line front
//! end over it.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              voxia_client (this crate)                 │
//! ├────────────────────────────────────────────────────────┤
//! │  services::statistics  - rank / total / most played    │
//! │  services::api         - auth, user, home, favorites   │
//! │  services::storage     - token persistence             │
//! │  utils                 - validation, card wizard       │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTPS (JSON + multipart)
//!          ▼
//! ┌─────────────────────────┐
//! │  Voxia REST API (/api)  │
//! └─────────────────────────┘
//! ```
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── config (ClientConfig from VOXIA_* env)
//!   ├── debug  (tracing subscriber)
//!   └── services
//!       ├── statistics ── core::ApiService
//!       ├── api::{auth, user, home, favorites} ── api::client ── storage::TokenStorage
//!       └── utils::wizard ── core::ApiService
//! ```
//!
//! ## Core Concepts
//!
//! ### One naming inside, another on the wire
//!
//! The server names fields in Portuguese (`nome`, `vezes`, `categoriaFavoritoId`).
//! Those names stay in `shared::dto`; everything in this crate works with
//! `shared::model` types (`Card`, `Category`, `UserProfile`).
//!
//! ### Errors
//!
//! Every operation returns [`Result<T>`] with [`AppError`]. Nothing is retried; the
//! caller shows [`AppError::user_message`] once. Token storage problems never surface:
//! an unreadable token simply means "logged out".
//!
//! ## Usage
//!
//! ```rust,no_run
//! use voxia_client::config::ClientConfig;
//! use voxia_client::services::api::{auth, ApiClient};
//! use voxia_client::services::statistics::{self, StatsPeriod};
//!
//! # async fn run() -> voxia_client::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let client = ApiClient::from_config(&config)?;
//!
//! auth::login(&client, "ana@example.com", "segredo1").await?;
//!
//! let cards = statistics::collect_favorite_cards(&client).await?;
//! let summary = statistics::summarize(StatsPeriod::Week, &cards);
//! println!("{} plays in total", summary.total_plays);
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p voxia-client
//! ```
//!
//! Integration tests in `tests/` run [`services::api::ApiClient`] against an in-process
//! axum fake of the API.

pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod utils;

pub use crate::config::ClientConfig;
pub use crate::core::{ApiService, AppError, Result};
pub use crate::services::api::ApiClient;
