//! # Shared Types Library
//!
//! This library defines the contract between the Voxia client and the Voxia REST API.
//! It holds two families of types:
//!
//! - **[`dto`]**: wire types, named the way the server names its fields
//!   (Portuguese camelCase: `nome`, `imagemPath`, `vezes`, ...)
//! - **[`model`]**: the canonical client-side types (`Card`, `Category`,
//!   `UserProfile`, `StatsCardData`) with English field names
//!
//! Wire types never leave the API boundary. Each one knows how to turn itself into
//! its canonical counterpart (`CardDto::into_card`, `CategoryDto::into_category`, ...),
//! resolving server-relative media paths on the way.
//!
//! ## Wire Format
//!
//! - Field names follow the server (`#[serde(rename_all = "camelCase")]`)
//! - The English spelling found in older payloads is accepted through `#[serde(alias)]`
//! - Identifiers decode from JSON strings or numbers (see [`utils::deserialize_id`])
//! - A missing play count decodes as `0`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::CardDto;
//!
//! let json = r#"{"id": 7, "nome": "Água", "imagemPath": "/uploads/agua.jpg", "vezes": 3}"#;
//! let dto: CardDto = serde_json::from_str(json).unwrap();
//! let card = dto.into_card("https://voxia-api.onrender.com");
//!
//! assert_eq!(card.id.as_str(), "7");
//! assert_eq!(card.name, "Água");
//! assert_eq!(card.image_url, "https://voxia-api.onrender.com/uploads/agua.jpg");
//! assert_eq!(card.play_count, 3);
//! ```

pub mod dto;
pub mod model;
pub mod utils;

// Wildcard re-exports: shared is a types library where everything is public API
pub use dto::*;
pub use model::*;
pub use utils::*;
