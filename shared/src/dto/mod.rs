//! # Data Transfer Objects (DTOs)
//!
//! Structures exchanged with the Voxia REST API, spelled the way the server spells them.
//!
//! ## Module Organization
//!
//! - [`auth`] - Register, login and error bodies
//! - [`favorites`] - Cards and categories (shared by the Favorites and Home namespaces)
//! - [`user`] - Authenticated user profile
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/Auth/login
//! Content-Type: application/json
//!
//! { "email": "ana@example.com", "senha": "segredo1" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
//! ```
//!
//! ```text
//! GET /api/Favorites/categories/3/cards
//!
//! [
//!   {
//!     "id": 12,
//!     "nome": "Pão",
//!     "imagemPath": "/uploads/pao.jpg",
//!     "audioPath": "/uploads/pao.m4a",
//!     "vezes": 9,
//!     "criadoEm": "2025-03-02T14:11:09Z",
//!     "categoriaFavoritoId": 3
//!   }
//! ]
//! ```

pub mod auth;
pub mod favorites;
pub mod user;

pub use auth::*;
pub use favorites::*;
pub use user::*;
