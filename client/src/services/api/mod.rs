//! # Voxia API Client Module
//!
//! HTTP client for the Voxia REST API. Handles authentication, the user profile, the
//! read-only Home namespace and the editable Favorites namespace.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports and documentation
//! ├── client.rs     - ApiClient: JSON and multipart request paths, error mapping
//! ├── auth.rs       - Register and login
//! ├── user.rs       - Profile and logout
//! ├── home.rs       - Curated categories and cards
//! ├── favorites.rs  - User categories/cards CRUD, play counter
//! └── media.rs      - Multipart parts for card images and audio
//! ```

pub mod auth;
pub mod client;
pub mod favorites;
pub mod home;
pub mod media;
pub mod user;

pub use client::ApiClient;
pub use favorites::{CardUpdate, NewCard};
