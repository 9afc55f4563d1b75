//! # Service Traits
//!
//! Traits for dependency injection, so code that consumes the API (statistics loading,
//! the CLI) can run against a fake in tests.

use async_trait::async_trait;
use shared::{AuthResponse, Card, CardId, Category, CategoryId, UserProfile};

use crate::core::error::Result;
use crate::services::api::{CardUpdate, NewCard};

/// Every operation the Voxia API offers the client.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Register a new account
    async fn register(&self, email: &str, password: &str, confirm_password: &str) -> Result<AuthResponse>;

    /// Login and persist the returned token
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse>;

    /// Drop the stored token
    async fn logout(&self);

    /// Profile of the logged-in user
    async fn profile(&self) -> Result<UserProfile>;

    /// Curated (read-only) categories
    async fn home_categories(&self) -> Result<Vec<Category>>;

    /// Cards of a curated category
    async fn home_category_cards(&self, category_id: &CategoryId) -> Result<Vec<Card>>;

    /// The user's categories
    async fn favorite_categories(&self) -> Result<Vec<Category>>;

    /// Cards of one of the user's categories
    async fn favorite_category_cards(&self, category_id: &CategoryId) -> Result<Vec<Card>>;

    async fn create_category(&self, name: &str) -> Result<Category>;

    async fn update_category(&self, category_id: &CategoryId, name: &str) -> Result<Category>;

    async fn delete_category(&self, category_id: &CategoryId) -> Result<()>;

    async fn get_card(&self, card_id: &CardId) -> Result<Card>;

    async fn create_card(&self, card: NewCard) -> Result<Card>;

    async fn update_card(&self, card_id: &CardId, update: CardUpdate) -> Result<Card>;

    async fn delete_card(&self, card_id: &CardId) -> Result<()>;

    /// Register one play of a card
    async fn increment_play_count(&self, card_id: &CardId) -> Result<()>;
}
