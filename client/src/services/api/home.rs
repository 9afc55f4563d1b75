//! # Home Endpoints
//!
//! Read-only curated categories and cards (`/api/Home/*`). Same shapes and translation
//! as the favorites namespace; nothing here is user-owned.

use shared::{Card, CardDto, Category, CategoryDto, CategoryId};

use super::client::ApiClient;
use crate::core::error::Result;

/// List curated categories.
#[tracing::instrument(skip(client))]
pub async fn list_categories(client: &ApiClient) -> Result<Vec<Category>> {
    let data: Option<Vec<CategoryDto>> = client.get("/api/Home/categories").await?;
    Ok(data
        .unwrap_or_default()
        .into_iter()
        .map(|dto| dto.into_category(client.media_base_url()))
        .collect())
}

/// List the cards of a curated category.
#[tracing::instrument(skip(client), fields(category_id = %category_id))]
pub async fn list_category_cards(client: &ApiClient, category_id: &CategoryId) -> Result<Vec<Card>> {
    let endpoint = format!("/api/Home/categories/{}/cards", category_id);
    let data: Option<Vec<CardDto>> = client.get(&endpoint).await?;
    Ok(data
        .unwrap_or_default()
        .into_iter()
        .map(|dto| dto.into_card(client.media_base_url()))
        .collect())
}
