//! # Favorites Endpoints
//!
//! CRUD over the authenticated user's own categories and cards, plus the play counter.
//! Responses are translated from the server's naming into [`Card`] / [`Category`] here
//! and nowhere else.

use std::path::PathBuf;

use reqwest::multipart::Form;
use serde::de::IgnoredAny;
use shared::dto::card_form;
use shared::{Card, CardDto, CardId, Category, CategoryDto, CategoryId, CategoryNameRequest};

use super::client::ApiClient;
use super::media;
use crate::core::error::{AppError, Result};
use crate::utils::validation::validate_name;

/// Input for card creation.
///
/// `image` is optional only so that a missing one can be reported as a validation
/// error; the server requires it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCard {
    pub name: String,
    pub category_id: Option<CategoryId>,
    pub image: Option<PathBuf>,
    pub audio: Option<PathBuf>,
}

/// Partial card update. Only the fields that are `Some` are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardUpdate {
    pub name: Option<String>,
    pub image: Option<PathBuf>,
    pub audio: Option<PathBuf>,
}

impl CardUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.image.is_none() && self.audio.is_none()
    }
}

/// List the user's categories.
#[tracing::instrument(skip(client))]
pub async fn list_categories(client: &ApiClient) -> Result<Vec<Category>> {
    let data: Option<Vec<CategoryDto>> = client.get("/api/Favorites/categories").await?;
    let categories: Vec<Category> = data
        .unwrap_or_default()
        .into_iter()
        .map(|dto| dto.into_category(client.media_base_url()))
        .collect();

    tracing::debug!(count = categories.len(), "Fetched favorites categories");
    Ok(categories)
}

/// List the cards of one category.
#[tracing::instrument(skip(client), fields(category_id = %category_id))]
pub async fn list_category_cards(client: &ApiClient, category_id: &CategoryId) -> Result<Vec<Card>> {
    let endpoint = format!("/api/Favorites/categories/{}/cards", category_id);
    let data: Option<Vec<CardDto>> = client.get(&endpoint).await?;
    let cards: Vec<Card> = data
        .unwrap_or_default()
        .into_iter()
        .map(|dto| dto.into_card(client.media_base_url()))
        .collect();

    tracing::debug!(count = cards.len(), "Fetched favorites cards");
    Ok(cards)
}

/// Create a category.
#[tracing::instrument(skip(client))]
pub async fn create_category(client: &ApiClient, name: &str) -> Result<Category> {
    validate_name(name, "category").into_result()?;

    let request = CategoryNameRequest {
        nome: name.trim().to_string(),
    };
    let dto: CategoryDto = client.post("/api/Favorites/categories", &request).await?;
    let category = dto.into_category(client.media_base_url());

    tracing::info!(category_id = %category.id, "Category created");
    Ok(category)
}

/// Rename a category.
#[tracing::instrument(skip(client), fields(category_id = %category_id))]
pub async fn update_category(client: &ApiClient, category_id: &CategoryId, name: &str) -> Result<Category> {
    validate_name(name, "category").into_result()?;

    let request = CategoryNameRequest {
        nome: name.trim().to_string(),
    };
    let endpoint = format!("/api/Favorites/categories/{}", category_id);
    let dto: CategoryDto = client.put(&endpoint, &request).await?;
    Ok(dto.into_category(client.media_base_url()))
}

/// Delete a category. The server deletes its cards with it.
#[tracing::instrument(skip(client), fields(category_id = %category_id))]
pub async fn delete_category(client: &ApiClient, category_id: &CategoryId) -> Result<()> {
    client
        .delete(&format!("/api/Favorites/categories/{}", category_id))
        .await?;
    tracing::info!("Category deleted");
    Ok(())
}

/// Fetch a single card.
#[tracing::instrument(skip(client), fields(card_id = %card_id))]
pub async fn get_card(client: &ApiClient, card_id: &CardId) -> Result<Card> {
    let dto: CardDto = client.get(&format!("/api/Favorites/cards/{}", card_id)).await?;
    Ok(dto.into_card(client.media_base_url()))
}

/// Create a card with its image and optional audio.
///
/// Name, category and image are checked, and the media files read, before the
/// request is issued.
#[tracing::instrument(skip(client, card), fields(name = %card.name))]
pub async fn create_card(client: &ApiClient, card: NewCard) -> Result<Card> {
    validate_name(&card.name, "card").into_result()?;
    let category_id = card
        .category_id
        .ok_or_else(|| AppError::Validation("Choose a category for the card".to_string()))?;
    let image = card
        .image
        .ok_or_else(|| AppError::Validation("Image is required".to_string()))?;

    let mut form = Form::new()
        .text(card_form::NAME, card.name.trim().to_string())
        .text(card_form::CATEGORY_ID, category_id.to_string())
        .part(card_form::IMAGE, media::load_image(&image).await?);

    if let Some(audio) = &card.audio {
        form = form.part(card_form::AUDIO, media::load_audio(audio).await?);
    }

    let dto: CardDto = client.post_multipart("/api/Favorites/cards", form).await?;
    let created = dto.into_card(client.media_base_url());

    tracing::info!(card_id = %created.id, "Card created");
    Ok(created)
}

/// Update a card's name and/or media.
#[tracing::instrument(skip(client, update), fields(card_id = %card_id))]
pub async fn update_card(client: &ApiClient, card_id: &CardId, update: CardUpdate) -> Result<Card> {
    if update.is_empty() {
        return Err(AppError::Validation("Nothing to update".to_string()));
    }

    let mut form = Form::new();

    if let Some(name) = &update.name {
        validate_name(name, "card").into_result()?;
        form = form.text(card_form::NAME, name.trim().to_string());
    }
    if let Some(image) = &update.image {
        form = form.part(card_form::IMAGE, media::load_image(image).await?);
    }
    if let Some(audio) = &update.audio {
        form = form.part(card_form::AUDIO, media::load_audio(audio).await?);
    }

    let endpoint = format!("/api/Favorites/cards/{}", card_id);
    let dto: CardDto = client.put_multipart(&endpoint, form).await?;
    Ok(dto.into_card(client.media_base_url()))
}

/// Delete a card.
#[tracing::instrument(skip(client), fields(card_id = %card_id))]
pub async fn delete_card(client: &ApiClient, card_id: &CardId) -> Result<()> {
    client.delete(&format!("/api/Favorites/cards/{}", card_id)).await?;
    tracing::info!("Card deleted");
    Ok(())
}

/// Register one play of a card.
#[tracing::instrument(skip(client), fields(card_id = %card_id))]
pub async fn increment_play_count(client: &ApiClient, card_id: &CardId) -> Result<()> {
    let _: IgnoredAny = client
        .post(&format!("/api/Clicks/card/{}", card_id), &serde_json::json!({}))
        .await?;
    tracing::debug!("Card play registered");
    Ok(())
}
