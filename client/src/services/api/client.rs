//! # API Client
//!
//! Main HTTP client for Voxia API communication.
//!
//! Two request paths exist side by side:
//!
//! - **JSON** (`get`, `post`, `put`, `delete`): body serialized with `serde_json`,
//!   `Content-Type: application/json`
//! - **Multipart** (`post_multipart`, `put_multipart`): no explicit content type, the
//!   transport writes the boundary header itself
//!
//! Both inject `Authorization: Bearer <token>` when a token is stored, share the fixed
//! timeout, and turn non-2xx responses into [`AppError::Http`] with the server's message.

use std::time::Instant;

use reqwest::header::AUTHORIZATION;
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{AuthResponse, Card, CardId, Category, CategoryId, ErrorResponse, UserProfile};

use super::favorites::{CardUpdate, NewCard};
use super::{auth, favorites, home, user};
use crate::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::services::storage::TokenStorage;

/// HTTP client for the Voxia REST API.
///
/// Cheap to clone; clones share the connection pool and token storage.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    media_base_url: String,
    tokens: TokenStorage,
}

impl ApiClient {
    /// Create a client from configuration and a token store.
    pub fn new(config: &ClientConfig, tokens: TokenStorage) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            media_base_url: config.media_base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// Create a client from configuration, persisting the token in the configured data dir.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(config, TokenStorage::file(config.storage_file()))
    }

    /// Base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL relative media paths are resolved against.
    pub fn media_base_url(&self) -> &str {
        &self.media_base_url
    }

    pub fn tokens(&self) -> &TokenStorage {
        &self.tokens
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.get().await {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Send a prepared request, logging it and rejecting non-2xx statuses.
    async fn execute(&self, method: Method, endpoint: &str, request: RequestBuilder) -> Result<Response> {
        let start = Instant::now();
        let request = self.authorize(request).await;

        let response = request.send().await.map_err(|e| {
            let err = AppError::from(e);
            tracing::error!(%method, endpoint, error = %err, "Request failed");
            err
        })?;

        let status = response.status();
        let duration_ms = start.elapsed().as_millis();

        if status.is_success() {
            tracing::debug!(%method, endpoint, status = status.as_u16(), duration_ms, "Request completed");
            Ok(response)
        } else {
            let message = error_message(status, response).await;
            tracing::warn!(
                %method,
                endpoint,
                status = status.as_u16(),
                error = %message,
                duration_ms,
                "Request rejected"
            );
            Err(AppError::Http {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn send_json<B, T>(&self, method: Method, endpoint: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.client.request(method.clone(), self.url(endpoint));
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = self.execute(method, endpoint, request).await?;
        parse_body(response).await
    }

    async fn send_multipart<T>(&self, method: Method, endpoint: &str, form: Form) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = self.client.request(method.clone(), self.url(endpoint)).multipart(form);
        let response = self.execute(method, endpoint, request).await?;
        parse_body(response).await
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.send_json::<(), T>(Method::GET, endpoint, None).await
    }

    pub async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::POST, endpoint, Some(body)).await
    }

    pub async fn put<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::PUT, endpoint, Some(body)).await
    }

    /// DELETE; any 2xx (including `204 No Content`) is success and the body is ignored.
    pub async fn delete(&self, endpoint: &str) -> Result<()> {
        self.send_json::<(), serde::de::IgnoredAny>(Method::DELETE, endpoint, None)
            .await
            .map(|_| ())
    }

    pub async fn post_multipart<T: DeserializeOwned>(&self, endpoint: &str, form: Form) -> Result<T> {
        self.send_multipart(Method::POST, endpoint, form).await
    }

    pub async fn put_multipart<T: DeserializeOwned>(&self, endpoint: &str, form: Form) -> Result<T> {
        self.send_multipart(Method::PUT, endpoint, form).await
    }
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn register(&self, email: &str, password: &str, confirm_password: &str) -> Result<AuthResponse> {
        auth::register(self, email, password, confirm_password).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        auth::login(self, email, password).await
    }

    async fn logout(&self) {
        user::logout(self).await
    }

    async fn profile(&self) -> Result<UserProfile> {
        user::profile(self).await
    }

    async fn home_categories(&self) -> Result<Vec<Category>> {
        home::list_categories(self).await
    }

    async fn home_category_cards(&self, category_id: &CategoryId) -> Result<Vec<Card>> {
        home::list_category_cards(self, category_id).await
    }

    async fn favorite_categories(&self) -> Result<Vec<Category>> {
        favorites::list_categories(self).await
    }

    async fn favorite_category_cards(&self, category_id: &CategoryId) -> Result<Vec<Card>> {
        favorites::list_category_cards(self, category_id).await
    }

    async fn create_category(&self, name: &str) -> Result<Category> {
        favorites::create_category(self, name).await
    }

    async fn update_category(&self, category_id: &CategoryId, name: &str) -> Result<Category> {
        favorites::update_category(self, category_id, name).await
    }

    async fn delete_category(&self, category_id: &CategoryId) -> Result<()> {
        favorites::delete_category(self, category_id).await
    }

    async fn get_card(&self, card_id: &CardId) -> Result<Card> {
        favorites::get_card(self, card_id).await
    }

    async fn create_card(&self, card: NewCard) -> Result<Card> {
        favorites::create_card(self, card).await
    }

    async fn update_card(&self, card_id: &CardId, update: CardUpdate) -> Result<Card> {
        favorites::update_card(self, card_id, update).await
    }

    async fn delete_card(&self, card_id: &CardId) -> Result<()> {
        favorites::delete_card(self, card_id).await
    }

    async fn increment_play_count(&self, card_id: &CardId) -> Result<()> {
        favorites::increment_play_count(self, card_id).await
    }
}

/// Decode a 2xx body. An empty body decodes as JSON `null`.
async fn parse_body<T: DeserializeOwned>(response: Response) -> Result<T> {
    let text = response.text().await?;
    let text = if text.trim().is_empty() { "null" } else { text.as_str() };
    serde_json::from_str(text).map_err(|e| {
        tracing::error!(error = %e, "Response parse error");
        AppError::Parse(e.to_string())
    })
}

/// Server message from an error body, else `"HTTP <code>: <reason>"`.
async fn error_message(status: StatusCode, response: Response) -> String {
    let fallback = match status.canonical_reason() {
        Some(reason) => format!("HTTP {}: {}", status.as_u16(), reason),
        None => format!("HTTP {}", status.as_u16()),
    };

    match response.text().await {
        Ok(body) => serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(ErrorResponse::into_message)
            .unwrap_or(fallback),
        Err(_) => fallback,
    }
}
