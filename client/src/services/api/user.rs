//! # User Endpoints
//!
//! Profile of the authenticated user, and logout.

use shared::{UserProfile, UserProfileDto};

use super::client::ApiClient;
use crate::core::error::Result;

/// Fetch the profile of the logged-in user.
#[tracing::instrument(skip(client))]
pub async fn profile(client: &ApiClient) -> Result<UserProfile> {
    let dto: UserProfileDto = client.get("/api/User/me").await?;
    Ok(dto.into_profile(client.media_base_url()))
}

/// Forget the stored token. Purely local; the server keeps no session.
pub async fn logout(client: &ApiClient) {
    client.tokens().remove().await;
    tracing::info!("Logged out");
}

/// Whether a token is currently stored.
pub async fn is_logged_in(client: &ApiClient) -> bool {
    client.tokens().get().await.is_some()
}
