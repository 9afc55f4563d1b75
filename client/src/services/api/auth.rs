//! # Authentication Endpoints
//!
//! Handles user authentication (register and login). A successful login stores the
//! bearer token; every later request picks it up from [`ApiClient::tokens`].

use shared::{AuthResponse, LoginRequest, RegisterRequest};

use super::client::ApiClient;
use crate::core::error::{AppError, Result};
use crate::utils::validation::{validate_email, validate_password, validate_password_confirmation};

/// Register a new account.
///
/// Email, password length and confirmation are checked locally first; nothing is sent
/// if any of them fails. Registration does not log the user in.
#[tracing::instrument(skip(client, password, confirm_password), fields(email = %email))]
pub async fn register(
    client: &ApiClient,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<AuthResponse> {
    validate_email(email).into_result()?;
    validate_password(password).into_result()?;
    validate_password_confirmation(password, confirm_password).into_result()?;

    let request = RegisterRequest {
        email: email.trim().to_string(),
        senha: password.to_string(),
        confirmar_senha: confirm_password.to_string(),
    };

    let response: Option<AuthResponse> = client.post("/api/Auth/register", &request).await?;
    tracing::info!("Registration accepted");
    Ok(response.unwrap_or_default())
}

/// Login with email and password.
///
/// The response must carry a non-empty `token`; without one this fails with
/// [`AppError::MissingToken`] and nothing is persisted.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<AuthResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    validate_email(email).into_result()?;
    validate_password(password).into_result()?;

    let request = LoginRequest {
        email: email.trim().to_string(),
        senha: password.to_string(),
    };

    let response: Option<AuthResponse> = client.post("/api/Auth/login", &request).await?;
    let response = response.unwrap_or_default();

    let Some(token) = response.bearer_token() else {
        tracing::warn!("Login response carried no token");
        return Err(AppError::MissingToken);
    };

    client.tokens().save(token).await;
    tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful");
    Ok(response)
}
