//! # API Client Integration Tests
//!
//! Auth flow, token injection and error mapping against the fake API.

mod common;

use std::time::Duration;

use axum::routing::get;
use axum::Router;

use voxia_client::services::api::{auth, home, user};
use voxia_client::services::storage::TokenStorage;
use voxia_client::{ApiClient, ApiService, AppError, ClientConfig};

#[tokio::test]
async fn test_login_stores_token_and_authorizes_later_requests() {
    // Arrange
    let api = common::start().await;
    let client = api.client();

    // Act
    let response = auth::login(&client, "ana@example.com", "segredo1").await.unwrap();
    let profile = client.profile().await.unwrap();

    // Assert
    assert_eq!(response.bearer_token(), Some(common::TOKEN));
    assert_eq!(client.tokens().get().await.as_deref(), Some(common::TOKEN));
    assert_eq!(api.state.last_authorization(), Some(format!("Bearer {}", common::TOKEN)));
    assert_eq!(profile.name, "Ana");
    assert_eq!(profile.email, "ana@example.com");
    assert_eq!(
        profile.photo_url,
        Some(format!("{}/uploads/ana.jpg", api.base_url()))
    );
}

#[tokio::test]
async fn test_requests_without_token_carry_no_authorization() {
    let api = common::start().await;
    let client = api.client();

    let err = client.profile().await.unwrap_err();

    assert_eq!(api.state.request_count(), 1);
    assert_eq!(api.state.last_authorization(), None);
    // Empty 401 body falls back to the status line
    assert!(matches!(&err, AppError::Http { status: 401, message } if message == "HTTP 401: Unauthorized"));
}

#[tokio::test]
async fn test_login_without_token_fails_and_persists_nothing() {
    let state = common::SharedState::default();
    let api = common::start_with(state).await;
    let client = api.client();

    let err = auth::login(&client, "ana@example.com", "segredo1").await.unwrap_err();

    assert!(matches!(err, AppError::MissingToken));
    assert_eq!(client.tokens().get().await, None);
    assert!(!user::is_logged_in(&client).await);
}

#[tokio::test]
async fn test_login_rejection_uses_error_field() {
    let api = common::start().await;
    let client = api.client();

    let err = auth::login(&client, "ana@example.com", "wrong-password").await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.user_message(), "Credenciais inválidas");
    assert_eq!(client.tokens().get().await, None);
}

#[tokio::test]
async fn test_register_surfaces_server_message() {
    let api = common::start().await;
    let client = api.client();

    let ok = client
        .register("nova@example.com", "segredo1", "segredo1")
        .await
        .unwrap();
    let err = client
        .register("taken@example.com", "segredo1", "segredo1")
        .await
        .unwrap_err();

    assert_eq!(ok.message.as_deref(), Some("Usuário criado com sucesso"));
    assert!(matches!(&err, AppError::Http { status: 400, message } if message == "E-mail já cadastrado"));
    // Registration never logs in
    assert_eq!(client.tokens().get().await, None);
}

#[tokio::test]
async fn test_invalid_credentials_never_reach_the_server() {
    let api = common::start().await;
    let client = api.client();

    assert!(matches!(
        auth::register(&client, "not-an-email", "segredo1", "segredo1").await,
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        auth::register(&client, "ana@example.com", "123", "123").await,
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        auth::register(&client, "ana@example.com", "segredo1", "segredo2").await,
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        auth::login(&client, "", "segredo1").await,
        Err(AppError::Validation(_))
    ));

    assert_eq!(api.state.request_count(), 0);
}

#[tokio::test]
async fn test_logout_drops_token() {
    let api = common::start().await;
    let client = api.client();
    auth::login(&client, "ana@example.com", "segredo1").await.unwrap();
    assert!(user::is_logged_in(&client).await);

    client.logout().await;

    assert!(!user::is_logged_in(&client).await);
    assert!(client.profile().await.is_err());
    assert_eq!(api.state.last_authorization(), None);
}

#[tokio::test]
async fn test_token_survives_new_client_with_file_storage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    let api = common::start().await;

    let first = api.client_with(TokenStorage::file(&path));
    auth::login(&first, "ana@example.com", "segredo1").await.unwrap();

    let second = api.client_with(TokenStorage::file(&path));
    let profile = second.profile().await.unwrap();

    assert_eq!(profile.name, "Ana");
    assert_eq!(api.state.last_authorization(), Some(format!("Bearer {}", common::TOKEN)));
}

#[tokio::test]
async fn test_null_list_decodes_as_empty() {
    let api = common::start().await;
    let client = api.client();

    let categories = home::list_categories(&client).await.unwrap();

    assert!(categories.is_empty());
}

#[tokio::test]
async fn test_not_found_uses_error_field() {
    let api = common::start().await;
    let client = api.client();

    let err = client.home_category_cards(&"42".into()).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.user_message(), "Categoria 42 não encontrada");
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let app = Router::new().route(
        "/api/Home/categories",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            "[]"
        }),
    );
    let addr = common::serve(app).await;
    let config = ClientConfig::default()
        .with_api_base_url(format!("http://{}", addr))
        .with_timeout(Duration::from_secs(1));
    let client = ApiClient::new(&config, TokenStorage::in_memory()).unwrap();

    let err = client.home_categories().await.unwrap_err();

    assert!(matches!(err, AppError::Timeout));
}

#[tokio::test]
async fn test_unreachable_server_is_a_network_error() {
    // Bind then drop to get a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::default().with_api_base_url(format!("http://{}", addr));
    let client = ApiClient::new(&config, TokenStorage::in_memory()).unwrap();

    let err = client.favorite_categories().await.unwrap_err();

    assert!(matches!(err, AppError::Network(_)));
}
