//! In-process fake of the Voxia API.
//!
//! Every handler records what it received so tests can assert on headers, multipart
//! fields and the number of requests that actually reached the server.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};

use voxia_client::services::storage::TokenStorage;
use voxia_client::{ApiClient, ClientConfig};

pub const TOKEN: &str = "test-token-123";

/// One multipart field as the server saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedField {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: usize,
    pub text: Option<String>,
}

#[derive(Default)]
pub struct FakeState {
    /// Token handed out by login; `None` makes login answer without one.
    pub login_token: Mutex<Option<String>>,
    pub requests: AtomicUsize,
    pub authorization: Mutex<Vec<Option<String>>>,
    pub multipart: Mutex<Vec<ReceivedField>>,
    pub clicks: Mutex<HashMap<String, u64>>,
    pub created_categories: Mutex<Vec<String>>,
}

impl FakeState {
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn last_authorization(&self) -> Option<String> {
        self.authorization.lock().last().cloned().flatten()
    }

    pub fn field(&self, name: &str) -> Option<ReceivedField> {
        self.multipart.lock().iter().find(|f| f.name == name).cloned()
    }
}

pub type SharedState = Arc<FakeState>;

pub struct FakeApi {
    pub addr: SocketAddr,
    pub state: SharedState,
}

impl FakeApi {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Client pointed at this server with an in-memory token store.
    pub fn client(&self) -> ApiClient {
        self.client_with(TokenStorage::in_memory())
    }

    pub fn client_with(&self, tokens: TokenStorage) -> ApiClient {
        let config = ClientConfig::default().with_api_base_url(self.base_url());
        ApiClient::new(&config, tokens).unwrap()
    }
}

/// Start the fake API with login handing out [`TOKEN`].
pub async fn start() -> FakeApi {
    let state = SharedState::default();
    *state.login_token.lock() = Some(TOKEN.to_string());
    start_with(state).await
}

pub async fn start_with(state: SharedState) -> FakeApi {
    let addr = serve(router(state.clone())).await;
    FakeApi { addr, state }
}

/// Serve any router on an ephemeral localhost port.
pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/Auth/register", post(register))
        .route("/api/Auth/login", post(login))
        .route("/api/User/me", get(me))
        .route("/api/Home/categories", get(home_categories))
        .route("/api/Home/categories/{id}/cards", get(home_cards))
        .route(
            "/api/Favorites/categories",
            get(favorite_categories).post(create_category),
        )
        .route(
            "/api/Favorites/categories/{id}",
            put(rename_category).delete(delete_category),
        )
        .route("/api/Favorites/categories/{id}/cards", get(favorite_cards))
        .route("/api/Favorites/cards", post(create_card))
        .route(
            "/api/Favorites/cards/{id}",
            get(get_card).put(update_card).delete(delete_card),
        )
        .route("/api/Clicks/card/{id}", post(click))
        .with_state(state)
}

fn record(state: &FakeState, headers: &HeaderMap) {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.authorization.lock().push(auth);
}

fn authorized(state: &FakeState, headers: &HeaderMap) -> bool {
    let expected = state.login_token.lock().clone().map(|t| format!("Bearer {}", t));
    let got = headers.get("authorization").and_then(|v| v.to_str().ok());
    expected.is_some() && got == expected.as_deref()
}

async fn register(State(state): State<SharedState>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    record(&state, &headers);
    if body["email"] == "taken@example.com" {
        return (StatusCode::BAD_REQUEST, Json(json!({ "message": "E-mail já cadastrado" }))).into_response();
    }
    Json(json!({ "message": "Usuário criado com sucesso" })).into_response()
}

async fn login(State(state): State<SharedState>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    record(&state, &headers);
    if body["senha"] == "wrong-password" {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Credenciais inválidas" }))).into_response();
    }
    match state.login_token.lock().clone() {
        Some(token) => Json(json!({ "token": token, "message": "Login realizado" })).into_response(),
        None => Json(json!({ "message": "Login realizado" })).into_response(),
    }
}

async fn me(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    record(&state, &headers);
    if !authorized(&state, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({
        "id": 5,
        "nome": "Ana",
        "email": "ana@example.com",
        "fotoUrl": "/uploads/ana.jpg"
    }))
    .into_response()
}

async fn home_categories(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    record(&state, &headers);
    Json(Value::Null).into_response()
}

async fn home_cards(State(state): State<SharedState>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    record(&state, &headers);
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("Categoria {} não encontrada", id) })),
    )
        .into_response()
}

async fn favorite_categories(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    record(&state, &headers);
    Json(json!([
        { "id": 1, "nome": "Comida", "imagemPath": "/uploads/comida.jpg" },
        { "id": "2", "nome": "Bebidas" }
    ]))
    .into_response()
}

async fn favorite_cards(State(state): State<SharedState>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    record(&state, &headers);
    let cards = match id.as_str() {
        "1" => json!([
            { "id": 10, "nome": "Pão", "imagemPath": "/uploads/pao.jpg", "vezes": 9, "categoriaFavoritoId": 1 },
            { "id": 11, "nome": "Arroz", "imagemPath": "/uploads/arroz.jpg", "vezes": 2, "categoriaFavoritoId": 1 }
        ]),
        "2" => json!([
            { "id": 20, "nome": "Água", "imagemPath": "/uploads/agua.jpg", "vezes": 9, "categoriaFavoritoId": 2 },
            { "id": 21, "nome": "Suco", "imagemPath": "/uploads/suco.jpg", "categoriaFavoritoId": 2 }
        ]),
        _ => Value::Null,
    };
    Json(cards).into_response()
}

async fn create_category(State(state): State<SharedState>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    record(&state, &headers);
    let name = body["nome"].as_str().unwrap_or_default().to_string();
    state.created_categories.lock().push(name.clone());
    (StatusCode::CREATED, Json(json!({ "id": 7, "nome": name }))).into_response()
}

async fn rename_category(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    record(&state, &headers);
    Json(json!({ "id": id, "nome": body["nome"] })).into_response()
}

async fn delete_category(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    record(&state, &headers);
    StatusCode::NO_CONTENT.into_response()
}

async fn get_card(State(state): State<SharedState>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    record(&state, &headers);
    Json(json!({
        "id": id,
        "nome": "Pão",
        "imagemPath": "uploads/pao.jpg",
        "audioPath": null,
        "vezes": 3,
        "criadoEm": "2025-03-02T14:11:09Z"
    }))
    .into_response()
}

async fn collect_fields(state: &FakeState, mut multipart: Multipart) {
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.unwrap();
        let text = if file_name.is_none() {
            Some(String::from_utf8_lossy(&data).into_owned())
        } else {
            None
        };
        state.multipart.lock().push(ReceivedField {
            name,
            file_name,
            content_type,
            bytes: data.len(),
            text,
        });
    }
}

async fn create_card(State(state): State<SharedState>, headers: HeaderMap, multipart: Multipart) -> Response {
    record(&state, &headers);
    collect_fields(&state, multipart).await;

    let name = state.field("Nome").and_then(|f| f.text).unwrap_or_default();
    let category = state.field("CategoriaFavoritoId").and_then(|f| f.text);
    let audio = state.field("Audio").map(|_| "/uploads/audio.m4a");
    Json(json!({
        "id": 99,
        "nome": name,
        "imagemPath": "/uploads/imagem.jpg",
        "audioPath": audio,
        "vezes": 0,
        "categoriaFavoritoId": category
    }))
    .into_response()
}

async fn update_card(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Response {
    record(&state, &headers);
    collect_fields(&state, multipart).await;

    let name = state.field("Nome").and_then(|f| f.text).unwrap_or_else(|| "Pão".to_string());
    Json(json!({ "id": id, "nome": name, "imagemPath": "/uploads/imagem.jpg", "vezes": 3 })).into_response()
}

async fn delete_card(State(state): State<SharedState>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    record(&state, &headers);
    if id == "404" {
        return StatusCode::NOT_FOUND.into_response();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn click(State(state): State<SharedState>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    record(&state, &headers);
    *state.clicks.lock().entry(id).or_insert(0) += 1;
    StatusCode::OK.into_response()
}
