//! # Card and Category DTOs
//!
//! Wire shapes for `/api/Favorites/*` and `/api/Home/*`. Both namespaces return the same
//! card and category shapes, so one set of types serves both.

use serde::{Deserialize, Serialize};

use crate::model::{Card, CardId, Category, CategoryId};
use crate::utils::{deserialize_id, deserialize_null_default, deserialize_optional_id, resolve_media_url};

/// Card as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, alias = "name", deserialize_with = "deserialize_null_default")]
    pub nome: String,
    #[serde(default, alias = "imageUrl")]
    pub imagem_path: Option<String>,
    #[serde(default, alias = "audioUrl")]
    pub audio_path: Option<String>,
    #[serde(default, alias = "playCount")]
    pub vezes: Option<u64>,
    #[serde(default, alias = "createdAt")]
    pub criado_em: Option<String>,
    #[serde(
        default,
        alias = "categoryId",
        alias = "categoriaId",
        deserialize_with = "deserialize_optional_id"
    )]
    pub categoria_favorito_id: Option<String>,
}

impl CardDto {
    /// Translate into the canonical [`Card`], resolving media paths against `media_base`.
    pub fn into_card(self, media_base: &str) -> Card {
        Card {
            id: CardId::from(self.id),
            name: self.nome,
            image_url: resolve_media_url(media_base, self.imagem_path.as_deref()).unwrap_or_default(),
            audio_url: resolve_media_url(media_base, self.audio_path.as_deref()),
            play_count: self.vezes.unwrap_or(0),
            created_at: self.criado_em,
            category_id: self
                .categoria_favorito_id
                .filter(|id| !id.is_empty())
                .map(CategoryId::from),
        }
    }
}

/// Category as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, alias = "name", deserialize_with = "deserialize_null_default")]
    pub nome: String,
    #[serde(default, alias = "imageUrl", alias = "imagemUrl")]
    pub imagem_path: Option<String>,
}

impl CategoryDto {
    /// Translate into the canonical [`Category`].
    pub fn into_category(self, media_base: &str) -> Category {
        Category {
            id: CategoryId::from(self.id),
            name: self.nome,
            image_url: resolve_media_url(media_base, self.imagem_path.as_deref()),
        }
    }
}

/// Body of category create/rename requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryNameRequest {
    pub nome: String,
}

/// Multipart field names used by card create/update.
pub mod card_form {
    pub const NAME: &str = "Nome";
    pub const CATEGORY_ID: &str = "CategoriaFavoritoId";
    pub const IMAGE: &str = "Imagem";
    pub const AUDIO: &str = "Audio";
}
