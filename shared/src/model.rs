//! # Canonical Client Types
//!
//! The English-named types the rest of the client works with. They are produced from
//! [`crate::dto`] at the API boundary and never serialized back to the server directly.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque card identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

/// Opaque category identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value.to_string())
            }
        }
    };
}

string_id!(CardId);
string_id!(CategoryId);

/// A single speakable item with an image and optional audio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    /// Absolute URL; empty when the server sent no image.
    pub image_url: String,
    pub audio_url: Option<String>,
    pub play_count: u64,
    /// RFC 3339 timestamp as sent by the server.
    pub created_at: Option<String>,
    /// `None` when the server sent no (or an empty) category reference.
    pub category_id: Option<CategoryId>,
}

impl Card {
    /// Minimal card, mostly useful for building fixtures.
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, play_count: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: String::new(),
            audio_url: None,
            play_count,
            created_at: None,
            category_id: None,
        }
    }

    /// Creation time, if present and well-formed.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn has_audio(&self) -> bool {
        self.audio_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

/// A named grouping of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub image_url: Option<String>,
}

/// The authenticated user. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub photo_url: Option<String>,
    pub created_at: Option<String>,
}

/// Derived projection of a [`Card`] used by the statistics views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsCardData {
    pub card_id: CardId,
    pub card_name: String,
    pub play_count: u64,
}
