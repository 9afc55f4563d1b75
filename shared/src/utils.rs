//! # Shared Utility Functions
//!
//! Helpers used at the API boundary:
//! - [`resolve_media_url`] - turn server-relative media paths into absolute URLs
//! - [`deserialize_id`] / [`deserialize_optional_id`] - accept ids sent as strings or numbers
//! - [`deserialize_null_default`] - read `null` as the type's default

use serde::{Deserialize, Deserializer};

/// Resolve a media path sent by the server against `base`.
///
/// Absolute `http(s)` URLs are returned unchanged. Missing or blank paths yield `None`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::resolve_media_url;
///
/// let base = "https://voxia-api.onrender.com";
/// assert_eq!(
///     resolve_media_url(base, Some("/uploads/a.jpg")).as_deref(),
///     Some("https://voxia-api.onrender.com/uploads/a.jpg")
/// );
/// assert_eq!(
///     resolve_media_url(base, Some("https://cdn.example.com/a.jpg")).as_deref(),
///     Some("https://cdn.example.com/a.jpg")
/// );
/// assert_eq!(resolve_media_url(base, None), None);
/// ```
pub fn resolve_media_url(base: &str, path: Option<&str>) -> Option<String> {
    let path = path.map(str::trim).filter(|p| !p.is_empty())?;

    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_string());
    }

    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    Some(format!("{}/{}", base, path))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Signed(n) => n.to_string(),
            RawId::Unsigned(n) => n.to_string(),
        }
    }
}

/// Deserialize an identifier sent as either a JSON string or a JSON integer.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

/// Like [`deserialize_id`], but `null` becomes `None`.
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
}

/// Deserialize `null` as `T::default()`. Pair with `#[serde(default)]` to cover a missing field.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
