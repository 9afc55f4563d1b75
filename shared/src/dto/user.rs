use serde::{Deserialize, Serialize};

use crate::model::UserProfile;
use crate::utils::{deserialize_id, resolve_media_url};

/// Profile returned by `GET /api/User/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, alias = "name")]
    pub nome: String,
    pub email: String,
    #[serde(default, alias = "photoUrl")]
    pub foto_url: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub criado_em: Option<String>,
}

impl UserProfileDto {
    pub fn into_profile(self, media_base: &str) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.nome,
            email: self.email,
            photo_url: resolve_media_url(media_base, self.foto_url.as_deref()),
            created_at: self.criado_em,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_accepts_both_namings() {
        let pt: UserProfileDto =
            serde_json::from_str(r#"{"id": 5, "nome": "Ana", "email": "ana@example.com"}"#).unwrap();
        let en: UserProfileDto = serde_json::from_str(
            r#"{"id": "5", "name": "Ana", "email": "ana@example.com", "photoUrl": "/fotos/5.jpg"}"#,
        )
        .unwrap();

        let pt = pt.into_profile("http://localhost:5000");
        let en = en.into_profile("http://localhost:5000");

        assert_eq!(pt.id, en.id);
        assert_eq!(pt.name, "Ana");
        assert_eq!(en.photo_url.as_deref(), Some("http://localhost:5000/fotos/5.jpg"));
    }
}
