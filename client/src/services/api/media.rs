//! # Media Parts
//!
//! Builds the multipart file parts attached to card uploads. Images are always sent as
//! `imagem.jpg` / `image/jpeg`; audio is `audio.m4a` / `audio/m4a` when the source ends in
//! `.m4a`, otherwise `audio.mp3` / `audio/mpeg`.

use std::path::Path;

use reqwest::multipart::Part;

use crate::core::error::{AppError, Result};

/// File name and MIME type a media part is uploaded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaKind {
    pub file_name: &'static str,
    pub mime: &'static str,
}

pub const IMAGE: MediaKind = MediaKind {
    file_name: "imagem.jpg",
    mime: "image/jpeg",
};

pub const AUDIO_M4A: MediaKind = MediaKind {
    file_name: "audio.m4a",
    mime: "audio/m4a",
};

pub const AUDIO_MP3: MediaKind = MediaKind {
    file_name: "audio.mp3",
    mime: "audio/mpeg",
};

/// Pick the audio upload kind from the source path.
pub fn audio_kind(path: &Path) -> MediaKind {
    let is_m4a = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("m4a"));

    if is_m4a {
        AUDIO_M4A
    } else {
        AUDIO_MP3
    }
}

/// Read a local file into a multipart part.
pub async fn load_part(path: &Path, kind: MediaKind) -> Result<Part> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Failed to read media file");
        AppError::Io(e)
    })?;

    if bytes.is_empty() {
        return Err(AppError::Validation(format!("{} is empty", path.display())));
    }

    Part::bytes(bytes)
        .file_name(kind.file_name)
        .mime_str(kind.mime)
        .map_err(AppError::from)
}

pub async fn load_image(path: &Path) -> Result<Part> {
    load_part(path, IMAGE).await
}

pub async fn load_audio(path: &Path) -> Result<Part> {
    load_part(path, audio_kind(path)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_kind_by_extension() {
        assert_eq!(audio_kind(Path::new("rec/voz.m4a")), AUDIO_M4A);
        assert_eq!(audio_kind(Path::new("rec/VOZ.M4A")), AUDIO_M4A);
        assert_eq!(audio_kind(Path::new("rec/voz.mp3")), AUDIO_MP3);
        assert_eq!(audio_kind(Path::new("rec/voz.wav")), AUDIO_MP3);
        assert_eq!(audio_kind(Path::new("rec/voz")), AUDIO_MP3);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_io_error() {
        let err = load_image(Path::new("/definitely/not/here.jpg")).await.unwrap_err();
        assert!(matches!(&err, AppError::Io(e) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn test_empty_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.jpg");
        std::fs::write(&path, b"").unwrap();

        assert!(matches!(load_image(&path).await, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_existing_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pao.m4a");
        std::fs::write(&path, b"\x00\x00\x00\x18ftypM4A ").unwrap();

        assert!(load_audio(&path).await.is_ok());
    }
}
