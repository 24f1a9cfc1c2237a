use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Captured selfie waiting to be uploaded
///
/// Taken by value by `MatchClient::find_me`, so a request is consumed by
/// exactly one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRequest {
    image_path: PathBuf,
}

impl MatchRequest {
    pub fn new(image_path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: image_path.into(),
        }
    }

    /// Build a request from a camera URI, stripping a `file://` prefix if present
    pub fn from_uri(uri: &str) -> Self {
        let path = uri.strip_prefix("file://").unwrap_or(uri);
        Self::new(path)
    }

    pub fn image_path(&self) -> &Path {
        &self.image_path
    }
}

/// Photo entry as listed by the gallery endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryPhoto {
    pub id: String,
    pub uri: String,
    pub filename: String,
}
