use crate::config::BackendSettings;
use crate::models::{GalleryPhoto, MatchRequest, MatchResponse};
use reqwest::{multipart, Client, Response};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::Instrument;

pub const FIND_ME_PATH: &str = "/find_me";
pub const PHOTOS_PATH: &str = "/photos";
pub const IMAGES_PATH: &str = "/images";

/// Multipart field, filename and content type the recognition backend expects
pub const UPLOAD_FIELD: &str = "file";
pub const UPLOAD_FILENAME: &str = "selfie.jpg";
pub const UPLOAD_MIME: &str = "image/jpeg";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur when talking to the recognition backend
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Server error ({status}): {body}")]
    ServerError { status: u16, body: String },

    #[error("Network error: {0}")]
    NetworkError(#[source] BoxError),
}

impl MatchError {
    pub fn network(err: impl Into<BoxError>) -> Self {
        MatchError::NetworkError(err.into())
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, MatchError::Timeout(_))
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self, MatchError::ServerError { .. })
    }

    pub fn is_network_error(&self) -> bool {
        matches!(self, MatchError::NetworkError(_))
    }
}

impl From<reqwest::Error> for MatchError {
    fn from(err: reqwest::Error) -> Self {
        MatchError::network(err)
    }
}

/// Recognition backend client
///
/// Handles all communication with the photo backend:
/// - Uploading a selfie and receiving matching photo ids
/// - Listing the gallery
/// - Downloading gallery images
///
/// Each call is bounded by its own timer; the client keeps no per-call state,
/// so clones can be used from several tasks at once.
#[derive(Debug, Clone)]
pub struct MatchClient {
    base_url: String,
    timeout: Duration,
    client: Client,
}

impl MatchClient {
    /// Create a new client for the backend at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, MatchError> {
        let client = Client::builder().build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            base_url,
            timeout,
            client,
        })
    }

    pub fn from_settings(settings: &BackendSettings) -> Result<Self, MatchError> {
        Self::new(settings.base_url.clone(), settings.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Upload a selfie and return the ids of the photos it matches
    ///
    /// POST {base_url}/find_me
    ///
    /// Exactly one attempt is made. The multipart boundary and its
    /// `Content-Type` header are left to reqwest.
    pub async fn find_me(&self, request: MatchRequest) -> Result<MatchResponse, MatchError> {
        let request_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!("find_me", %request_id);

        async move {
            let path = request.image_path();
            tracing::debug!("Reading selfie from {}", path.display());

            let bytes = tokio::fs::read(path).await.map_err(|e| {
                tracing::error!("Failed to read selfie {}: {}", path.display(), e);
                MatchError::network(e)
            })?;

            let part = multipart::Part::bytes(bytes)
                .file_name(UPLOAD_FILENAME)
                .mime_str(UPLOAD_MIME)?;
            let form = multipart::Form::new().part(UPLOAD_FIELD, part);

            let url = self.endpoint(FIND_ME_PATH);
            tracing::debug!("Sending selfie to {}", url);

            let result = self
                .bounded(async {
                    let response = self.client.post(&url).multipart(form).send().await?;
                    let response = ensure_success(response).await?;
                    Ok(response.json::<MatchResponse>().await?)
                })
                .await;

            match &result {
                Ok(resp) => tracing::info!(
                    "Backend returned {} matches: {}",
                    resp.matches.len(),
                    resp.message
                ),
                Err(e) => tracing::warn!("Face match lookup failed: {}", e),
            }

            result
        }
        .instrument(span)
        .await
    }

    /// Fetch the gallery listing with every `uri` made absolute
    ///
    /// GET {base_url}/photos
    pub async fn list_photos(&self) -> Result<Vec<GalleryPhoto>, MatchError> {
        let url = self.endpoint(PHOTOS_PATH);
        tracing::debug!("Fetching photos from {}", url);

        let mut photos = self
            .bounded(async {
                let response = self.client.get(&url).send().await?;
                let response = ensure_success(response).await?;
                Ok(response.json::<Vec<GalleryPhoto>>().await?)
            })
            .await
            .map_err(|e| {
                tracing::error!("Failed to list photos: {}", e);
                e
            })?;

        for photo in &mut photos {
            photo.uri = self.resolve(&photo.uri);
        }

        tracing::info!("Received {} photos from server", photos.len());
        Ok(photos)
    }

    /// Download the raw bytes of one gallery image
    ///
    /// GET {base_url}/images/{filename}
    pub async fn fetch_image(&self, filename: &str) -> Result<Vec<u8>, MatchError> {
        let url = self.image_url(filename);
        tracing::debug!("Downloading image {}", url);

        self.bounded(async {
            let response = self.client.get(&url).send().await?;
            let response = ensure_success(response).await?;
            Ok(response.bytes().await?.to_vec())
        })
        .await
    }

    /// Absolute address of a gallery image, with the filename percent-encoded
    pub fn image_url(&self, filename: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            IMAGES_PATH,
            urlencoding::encode(filename)
        )
    }

    /// Resolve a server-relative path against the base URL
    pub fn resolve(&self, uri: &str) -> String {
        if uri.starts_with("http://") || uri.starts_with("https://") {
            uri.to_string()
        } else if uri.starts_with('/') {
            format!("{}{}", self.base_url, uri)
        } else {
            format!("{}/{}", self.base_url, uri)
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Run one round trip under this call's own deadline
    async fn bounded<T, F>(&self, fut: F) -> Result<T, MatchError>
    where
        F: Future<Output = Result<T, MatchError>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(MatchError::Timeout(self.timeout)),
        }
    }
}

async fn ensure_success(response: Response) -> Result<Response, MatchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unable to read body".to_string());
    tracing::error!("Server error response: {} - {}", status, body);

    Err(MatchError::ServerError {
        status: status.as_u16(),
        body,
    })
}
