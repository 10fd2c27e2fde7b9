use bytes::Bytes;
use serde::Serialize;

/// Raw upload as received from the multipart form, before any validation.
#[derive(Debug, Clone)]
pub struct UploadImageRequest {
    /// Content type declared by the client for the file part.
    pub content_type: Option<String>,

    /// Original filename declared by the client, used only for its extension.
    pub filename: Option<String>,

    /// Full file payload.
    pub data: Bytes,
}

/// Result of a successful upload.
///
/// `latitude`/`longitude` serialize as `null` when no GPS block could be
/// decoded; `has_gps` is always `latitude.is_some() && longitude.is_some()`.
#[derive(Debug, Clone, Serialize)]
pub struct UploadImageResponse {
    pub image_url: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub has_gps: bool,
}
