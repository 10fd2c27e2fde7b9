use crate::{
    application::upload_image::dto::{UploadImageRequest, UploadImageResponse},
    infrastructure::{
        geolocation::exif_gps::{extract_gps, GpsExtraction},
        storage::traits::StorageService,
    },
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

/// Extension used when the client declares no filename or one without a
/// suffix; uploads are overwhelmingly phone-camera JPEGs.
const DEFAULT_EXTENSION: &str = ".jpg";

#[derive(Debug, Error)]
pub enum UploadError {
    /// Declared content type is missing or not `image/*`. Raised before any
    /// file I/O, so a rejected upload leaves no file behind.
    #[error("file must be an image")]
    InvalidMediaType,

    /// The content directory could not be created or the file could not be
    /// written. Fatal for the request and never retried.
    #[error("storage failure: {0}")]
    Storage(#[source] anyhow::Error),
}

/// Handles the image upload + geolocation pipeline.
///
/// The pipeline validates the declared media type, persists the bytes under
/// a collision-resistant generated name, then attempts EXIF GPS extraction.
/// Location is an enrichment only: every extraction failure degrades to
/// `has_gps=false` and the upload still succeeds.
pub struct UploadImageUseCase {
    storage: Arc<dyn StorageService>,
}

impl UploadImageUseCase {
    pub fn new(storage: Arc<dyn StorageService>) -> Self {
        Self { storage }
    }

    /// Process one upload end-to-end.
    ///
    /// # Errors
    ///
    /// * [`UploadError::InvalidMediaType`] if the declared content type is
    ///   absent or not in the image category.
    /// * [`UploadError::Storage`] if the file cannot be persisted.
    pub async fn execute(
        &self,
        request: UploadImageRequest,
    ) -> Result<UploadImageResponse, UploadError> {
        let is_image = request
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("image/"));
        if !is_image {
            return Err(UploadError::InvalidMediaType);
        }

        let extension = file_extension(request.filename.as_deref());
        let filename = format!("{}{}", Uuid::new_v4(), extension);

        let image_url = self
            .storage
            .save(&filename, &request.data)
            .await
            .map_err(UploadError::Storage)?;

        let (latitude, longitude) = match extract_gps(&request.data) {
            GpsExtraction::Found {
                latitude,
                longitude,
            } => {
                info!(%filename, latitude, longitude, "extracted GPS coordinates from upload");
                (Some(latitude), Some(longitude))
            }
            GpsExtraction::NotFound => {
                debug!(%filename, "upload carries no usable GPS metadata");
                (None, None)
            }
        };

        Ok(UploadImageResponse {
            image_url,
            has_gps: latitude.is_some() && longitude.is_some(),
            latitude,
            longitude,
        })
    }
}

/// Extension (including the dot) from a declared filename, or `.jpg` when
/// the name is absent or carries none.
fn file_extension(filename: Option<&str>) -> String {
    let ext = filename
        .and_then(|name| name.rsplit_once('.'))
        .filter(|(stem, ext)| !stem.is_empty() && !ext.is_empty() && !ext.contains('/'))
        .map(|(_, ext)| format!(".{ext}"));

    ext.unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}
