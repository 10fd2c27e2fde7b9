use crate::{
    application::upload_image::dto::{UploadImageRequest, UploadImageResponse},
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Multipart, State},
};

/// `POST /api/v1/upload/image` — multipart upload with a single `file` part.
///
/// The part's declared content type must be `image/*`; everything after that
/// point is best-effort, so a photo without (or with broken) GPS metadata
/// still uploads fine and simply reports `has_gps: false`.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadImageResponse>, AppError> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::BadRequest("Malformed multipart body".into()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        // Field metadata must be captured before the body is consumed.
        let content_type = field.content_type().map(str::to_string);
        let filename = field.file_name().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|_| AppError::BadRequest("Failed to read file body".into()))?;

        upload = Some(UploadImageRequest {
            content_type,
            filename,
            data,
        });
        break;
    }

    let request = upload.ok_or_else(|| AppError::BadRequest("Missing file field".into()))?;
    let response = state.uploader.execute(request).await?;

    Ok(Json(response))
}
