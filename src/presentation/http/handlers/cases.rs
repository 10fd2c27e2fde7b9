use crate::{
    domain::case::entity::{AnimalCase, CaseId, CasePatch, NewCase},
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCaseRequest {
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,

    #[validate(range(min = -90.0, max = 90.0, message = "latitude out of range"))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "longitude out of range"))]
    pub longitude: f64,

    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCaseRequest {
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "latitude out of range"))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "longitude out of range"))]
    pub longitude: Option<f64>,

    pub image_url: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CaseResponse {
    pub id: CaseId,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: Option<String>,
    pub status: String,
}

impl From<AnimalCase> for CaseResponse {
    fn from(case: AnimalCase) -> Self {
        Self {
            id: case.id,
            description: case.description,
            latitude: case.latitude,
            longitude: case.longitude,
            image_url: case.image_url,
            status: case.status,
        }
    }
}

/// Path ids come in as strings; anything that does not parse to a case id
/// behaves exactly like an unknown id.
fn parse_case_id(raw: &str) -> Result<CaseId, AppError> {
    raw.parse::<CaseId>()
        .map_err(|_| AppError::NotFound("Case not found".to_string()))
}

pub async fn list_cases(
    State(state): State<AppState>,
) -> Result<Json<Vec<CaseResponse>>, AppError> {
    let cases = state.case_repo.list().await?;
    Ok(Json(cases.into_iter().map(CaseResponse::from).collect()))
}

pub async fn create_case(
    State(state): State<AppState>,
    Json(payload): Json<CreateCaseRequest>,
) -> Result<(StatusCode, Json<CaseResponse>), AppError> {
    payload.validate()?;

    let case = state
        .case_repo
        .create(NewCase {
            description: payload.description,
            latitude: payload.latitude,
            longitude: payload.longitude,
            image_url: payload.image_url,
        })
        .await?;

    tracing::info!(case_id = %case.id, "created animal case");
    Ok((StatusCode::CREATED, Json(case.into())))
}

pub async fn update_case(
    State(state): State<AppState>,
    Path(case_id): Path<String>,
    Json(payload): Json<UpdateCaseRequest>,
) -> Result<Json<CaseResponse>, AppError> {
    payload.validate()?;
    let id = parse_case_id(&case_id)?;

    let updated = state
        .case_repo
        .update(
            id,
            CasePatch {
                description: payload.description,
                latitude: payload.latitude,
                longitude: payload.longitude,
                image_url: payload.image_url,
                status: payload.status,
            },
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Case not found".to_string()))?;

    Ok(Json(updated.into()))
}

pub async fn delete_case(
    State(state): State<AppState>,
    Path(case_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_case_id(&case_id)?;

    if state.case_repo.delete(id).await? {
        tracing::info!(case_id = %id, "deleted animal case");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Case not found".to_string()))
    }
}
