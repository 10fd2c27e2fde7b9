use super::{
    handlers::{cases, health, upload},
    state::AppState,
};
use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

pub fn create_router(state: AppState) -> Router {
    let uploads_dir = state.config.uploads_dir.clone();

    Router::new()
        .route("/", get(health::root))
        // Health
        .route("/health", get(health::health_check))
        // Animal cases CRUD
        .route(
            "/api/v1/animals",
            get(cases::list_cases).post(cases::create_case),
        )
        .route(
            "/api/v1/animals/{case_id}",
            put(cases::update_case).delete(cases::delete_case),
        )
        // Image upload + GPS extraction
        .route("/api/v1/upload/image", post(upload::upload_image))
        // Stored images served straight from the content directory
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .with_state(state)
}
