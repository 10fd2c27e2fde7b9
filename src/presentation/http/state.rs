use crate::{
    application::upload_image::use_case::UploadImageUseCase, config::Config,
    domain::case::repository::CaseRepository,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub case_repo: Arc<dyn CaseRepository>,
    pub uploader: Arc<UploadImageUseCase>,
}
