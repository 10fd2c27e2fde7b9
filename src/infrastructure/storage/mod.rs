pub mod local_storage_service;
pub mod traits;
