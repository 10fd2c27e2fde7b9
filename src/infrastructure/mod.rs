pub mod geolocation;
pub mod repositories;
pub mod storage;
