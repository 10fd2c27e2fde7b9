//! PetRescue Map API.
//!
//! Backend for reporting stray or at-risk animals: volunteers submit a
//! description, coordinates, and a photo; the service stores the image,
//! extracts GPS coordinates from EXIF metadata when available, and keeps an
//! in-memory registry of open cases.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
