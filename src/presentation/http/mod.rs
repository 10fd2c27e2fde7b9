pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;
