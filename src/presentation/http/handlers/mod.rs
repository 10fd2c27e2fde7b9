pub mod cases;
pub mod health;
pub mod upload;
