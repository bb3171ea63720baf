pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod image_host;
pub mod observability;
pub mod routes;

pub use routes::AppState;
