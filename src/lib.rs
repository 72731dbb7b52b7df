pub mod config;
pub mod contact;
pub mod db;
pub mod email;
pub mod error;
pub mod observability;
pub mod queries;
pub mod routes;

pub use routes::AppState;
