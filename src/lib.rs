pub mod config;
mod error;
pub mod exchange_service;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result, ValidationError, ValidationKind, INTERNAL_ERROR_MESSAGE};
pub use exchange_service::convert;
