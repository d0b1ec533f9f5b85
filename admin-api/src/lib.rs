pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod mock;
pub mod models;
pub mod resources;

pub use client::ApiClient;
pub use config::{ApiConfig, DEFAULT_TIMEOUT};
pub use error::{ApiError, ApiResult};
