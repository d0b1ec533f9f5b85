pub mod auth;
pub mod config;
pub mod context;
pub mod telemetry;

pub use auth::LoginError;
pub use config::{load_console_config, ConsoleConfig};
pub use context::AppContext;
