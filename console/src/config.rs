use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_SESSION_FILE: &str = ".admin-console/session.json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub api_base_url: String,
    pub session_file: PathBuf,
    pub http_timeout: Duration,
    pub offline_fallback: bool,
}

pub fn load_console_config() -> Result<ConsoleConfig> {
    let api_base_url =
        env::var("CONSOLE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

    let session_file = env::var("CONSOLE_SESSION_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE));

    let http_timeout = match env::var("CONSOLE_HTTP_TIMEOUT_SECS") {
        Ok(value) => {
            let seconds: u64 = value
                .trim()
                .parse()
                .context("Failed to parse CONSOLE_HTTP_TIMEOUT_SECS")?;
            Duration::from_secs(seconds)
        }
        Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    };

    let offline_fallback = bool_from_env("CONSOLE_OFFLINE_FALLBACK").unwrap_or(false);

    Ok(ConsoleConfig {
        api_base_url,
        session_file,
        http_timeout,
        offline_fallback,
    })
}

fn bool_from_env(key: &str) -> Option<bool> {
    env::var(key).ok().map(|value| {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}
