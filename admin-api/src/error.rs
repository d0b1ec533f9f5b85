use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication is no longer valid")]
    Unauthorized,
    #[error("request timed out")]
    Timeout,
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True for failures where the backend was never reached or never
    /// answered; the offline fallback applies only to these.
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, ApiError::Timeout | ApiError::Transport(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_qualify_for_fallback() {
        assert!(ApiError::Timeout.is_transport_failure());
        assert!(ApiError::Transport("connection refused".into()).is_transport_failure());
        assert!(!ApiError::Unauthorized.is_transport_failure());
        assert!(!ApiError::Status { status: 500, body: String::new() }.is_transport_failure());
    }
}
