use admin_api::ApiError;
use common_session::roles::canonical_token;
use common_session::{StorageError, ROLE_SUPER_ADMIN};
use thiserror::Error;
use tracing::{info, warn};

use crate::context::AppContext;

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Api(ApiError),
    #[error(transparent)]
    Session(#[from] StorageError),
}

impl AppContext {
    /// Authenticate against the backend and establish the session. A
    /// rejected credential surfaces as a form-level error; no session
    /// is created.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), LoginError> {
        let payload = self.api.login(email, password).await.map_err(|err| match err {
            ApiError::Unauthorized => LoginError::InvalidCredentials,
            other => LoginError::Api(other),
        })?;

        self.store.login(payload)?;
        info!(roles = ?self.store.snapshot().map(|s| s.roles), "login completed");
        Ok(())
    }

    /// End the session. The endpoint call is best-effort and selected
    /// by the primary role (legacy stored role when the session carries
    /// none); local clearing always proceeds, so logout cannot fail.
    pub async fn logout(&self) {
        let result = if self.logout_as_super_admin() {
            self.api.logout_super_admin().await
        } else {
            self.api.logout_staff().await
        };

        if let Err(err) = result {
            warn!(error = %err, "logout endpoint failed; clearing local session anyway");
        }

        self.store.clear();
    }

    fn logout_as_super_admin(&self) -> bool {
        match self.store.primary_role() {
            Some(role) => role == ROLE_SUPER_ADMIN,
            None => self
                .store
                .legacy_role()
                .map(|role| canonical_token(&role) == ROLE_SUPER_ADMIN)
                .unwrap_or(false),
        }
    }
}
