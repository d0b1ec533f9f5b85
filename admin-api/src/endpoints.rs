use common_session::LoginPayload;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};

pub const LOGIN_PATH: &str = "/admin/auth/login";
pub const LOGOUT_SUPER_ADMIN_PATH: &str = "/admin/auth/logout";
pub const LOGOUT_STAFF_PATH: &str = "/admin/staff/logout";
pub const PERMISSIONS_PATH: &str = "/admin/auth/permissions";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct PermissionsResponse {
    permissions: Vec<String>,
}

impl ApiClient {
    /// Authenticate and return the raw login payload; the session store
    /// owns normalization and resolution.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginPayload> {
        self.post_json(LOGIN_PATH, &LoginRequest { email, password })
            .await
    }

    /// Logout endpoint for super-admin sessions.
    pub async fn logout_super_admin(&self) -> ApiResult<()> {
        match self.post_unit(LOGOUT_SUPER_ADMIN_PATH).await {
            // The 401 interceptor already cleared the session, which is
            // the outcome logout wanted anyway.
            Err(ApiError::Unauthorized) => Ok(()),
            other => other,
        }
    }

    /// Logout endpoint for staff (admin / sub-admin / vendor / partner)
    /// sessions.
    pub async fn logout_staff(&self) -> ApiResult<()> {
        match self.post_unit(LOGOUT_STAFF_PATH).await {
            Err(ApiError::Unauthorized) => Ok(()),
            other => other,
        }
    }

    /// Authoritative permission copy for the current super-admin
    /// session.
    pub async fn refresh_permissions(&self) -> ApiResult<Vec<String>> {
        let response: PermissionsResponse = self.get_json(PERMISSIONS_PATH).await?;
        Ok(response.permissions)
    }
}
