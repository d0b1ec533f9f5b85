use std::collections::BTreeSet;

use serde::Deserialize;

use crate::roles::{contains_super_admin, RawRoles};
use crate::storage::PersistedSession;

/// Minimal identity carried by the session; the id is opaque.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserIdentity {
    #[serde(default)]
    pub id: String,
}

/// The authenticated client's state: credential plus derived
/// authorization sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub refresh_token: Option<String>,
    pub roles: Vec<String>,
    pub permissions: BTreeSet<String>,
    pub user: UserIdentity,
}

impl Session {
    /// First role in insertion order; the heuristic used for
    /// logout-endpoint selection.
    pub fn primary_role(&self) -> Option<&str> {
        self.roles.first().map(String::as_str)
    }

    pub fn is_super_admin(&self) -> bool {
        contains_super_admin(&self.roles)
    }

    pub(crate) fn to_record(&self) -> PersistedSession {
        PersistedSession {
            token: self.token.clone(),
            refresh_token: self.refresh_token.clone(),
            roles: self.roles.clone(),
            permissions: self.permissions.iter().cloned().collect(),
            user_id: self.user.id.clone(),
            legacy_role: None,
        }
    }
}

/// Login response body as the backend sends it. Roles arrive in
/// whatever shape the endpoint produces; permissions may be absent
/// entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginPayload {
    pub token: String,
    #[serde(default, rename = "refreshToken", alias = "refresh_token")]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub roles: Option<RawRoles>,
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
    #[serde(default)]
    pub user: Option<UserIdentity>,
}
