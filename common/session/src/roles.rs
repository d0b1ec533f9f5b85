use serde::{Deserialize, Serialize};
use tracing::warn;

pub const ROLE_SUPER_ADMIN: &str = "SUPER_ADMIN";
pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_SUB_ADMIN: &str = "SUB_ADMIN";
pub const ROLE_VENDOR: &str = "VENDOR";
pub const ROLE_DELIVERY_PARTNER: &str = "DELIVERY_PARTNER";
pub const ROLE_CUSTOMER: &str = "CUSTOMER";

pub const KNOWN_ROLES: &[&str] = &[
    ROLE_SUPER_ADMIN,
    ROLE_ADMIN,
    ROLE_SUB_ADMIN,
    ROLE_VENDOR,
    ROLE_DELIVERY_PARTNER,
    ROLE_CUSTOMER,
];

/// Role input as it arrives from the backend: absent, one role, or a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRoles {
    One(RawRole),
    Many(Vec<RawRole>),
}

impl RawRoles {
    pub fn iter(&self) -> impl Iterator<Item = &RawRole> {
        match self {
            RawRoles::One(role) => std::slice::from_ref(role).iter(),
            RawRoles::Many(roles) => roles.iter(),
        }
    }
}

/// A single role entry: either a plain string or an object whose role
/// token hides behind one of several historical field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRole {
    Name(String),
    Object(RoleObject),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, rename = "roleCode", skip_serializing_if = "Option::is_none")]
    pub role_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, rename = "roleName", skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
}

impl RoleObject {
    /// Field preference order for extracting the role token.
    pub const FIELD_PREFERENCE: &'static [&'static str] =
        &["code", "roleCode", "name", "role", "roleName"];

    /// The first populated field, in `FIELD_PREFERENCE` order.
    pub fn preferred_value(&self) -> Option<&str> {
        [
            &self.code,
            &self.role_code,
            &self.name,
            &self.role,
            &self.role_name,
        ]
        .into_iter()
        .find_map(|field| field.as_deref())
    }
}

/// Canonical form of a role token: uppercase, each whitespace run
/// collapsed to a single underscore. Idempotent.
pub fn canonical_token(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_uppercase()
}

/// Canonicalize heterogeneous role input into an ordered token list.
///
/// Input order is preserved and duplicates are kept; consumers treat the
/// list with set semantics. Role objects that carry none of the known
/// fields are dropped with a warning rather than stringified into a
/// pseudo-role.
pub fn normalize(raw: Option<&RawRoles>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.iter()
        .filter_map(|role| match role {
            RawRole::Name(name) => Some(canonical_token(name)),
            RawRole::Object(object) => match object.preferred_value() {
                Some(value) => Some(canonical_token(value)),
                None => {
                    warn!(?object, "role object carries no recognized field; skipping");
                    None
                }
            },
        })
        .collect()
}

pub fn contains_super_admin(roles: &[String]) -> bool {
    roles.iter().any(|role| role == ROLE_SUPER_ADMIN)
}
