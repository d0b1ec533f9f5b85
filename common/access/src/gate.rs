use std::sync::Arc;

use common_session::roles::canonical_token;
use common_session::{Session, SessionStore};
use tracing::debug;

use crate::policy::{self, RouteRequirement};

/// Outcome of a route check. `Pending` means the store has not finished
/// rehydrating; render a waiting state, never a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    Denied,
    Pending,
}

/// The consumer-facing authorization contract. Pure and synchronous
/// over the store's current snapshot; the super-admin override is
/// decided in one place, before any other lookup.
#[derive(Clone)]
pub struct AccessGate {
    store: Arc<SessionStore>,
}

impl AccessGate {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    /// False only while the store is still rehydrating; boolean checks
    /// are not trustworthy until this returns true.
    pub fn is_ready(&self) -> bool {
        !self.store.is_loading()
    }

    fn session(&self) -> Option<Session> {
        self.store.snapshot()
    }

    /// The one super-admin check every query consults first.
    fn overrides_all(session: &Session) -> bool {
        session.is_super_admin()
    }

    pub fn has_role(&self, role: &str) -> bool {
        let Some(session) = self.session() else {
            return false;
        };
        if Self::overrides_all(&session) {
            return true;
        }
        if role.is_empty() {
            return false;
        }
        let wanted = canonical_token(role);
        session.roles.iter().any(|held| *held == wanted)
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        let Some(session) = self.session() else {
            return false;
        };
        if Self::overrides_all(&session) {
            return true;
        }
        if permission.is_empty() {
            return false;
        }
        session.permissions.contains(permission)
    }

    /// An empty list never satisfies "any", for every session.
    pub fn has_any_permission(&self, permissions: &[&str]) -> bool {
        if permissions.is_empty() {
            return false;
        }
        let Some(session) = self.session() else {
            return false;
        };
        if Self::overrides_all(&session) {
            return true;
        }
        permissions
            .iter()
            .any(|permission| session.permissions.contains(*permission))
    }

    /// An empty list never satisfies "all", for every session.
    pub fn has_all_permissions(&self, permissions: &[&str]) -> bool {
        if permissions.is_empty() {
            return false;
        }
        let Some(session) = self.session() else {
            return false;
        };
        if Self::overrides_all(&session) {
            return true;
        }
        permissions
            .iter()
            .all(|permission| session.permissions.contains(*permission))
    }

    pub fn can_access_route(&self, path: &str) -> bool {
        matches!(self.route_decision(path), AccessDecision::Granted)
    }

    /// Authentication precedes permission: an anonymous session is
    /// denied every route. Unmapped paths default-permit.
    pub fn route_decision(&self, path: &str) -> AccessDecision {
        if self.store.is_loading() {
            return AccessDecision::Pending;
        }
        let Some(session) = self.session() else {
            return AccessDecision::Denied;
        };
        if Self::overrides_all(&session) {
            return AccessDecision::Granted;
        }

        let granted = match policy::requirement_for(path) {
            None => true,
            Some(RouteRequirement::Public) => true,
            Some(RouteRequirement::Permission(permission)) => self.has_permission(permission),
            Some(RouteRequirement::AnyOf(permissions)) => self.has_any_permission(permissions),
        };

        if granted {
            AccessDecision::Granted
        } else {
            debug!(path, roles = ?session.roles, "route access denied");
            AccessDecision::Denied
        }
    }
}
