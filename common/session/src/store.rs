use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use crate::permissions;
use crate::roles;
use crate::session::{LoginPayload, Session, UserIdentity};
use crate::storage::{SessionStorage, StorageResult};

/// Session lifecycle. `Loading` lasts from construction until
/// `rehydrate` finishes; authorization queries are indeterminate until
/// then and callers render a waiting state, not a denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Anonymous,
    Authenticated,
}

struct StoreState {
    phase: SessionPhase,
    session: Option<Session>,
    legacy_role: Option<String>,
}

/// Sole owner of session state, in memory and on disk. Every mutation
/// commits memory and storage together; consumers read through
/// synchronous accessors.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    state: RwLock<StoreState>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            storage,
            state: RwLock::new(StoreState {
                phase: SessionPhase::Loading,
                session: None,
                legacy_role: None,
            }),
        }
    }

    /// Populate state from the persisted record, re-deriving permissions
    /// from role defaults when the stored set is empty. Always leaves
    /// `Loading`; an unreadable or malformed record logs a warning and
    /// lands in `Anonymous`.
    pub fn rehydrate(&self) {
        let loaded = self.storage.load();
        let mut state = self.state.write().expect("session lock poisoned");

        match loaded {
            Ok(Some(record)) if !record.token.is_empty() => {
                let permissions = if record.permissions.is_empty() {
                    permissions::resolve(None, &record.roles)
                } else {
                    record.permissions.into_iter().collect()
                };

                debug!(
                    roles = ?record.roles,
                    permission_count = permissions.len(),
                    "rehydrated persisted session"
                );

                state.session = Some(Session {
                    token: record.token,
                    refresh_token: record.refresh_token,
                    roles: record.roles,
                    permissions,
                    user: UserIdentity { id: record.user_id },
                });
                state.legacy_role = record.legacy_role;
                state.phase = SessionPhase::Authenticated;
            }
            Ok(_) => {
                state.phase = SessionPhase::Anonymous;
            }
            Err(err) => {
                warn!(error = %err, "failed to load persisted session; starting anonymous");
                state.phase = SessionPhase::Anonymous;
            }
        }
    }

    /// Create a session from a login response: normalize roles, resolve
    /// permissions, persist the whole record in one write, then commit
    /// memory state. Nothing is committed if persistence fails.
    pub fn login(&self, payload: LoginPayload) -> StorageResult<()> {
        let roles = roles::normalize(payload.roles.as_ref());
        let permissions = permissions::resolve(payload.permissions.as_deref(), &roles);

        let session = Session {
            token: payload.token,
            refresh_token: payload.refresh_token,
            roles,
            permissions,
            user: payload.user.unwrap_or_default(),
        };

        self.storage.store(&session.to_record())?;

        let mut state = self.state.write().expect("session lock poisoned");
        debug!(roles = ?session.roles, "session established");
        state.session = Some(session);
        state.legacy_role = None;
        state.phase = SessionPhase::Authenticated;
        Ok(())
    }

    /// Drop the session everywhere. Storage failure is logged and does
    /// not keep the in-memory session alive; from the caller's
    /// perspective clearing cannot fail.
    pub fn clear(&self) {
        if let Err(err) = self.storage.clear() {
            warn!(error = %err, "failed to clear persisted session");
        }

        let mut state = self.state.write().expect("session lock poisoned");
        state.session = None;
        state.legacy_role = None;
        state.phase = SessionPhase::Anonymous;
    }

    /// Replace the permission set with an authoritative server copy and
    /// persist the updated record. No-op when unauthenticated.
    pub fn replace_permissions(&self, permissions: BTreeSet<String>) -> StorageResult<()> {
        let mut state = self.state.write().expect("session lock poisoned");
        let Some(session) = state.session.as_mut() else {
            return Ok(());
        };

        session.permissions = permissions;
        let record = session.to_record();
        drop(state);

        self.storage.store(&record)
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.read().expect("session lock poisoned").phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase() == SessionPhase::Loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase() == SessionPhase::Authenticated
    }

    /// Current session, if authenticated. `None` both while loading and
    /// when anonymous; check `is_loading` to tell the two apart.
    pub fn snapshot(&self) -> Option<Session> {
        self.state
            .read()
            .expect("session lock poisoned")
            .session
            .clone()
    }

    pub fn primary_role(&self) -> Option<String> {
        self.snapshot()
            .and_then(|session| session.primary_role().map(str::to_string))
    }

    /// Legacy stored role entry, used only as a logout-endpoint fallback
    /// when the session carries no roles.
    pub fn legacy_role(&self) -> Option<String> {
        self.state
            .read()
            .expect("session lock poisoned")
            .legacy_role
            .clone()
    }
}
