pub mod permissions;
pub mod roles;
pub mod session;
pub mod storage;
pub mod store;

pub use roles::{canonical_token, normalize, RawRole, RawRoles, RoleObject};
pub use roles::{
    ROLE_ADMIN, ROLE_CUSTOMER, ROLE_DELIVERY_PARTNER, ROLE_SUB_ADMIN, ROLE_SUPER_ADMIN,
    ROLE_VENDOR,
};
pub use session::{LoginPayload, Session, UserIdentity};
pub use storage::{FileStorage, MemoryStorage, PersistedSession, SessionStorage, StorageError};
pub use store::{SessionPhase, SessionStore};
