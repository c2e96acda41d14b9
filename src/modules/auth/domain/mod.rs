mod admin_session;

pub use admin_session::{AdminSession, DEFAULT_SESSION_TTL_HOURS};
