mod session_gate;

pub use session_gate::{LoginError, SessionGate, DEFAULT_LOGIN_DELAY};
