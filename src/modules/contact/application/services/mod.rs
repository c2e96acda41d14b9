mod contact_inbox;

pub use contact_inbox::{ContactInbox, ImportError, InboxError};
