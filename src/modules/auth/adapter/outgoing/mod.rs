mod placeholder_checker;

pub use placeholder_checker::{DisabledCredentialChecker, PlaceholderCredentialChecker};
