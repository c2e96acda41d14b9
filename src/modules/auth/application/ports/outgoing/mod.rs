mod credential_checker;

pub use credential_checker::CredentialChecker;
