use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::admin::application::services::ScreenSettings;
use crate::auth::adapter::outgoing::PlaceholderCredentialChecker;
use crate::auth::domain::DEFAULT_SESSION_TTL_HOURS;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {key} value: '{value}'")]
    Invalid { key: &'static str, value: String },

    #[error("{0} must be set")]
    Missing(&'static str),
}

/// Where contact notifications go out through.
#[derive(Clone, PartialEq, Eq)]
pub enum MailTransport {
    /// Authenticated relay, used outside the test environment.
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Plain SMTP to a local catcher such as Mailpit.
    Local { host: String, port: u16 },
    /// No SMTP settings at all; mails are kept in memory.
    Disabled,
}

impl fmt::Debug for MailTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relay {
                server, username, ..
            } => f
                .debug_struct("Relay")
                .field("server", server)
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Self::Local { host, port } => f
                .debug_struct("Local")
                .field("host", host)
                .field("port", port)
                .finish(),
            Self::Disabled => f.write_str("Disabled"),
        }
    }
}

/// Username and password for the placeholder admin gate.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub content_dir: PathBuf,
    pub defaults_file: Option<PathBuf>,
    pub save_delay: Duration,
    pub notice_ttl: Duration,
    /// `None` leaves the admin gate closed to every login.
    pub admin: Option<AdminCredentials>,
    pub session_ttl_hours: i64,
    pub email_from: Option<String>,
    pub contact_inbox: Option<String>,
    pub mail: MailTransport,
}

impl AppConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 3002;
    pub const DEFAULT_CONTENT_DIR: &'static str = "./data";
    pub const DEFAULT_ADMIN_USERNAME: &'static str = "admin";

    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = get("RUST_ENV").unwrap_or_else(|| "development".to_string());
        let host = get("HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string());
        let port = parse_or(&get, "PORT", Self::DEFAULT_PORT)?;
        let content_dir = PathBuf::from(
            get("CONTENT_DIR").unwrap_or_else(|| Self::DEFAULT_CONTENT_DIR.to_string()),
        );
        let defaults_file = get("DEFAULTS_FILE").map(PathBuf::from);

        let save_delay = Duration::from_millis(parse_or(&get, "SAVE_DELAY_MS", 1000u64)?);
        let notice_ttl = Duration::from_secs(parse_or(&get, "NOTICE_TTL_SECS", 3u64)?);

        let admin = get("ADMIN_PASSWORD").map(|password| AdminCredentials {
            username: get("ADMIN_USERNAME")
                .unwrap_or_else(|| Self::DEFAULT_ADMIN_USERNAME.to_string()),
            password,
        });
        let session_ttl_hours =
            parse_or(&get, "ADMIN_SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS)?;
        if session_ttl_hours <= 0 || chrono::Duration::try_hours(session_ttl_hours).is_none() {
            return Err(ConfigError::Invalid {
                key: "ADMIN_SESSION_TTL_HOURS",
                value: session_ttl_hours.to_string(),
            });
        }

        let email_from = get("EMAIL_FROM");
        let contact_inbox = get("CONTACT_INBOX").or_else(|| email_from.clone());

        let mail = if environment == "test" {
            MailTransport::Local {
                host: get("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_or(&get, "SMTP_PORT", 1025u16)?,
            }
        } else {
            match get("SMTP_SERVER") {
                Some(server) => MailTransport::Relay {
                    server,
                    username: get("SMTP_USERNAME").ok_or(ConfigError::Missing("SMTP_USERNAME"))?,
                    password: get("SMTP_PASSWORD").ok_or(ConfigError::Missing("SMTP_PASSWORD"))?,
                },
                None => MailTransport::Disabled,
            }
        };

        if mail != MailTransport::Disabled && email_from.is_none() {
            return Err(ConfigError::Missing("EMAIL_FROM"));
        }

        Ok(Self {
            environment,
            host,
            port,
            content_dir,
            defaults_file,
            save_delay,
            notice_ttl,
            admin,
            session_ttl_hours,
            email_from,
            contact_inbox,
            mail,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn screen_settings(&self) -> ScreenSettings {
        ScreenSettings {
            save_delay: self.save_delay,
            notice_ttl: self.notice_ttl,
        }
    }

    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.session_ttl_hours)
    }

    pub fn credential_checker(&self) -> Option<PlaceholderCredentialChecker> {
        self.admin
            .as_ref()
            .map(|a| PlaceholderCredentialChecker::new(&a.username, &a.password))
    }
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
            key,
            value: raw,
        }),
        None => Ok(default),
    }
}
