use serde::{Deserialize, Serialize};

use crate::modules::content::domain::Content;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AdminTheme {
    #[default]
    Dark,
    Light,
}

impl AdminTheme {
    pub fn toggled(self) -> Self {
        match self {
            AdminTheme::Dark => AdminTheme::Light,
            AdminTheme::Light => AdminTheme::Dark,
        }
    }

    /// Accepts the bare `dark` / `light` strings written by older builds.
    pub fn from_legacy(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(AdminTheme::Dark),
            "light" => Some(AdminTheme::Light),
            _ => None,
        }
    }
}

impl Content for AdminTheme {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&AdminTheme::Light).unwrap(), "\"light\"");
        assert_eq!(AdminTheme::default(), AdminTheme::Dark);
        assert_eq!(AdminTheme::Dark.toggled(), AdminTheme::Light);
    }

    #[test]
    fn test_from_legacy() {
        assert_eq!(AdminTheme::from_legacy("light"), Some(AdminTheme::Light));
        assert_eq!(AdminTheme::from_legacy("sepia"), None);
    }
}
