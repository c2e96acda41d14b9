use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::events::ChangeSignal;

/// One storage slot per domain. No two domains share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentDomain {
    PersonalInfo,
    Experience,
    Projects,
    Skills,
    Education,
    ContactMessages,
    Analytics,
    AdminSession,
    AdminTheme,
}

impl ContentDomain {
    pub const ALL: [ContentDomain; 9] = [
        ContentDomain::PersonalInfo,
        ContentDomain::Experience,
        ContentDomain::Projects,
        ContentDomain::Skills,
        ContentDomain::Education,
        ContentDomain::ContactMessages,
        ContentDomain::Analytics,
        ContentDomain::AdminSession,
        ContentDomain::AdminTheme,
    ];

    pub fn storage_key(&self) -> &'static str {
        match self {
            ContentDomain::PersonalInfo => "portfolio_personal_data",
            ContentDomain::Experience => "portfolio_experience_data",
            ContentDomain::Projects => "portfolio_projects_data",
            ContentDomain::Skills => "portfolio_skills_data",
            ContentDomain::Education => "portfolio_education_data",
            ContentDomain::ContactMessages => "portfolio_contact_messages",
            ContentDomain::Analytics => "portfolio_analytics",
            ContentDomain::AdminSession => "admin_auth",
            ContentDomain::AdminTheme => "admin_theme",
        }
    }

    /// Signal published after a successful write to this domain.
    pub fn signal(&self) -> ChangeSignal {
        match self {
            ContentDomain::PersonalInfo
            | ContentDomain::Experience
            | ContentDomain::Projects
            | ContentDomain::Skills
            | ContentDomain::Education => ChangeSignal::PortfolioContentChanged,
            ContentDomain::ContactMessages => ChangeSignal::ContactMessagesChanged,
            ContentDomain::Analytics => ChangeSignal::AnalyticsUpdated,
            ContentDomain::AdminSession | ContentDomain::AdminTheme => {
                ChangeSignal::AdminSessionChanged
            }
        }
    }
}

impl fmt::Display for ContentDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_key())
    }
}

/// The domains rendered by the public pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PublicSection {
    Personal,
    Experience,
    Projects,
    Skills,
    Education,
}

impl From<PublicSection> for ContentDomain {
    fn from(section: PublicSection) -> Self {
        match section {
            PublicSection::Personal => ContentDomain::PersonalInfo,
            PublicSection::Experience => ContentDomain::Experience,
            PublicSection::Projects => ContentDomain::Projects,
            PublicSection::Skills => ContentDomain::Skills,
            PublicSection::Education => ContentDomain::Education,
        }
    }
}
