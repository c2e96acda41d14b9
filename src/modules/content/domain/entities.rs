use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Anything a content store can hold and persist.
///
/// `is_well_formed` is the second half of the defensive read: serde rejects
/// blobs with missing or mistyped fields, this rejects blobs that parse but
/// cannot be displayed.
pub trait Content:
    Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    fn is_well_formed(&self) -> bool {
        true
    }
}

impl<T: Content> Content for Vec<T> {
    fn is_well_formed(&self) -> bool {
        self.iter().all(Content::is_well_formed)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(alias = "github")]
    pub github_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CareerGoals {
    pub short_term: String,
    pub long_term: String,
}

/// Contact details, summary and goals are edited and saved as one unit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonalData {
    pub personal_info: ContactInfo,
    pub summary: String,
    pub career_goals: CareerGoals,
}

impl Content for PersonalData {}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub period: String,
    /// Bullet points, in display order.
    pub description: Vec<String>,
}

impl Content for ExperienceEntry {}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Live,
    Github,
    Android,
    Ios,
    Doc,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLink {
    pub label: String,
    pub url: String,
    #[serde(alias = "type")]
    pub kind: LinkKind,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub title: String,
    pub period: String,
    pub tech: Vec<String>,
    pub description: String,
    pub links: Vec<ProjectLink>,
    pub images: Vec<String>,
    #[serde(
        default,
        alias = "iframeUrl",
        skip_serializing_if = "Option::is_none"
    )]
    pub interactive_preview_url: Option<String>,
}

/// What the public projects section shows for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectPreview<'a> {
    Interactive(&'a str),
    Gallery(&'a [String]),
    Nothing,
}

impl ProjectEntry {
    /// An interactive preview always wins over the image gallery.
    pub fn preview(&self) -> ProjectPreview<'_> {
        match self.interactive_preview_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => ProjectPreview::Interactive(url),
            _ if !self.images.is_empty() => ProjectPreview::Gallery(&self.images),
            _ => ProjectPreview::Nothing,
        }
    }
}

impl Content for ProjectEntry {}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SkillIcon {
    #[serde(alias = "Code2")]
    Code,
    #[serde(alias = "Server")]
    Server,
    #[serde(alias = "Smartphone")]
    Smartphone,
    #[serde(alias = "Database")]
    Database,
    #[serde(alias = "Wrench")]
    Wrench,
    #[serde(alias = "Layers")]
    Layers,
}

impl SkillIcon {
    pub const ALL: [SkillIcon; 6] = [
        SkillIcon::Code,
        SkillIcon::Server,
        SkillIcon::Smartphone,
        SkillIcon::Database,
        SkillIcon::Wrench,
        SkillIcon::Layers,
    ];

    /// Label shown in the admin icon picker.
    pub fn label(&self) -> &'static str {
        match self {
            SkillIcon::Code => "Programming",
            SkillIcon::Server => "Backend",
            SkillIcon::Smartphone => "Mobile",
            SkillIcon::Database => "Database",
            SkillIcon::Wrench => "Tools",
            SkillIcon::Layers => "Frameworks",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
    #[serde(alias = "icon")]
    pub icon_ref: SkillIcon,
}

impl Content for SkillCategory {}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EducationRecord {
    pub school: String,
    pub major: String,
    pub period: String,
    pub gpa: String,
}

impl Content for EducationRecord {}

/// Everything the public pages render, one field per content domain.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioContent {
    pub personal: PersonalData,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Vec<SkillCategory>,
    pub education: EducationRecord,
}

impl PortfolioContent {
    pub fn total_skills(&self) -> usize {
        self.skills.iter().map(|c| c.skills.len()).sum()
    }
}
