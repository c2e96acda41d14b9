use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::content::domain::{
    EducationRecord, ExperienceEntry, PersonalData, PortfolioContent, ProjectEntry, PublicSection,
    SkillCategory,
};

/// One public section, serialized as the bare stored shape.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum SectionContent {
    Personal(PersonalData),
    Experience(Vec<ExperienceEntry>),
    Projects(Vec<ProjectEntry>),
    Skills(Vec<SkillCategory>),
    Education(EducationRecord),
}

/// Never fails: unreadable content degrades to the defaults.
#[async_trait]
pub trait GetPublicContentUseCase: Send + Sync {
    async fn portfolio(&self) -> PortfolioContent;

    async fn section(&self, section: PublicSection) -> SectionContent;
}
