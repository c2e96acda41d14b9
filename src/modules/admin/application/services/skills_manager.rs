use super::list_manager::{parse_comma_list, ListEntry, ListManager};
use crate::modules::content::domain::{ContentDomain, PortfolioContent, SkillCategory, SkillIcon};

pub type SkillsManager = ListManager<SkillCategory>;

impl ListEntry for SkillCategory {
    const DOMAIN: ContentDomain = ContentDomain::Skills;
    const NOUN: &'static str = "skill category";
    const SAVED_MESSAGE: &'static str = "Skills data saved successfully!";

    fn blank() -> Self {
        SkillCategory {
            title: String::new(),
            skills: Vec::new(),
            icon_ref: SkillIcon::Code,
        }
    }

    fn defaults(content: &PortfolioContent) -> Vec<Self> {
        content.skills.clone()
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.skills.is_empty() {
            missing.push("skills");
        }
        missing
    }
}

pub fn set_skills(category: &mut SkillCategory, input: &str) {
    category.skills = parse_comma_list(input);
}

pub fn set_icon(category: &mut SkillCategory, icon: SkillIcon) {
    category.icon_ref = icon;
}
