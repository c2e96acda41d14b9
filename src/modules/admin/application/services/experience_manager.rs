use super::list_manager::{blank_fields, ListEntry, ListManager};
use crate::modules::content::application::services::ListEditError;
use crate::modules::content::domain::{ContentDomain, ExperienceEntry, PortfolioContent};

pub type ExperienceManager = ListManager<ExperienceEntry>;

impl ListEntry for ExperienceEntry {
    const DOMAIN: ContentDomain = ContentDomain::Experience;
    const NOUN: &'static str = "experience";
    const SAVED_MESSAGE: &'static str = "Experience data saved successfully!";

    fn blank() -> Self {
        ExperienceEntry {
            company: String::new(),
            role: String::new(),
            period: String::new(),
            description: vec![String::new()],
        }
    }

    fn defaults(content: &PortfolioContent) -> Vec<Self> {
        content.experience.clone()
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        blank_fields([
            ("company", &self.company),
            ("role", &self.role),
            ("period", &self.period),
        ])
    }
}

pub fn add_bullet(entry: &mut ExperienceEntry) {
    entry.description.push(String::new());
}

pub fn set_bullet(
    entry: &mut ExperienceEntry,
    index: usize,
    value: &str,
) -> Result<(), ListEditError> {
    let len = entry.description.len();
    let slot = entry
        .description
        .get_mut(index)
        .ok_or(ListEditError::IndexOutOfBounds { index, len })?;
    *slot = value.to_string();
    Ok(())
}

/// The last remaining bullet cannot be removed. Returns whether a bullet
/// was removed.
pub fn remove_bullet(entry: &mut ExperienceEntry, index: usize) -> bool {
    if entry.description.len() <= 1 || index >= entry.description.len() {
        return false;
    }
    entry.description.remove(index);
    true
}
