use super::list_manager::{blank_fields, parse_comma_list, parse_line_list, ListEntry, ListManager};
use crate::modules::admin::domain::LinkField;
use crate::modules::content::application::services::ListEditError;
use crate::modules::content::domain::{
    ContentDomain, LinkKind, PortfolioContent, ProjectEntry, ProjectLink,
};

pub type ProjectsManager = ListManager<ProjectEntry>;

impl ListEntry for ProjectEntry {
    const DOMAIN: ContentDomain = ContentDomain::Projects;
    const NOUN: &'static str = "project";
    const SAVED_MESSAGE: &'static str = "Projects data saved successfully!";

    fn blank() -> Self {
        ProjectEntry {
            title: String::new(),
            period: String::new(),
            tech: Vec::new(),
            description: String::new(),
            links: Vec::new(),
            images: Vec::new(),
            interactive_preview_url: None,
        }
    }

    fn defaults(content: &PortfolioContent) -> Vec<Self> {
        content.projects.clone()
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        blank_fields([
            ("title", &self.title),
            ("description", &self.description),
            ("period", &self.period),
        ])
    }
}

/// `"Rust, Axum, Postgres"` into the tech list.
pub fn parse_tech_list(input: &str) -> Vec<String> {
    parse_comma_list(input)
}

pub fn set_tech(project: &mut ProjectEntry, input: &str) {
    project.tech = parse_tech_list(input);
}

/// One image path per line.
pub fn set_images(project: &mut ProjectEntry, input: &str) {
    project.images = parse_line_list(input);
}

/// A blank preview URL clears it.
pub fn set_preview_url(project: &mut ProjectEntry, url: &str) {
    let url = url.trim();
    project.interactive_preview_url = (!url.is_empty()).then(|| url.to_string());
}

pub fn add_link(project: &mut ProjectEntry) {
    project.links.push(ProjectLink {
        label: String::new(),
        url: String::new(),
        kind: LinkKind::Live,
    });
}

fn link_mut(project: &mut ProjectEntry, index: usize) -> Result<&mut ProjectLink, ListEditError> {
    let len = project.links.len();
    project
        .links
        .get_mut(index)
        .ok_or(ListEditError::IndexOutOfBounds { index, len })
}

pub fn set_link(
    project: &mut ProjectEntry,
    index: usize,
    field: LinkField,
    value: &str,
) -> Result<(), ListEditError> {
    let link = link_mut(project, index)?;
    match field {
        LinkField::Label => link.label = value.to_string(),
        LinkField::Url => link.url = value.to_string(),
    }
    Ok(())
}

pub fn set_link_kind(
    project: &mut ProjectEntry,
    index: usize,
    kind: LinkKind,
) -> Result<(), ListEditError> {
    link_mut(project, index)?.kind = kind;
    Ok(())
}

pub fn remove_link(project: &mut ProjectEntry, index: usize) -> Result<ProjectLink, ListEditError> {
    let len = project.links.len();
    if index >= len {
        return Err(ListEditError::IndexOutOfBounds { index, len });
    }
    Ok(project.links.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::admin::application::ports::outgoing::MockConfirmation;
    use crate::modules::admin::application::services::{EntryError, ScreenSettings};
    use crate::modules::content::domain::ProjectPreview;
    use crate::tests::support::fixtures::screen_context;

    #[test]
    fn test_draft_requires_title_description_and_period() {
        let (_, ctx) = screen_context(MockConfirmation::new(), ScreenSettings::instant());
        let mut manager = ProjectsManager::mount(&ctx);

        let draft = manager.start_new();
        draft.title = "CLI".to_string();
        set_tech(draft, "Rust, clap");

        assert_eq!(
            manager.commit_new(),
            Err(EntryError::Incomplete {
                missing: vec!["description", "period"]
            })
        );

        let draft = manager.draft_mut().unwrap();
        draft.description = "A command line tool".to_string();
        draft.period = "2025".to_string();
        manager.commit_new().unwrap();

        assert_eq!(manager.entries()[0].title, "CLI");
        assert_eq!(manager.entries()[0].tech, vec!["Rust", "clap"]);
    }

    #[test]
    fn test_link_helpers() {
        let mut project = ProjectEntry::blank();
        add_link(&mut project);
        add_link(&mut project);

        set_link(&mut project, 0, LinkField::Label, "Source").unwrap();
        set_link(&mut project, 0, LinkField::Url, "https://github.com/a/b").unwrap();
        set_link_kind(&mut project, 0, LinkKind::Github).unwrap();
        let removed = remove_link(&mut project, 1).unwrap();

        assert_eq!(removed.kind, LinkKind::Live);
        assert_eq!(project.links.len(), 1);
        assert_eq!(project.links[0].kind, LinkKind::Github);
        assert!(set_link(&mut project, 5, LinkField::Url, "x").is_err());
    }

    #[test]
    fn test_images_and_preview_url() {
        let mut project = ProjectEntry::blank();
        set_images(&mut project, "/shots/1.png\n\n/shots/2.png");
        assert_eq!(project.images.len(), 2);

        set_preview_url(&mut project, "  ");
        assert!(matches!(project.preview(), ProjectPreview::Gallery(_)));

        set_preview_url(&mut project, "https://demo.example.com ");
        assert_eq!(
            project.preview(),
            ProjectPreview::Interactive("https://demo.example.com")
        );
    }
}
