use std::path::Path;

use super::entities::{
    CareerGoals, ContactInfo, EducationRecord, ExperienceEntry, LinkKind, PersonalData,
    PortfolioContent, ProjectEntry, ProjectLink, SkillCategory, SkillIcon,
};

#[derive(Debug, thiserror::Error)]
pub enum DefaultsError {
    #[error("Failed to read defaults file {path}: {message}")]
    Read { path: String, message: String },

    #[error("Defaults file {path} is not a valid portfolio: {message}")]
    Parse { path: String, message: String },
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl PortfolioContent {
    /// Loads the default dataset from a JSON file shaped like
    /// [`PortfolioContent`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DefaultsError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| DefaultsError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| DefaultsError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Compiled-in dataset shown until the owner saves their own content.
    pub fn builtin() -> Self {
        Self {
            personal: PersonalData {
                personal_info: ContactInfo {
                    email: "jane.doe@example.com".to_string(),
                    phone: "+1 555 0100".to_string(),
                    location: "Lisbon, Portugal".to_string(),
                    github_url: "https://github.com/janedoe".to_string(),
                },
                summary: "I'm Jane Doe, a fullstack developer building backend services in Rust \
                          and interfaces in Svelte and React. I care about clean architecture, \
                          performance and shipping to production."
                    .to_string(),
                career_goals: CareerGoals {
                    short_term: "Deepen backend expertise in Rust and distributed systems while \
                                 sharpening frontend skills through real projects."
                        .to_string(),
                    long_term: "Lead the design of complex systems and contribute to open-source \
                                communities."
                        .to_string(),
                },
            },
            experience: vec![
                ExperienceEntry {
                    company: "Acme Corp".to_string(),
                    role: "Software Engineer".to_string(),
                    period: "2022 – Present".to_string(),
                    description: strings(&[
                        "Built and maintained backend services and RESTful APIs.",
                        "Deployed and operated websites on self-managed VPS hosts.",
                        "Optimized database queries and technical SEO.",
                    ]),
                },
                ExperienceEntry {
                    company: "Tech University Lab".to_string(),
                    role: "Backend Intern".to_string(),
                    period: "09/2021 – 12/2021".to_string(),
                    description: strings(&[
                        "Implemented authentication and role-based access.",
                        "Built customer and admin dashboards.",
                    ]),
                },
            ],
            projects: vec![
                ProjectEntry {
                    title: "Project Alpha".to_string(),
                    period: "2024".to_string(),
                    tech: strings(&["Rust", "actix-web", "PostgreSQL"]),
                    description: "Management platform with real-time monitoring, reporting and \
                                  multi-tenant user management."
                        .to_string(),
                    links: vec![ProjectLink {
                        label: "GitHub".to_string(),
                        url: "https://github.com/janedoe/project-alpha".to_string(),
                        kind: LinkKind::Github,
                    }],
                    images: strings(&["/images/alpha1.png", "/images/alpha2.png"]),
                    interactive_preview_url: None,
                },
                ProjectEntry {
                    title: "Project Beta".to_string(),
                    period: "2025 – Present".to_string(),
                    tech: strings(&["SvelteKit", "TypeScript", "Tailwind CSS"]),
                    description: "Content creation tool with templates and export options."
                        .to_string(),
                    links: vec![ProjectLink {
                        label: "Live Demo".to_string(),
                        url: "https://project-beta.example.com".to_string(),
                        kind: LinkKind::Live,
                    }],
                    images: strings(&["/images/beta1.png"]),
                    interactive_preview_url: Some("https://project-beta.example.com".to_string()),
                },
            ],
            skills: vec![
                SkillCategory {
                    title: "Programming Languages".to_string(),
                    skills: strings(&["Rust", "TypeScript", "Python", "SQL"]),
                    icon_ref: SkillIcon::Code,
                },
                SkillCategory {
                    title: "Backend Frameworks".to_string(),
                    skills: strings(&["actix-web", "axum", "Node.js", "RESTful APIs"]),
                    icon_ref: SkillIcon::Server,
                },
                SkillCategory {
                    title: "Databases".to_string(),
                    skills: strings(&["PostgreSQL", "Redis", "SQLite"]),
                    icon_ref: SkillIcon::Database,
                },
            ],
            education: EducationRecord {
                school: "Tech University".to_string(),
                major: "B.Sc. in Computer Science".to_string(),
                period: "2017 – 2021".to_string(),
                gpa: "3.8 / 4.0".to_string(),
            },
        }
    }
}
