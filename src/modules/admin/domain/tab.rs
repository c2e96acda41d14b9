use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Overview,
    Analytics,
    Personal,
    Experience,
    Projects,
    Skills,
    Education,
    Contact,
}

impl AdminTab {
    pub const ALL: [AdminTab; 8] = [
        AdminTab::Overview,
        AdminTab::Analytics,
        AdminTab::Personal,
        AdminTab::Experience,
        AdminTab::Projects,
        AdminTab::Skills,
        AdminTab::Education,
        AdminTab::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Overview => "Overview",
            AdminTab::Analytics => "Analytics",
            AdminTab::Personal => "Personal Info",
            AdminTab::Experience => "Experience",
            AdminTab::Projects => "Projects",
            AdminTab::Skills => "Skills",
            AdminTab::Education => "Education",
            AdminTab::Contact => "Messages",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AdminTab::Overview => "Dashboard & analytics",
            AdminTab::Analytics => "Website statistics",
            AdminTab::Personal => "Manage contact & bio",
            AdminTab::Experience => "Work history & roles",
            AdminTab::Projects => "Portfolio showcase",
            AdminTab::Skills => "Technical expertise",
            AdminTab::Education => "Academic background",
            AdminTab::Contact => "Contact form inbox",
        }
    }
}

impl fmt::Display for AdminTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
