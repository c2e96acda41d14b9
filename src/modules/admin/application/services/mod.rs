mod analytics_manager;
mod contact_manager;
mod dashboard;
mod education_manager;
mod experience_manager;
mod form_binding;
mod list_manager;
mod manager_screen;
mod personal_info_manager;
mod projects_manager;
mod skills_manager;

pub use analytics_manager::{AnalyticsManager, CLEAR_ANALYTICS_PROMPT, RECENT_VISITS};
pub use contact_manager::{ContactManager, CLEAR_MESSAGES_PROMPT, DELETE_MESSAGE_PROMPT};
pub use dashboard::{AdminDashboard, AdminScreens, DashboardOverview, LOGOUT_PROMPT};
pub use education_manager::EducationManager;
pub use experience_manager::{add_bullet, remove_bullet, set_bullet, ExperienceManager};
pub use form_binding::{BufferedInput, DEFAULT_DEBOUNCE};
pub use list_manager::{parse_comma_list, parse_line_list, EntryError, ListEntry, ListManager};
pub use manager_screen::{
    ManagerScreen, SaveOutcome, SaveProgress, ScreenContext, ScreenSettings, UnsavedChanges,
    DISCARD_PROMPT, SAVE_FAILED_MESSAGE,
};
pub use personal_info_manager::PersonalInfoManager;
pub use projects_manager::{
    add_link, parse_tech_list, remove_link, set_images, set_link, set_link_kind, set_preview_url,
    set_tech, ProjectsManager,
};
pub use skills_manager::{set_icon, set_skills, SkillsManager};
