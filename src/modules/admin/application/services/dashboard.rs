use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::time::Instant;

use super::analytics_manager::AnalyticsManager;
use super::contact_manager::ContactManager;
use super::education_manager::EducationManager;
use super::experience_manager::ExperienceManager;
use super::manager_screen::{ScreenContext, ScreenSettings, UnsavedChanges};
use super::personal_info_manager::PersonalInfoManager;
use super::projects_manager::ProjectsManager;
use super::skills_manager::SkillsManager;
use crate::modules::admin::domain::{AdminTab, AdminTheme};
use crate::modules::analytics::domain::AnalyticsStats;
use crate::modules::auth::application::services::{LoginError, SessionGate};
use crate::modules::auth::domain::AdminSession;
use crate::modules::content::application::ports::outgoing::StorageError;
use crate::modules::content::application::services::{load_portfolio, ContentStorage};
use crate::modules::content::domain::ContentDomain;

pub const LOGOUT_PROMPT: &str = "You have unsaved changes. Are you sure you want to logout?";

/// One mounted manager per tab.
pub struct AdminScreens {
    pub personal: PersonalInfoManager,
    pub experience: ExperienceManager,
    pub projects: ProjectsManager,
    pub skills: SkillsManager,
    pub education: EducationManager,
    pub contact: ContactManager,
    pub analytics: AnalyticsManager,
}

impl AdminScreens {
    pub fn mount(ctx: &ScreenContext) -> Self {
        Self {
            personal: PersonalInfoManager::mount(ctx),
            experience: ExperienceManager::mount(ctx),
            projects: ProjectsManager::mount(ctx),
            skills: SkillsManager::mount(ctx),
            education: EducationManager::mount(ctx),
            contact: ContactManager::mount(ctx),
            analytics: AnalyticsManager::mount(ctx),
        }
    }

    /// Any mounted screen counts, not just the visible one.
    pub fn has_unsaved_changes(&self) -> bool {
        let screens: [&dyn UnsavedChanges; 7] = [
            &self.personal,
            &self.experience,
            &self.projects,
            &self.skills,
            &self.education,
            &self.contact,
            &self.analytics,
        ];
        screens.iter().any(|screen| screen.has_unsaved_changes())
    }

    pub fn tick(&mut self, now: Instant) {
        self.personal.tick(now);
        self.experience.tick(now);
        self.projects.tick(now);
        self.skills.tick(now);
        self.education.tick(now);
        self.contact.tick(now);
        self.analytics.tick(now);
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub total_projects: usize,
    pub total_experience: usize,
    pub skill_categories: usize,
    pub total_skills: usize,
    pub total_messages: usize,
    pub unread_messages: usize,
    pub analytics: AnalyticsStats,
}

/// Admin shell: login gate, tab navigation, theme preference and the
/// overview numbers. Dirtiness is always asked of the screens.
pub struct AdminDashboard {
    ctx: ScreenContext,
    gate: SessionGate,
    session: Option<AdminSession>,
    theme: AdminTheme,
    active_tab: AdminTab,
    screens: AdminScreens,
}

impl AdminDashboard {
    /// Restores a remembered session and the theme preference.
    pub fn open(ctx: ScreenContext, gate: SessionGate, now: DateTime<Utc>) -> Self {
        let session = gate.restore(now);
        let theme = load_theme(&ctx.storage);
        let screens = AdminScreens::mount(&ctx);

        Self {
            ctx,
            gate,
            session,
            theme,
            active_tab: AdminTab::default(),
            screens,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&AdminSession> {
        self.session.as_ref()
    }

    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<&AdminSession, LoginError> {
        let session = self.gate.login(username, password, now).await?;
        Ok(self.session.insert(session))
    }

    /// Asks first when any screen has unsaved changes. Returns
    /// `Ok(false)` when the user declines. Unsaved edits are dropped.
    pub fn logout(&mut self) -> Result<bool, StorageError> {
        if self.has_unsaved_changes() && !self.ctx.confirm.confirm(LOGOUT_PROMPT) {
            return Ok(false);
        }

        self.gate.logout()?;
        self.session = None;
        self.active_tab = AdminTab::default();
        self.screens = AdminScreens::mount(&self.ctx);
        Ok(true)
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.screens.has_unsaved_changes()
    }

    pub fn active_tab(&self) -> AdminTab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: AdminTab) {
        self.active_tab = tab;
    }

    pub fn screens(&self) -> &AdminScreens {
        &self.screens
    }

    pub fn screens_mut(&mut self) -> &mut AdminScreens {
        &mut self.screens
    }

    pub fn settings(&self) -> ScreenSettings {
        self.ctx.settings
    }

    pub fn theme(&self) -> AdminTheme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Result<AdminTheme, StorageError> {
        let next = self.theme.toggled();
        self.ctx
            .storage
            .write(ContentDomain::AdminTheme.storage_key(), &next)?;
        self.theme = next;
        Ok(next)
    }

    /// Saved content counts plus live inbox and analytics numbers.
    pub fn overview(&mut self, now: DateTime<Utc>) -> DashboardOverview {
        let portfolio = load_portfolio(&self.ctx.storage, &self.ctx.defaults);
        self.screens.contact.sync();

        DashboardOverview {
            total_projects: portfolio.projects.len(),
            total_experience: portfolio.experience.len(),
            skill_categories: portfolio.skills.len(),
            total_skills: portfolio.total_skills(),
            total_messages: self.screens.contact.messages().len(),
            unread_messages: self.screens.contact.unread_count(),
            analytics: self.screens.analytics.stats_at(now),
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.screens.tick(now);
    }
}

fn load_theme(storage: &ContentStorage) -> AdminTheme {
    let key = ContentDomain::AdminTheme.storage_key();
    storage
        .read::<AdminTheme>(key)
        .or_else(|| {
            storage
                .adapter()
                .get_item(key)
                .ok()
                .flatten()
                .and_then(|raw| AdminTheme::from_legacy(&raw))
        })
        .unwrap_or_default()
}
