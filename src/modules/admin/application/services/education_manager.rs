use tokio::time::Instant;

use super::manager_screen::{ManagerScreen, SaveOutcome, ScreenContext, UnsavedChanges};
use crate::modules::admin::domain::{EducationField, Notice};
use crate::modules::content::domain::{ContentDomain, EducationRecord};

pub struct EducationManager {
    screen: ManagerScreen<EducationRecord>,
}

impl EducationManager {
    pub fn mount(ctx: &ScreenContext) -> Self {
        Self {
            screen: ManagerScreen::mount(
                ctx,
                ContentDomain::Education,
                ctx.defaults.education.clone(),
                "Education data saved successfully!",
            ),
        }
    }

    pub fn record(&self) -> &EducationRecord {
        self.screen.current()
    }

    pub fn set_field(&mut self, field: EducationField, value: &str) {
        let value = value.to_string();
        self.screen.store_mut().modify(|record| match field {
            EducationField::School => record.school = value,
            EducationField::Major => record.major = value,
            EducationField::Period => record.period = value,
            EducationField::Gpa => record.gpa = value,
        });
    }

    pub fn can_save(&self) -> bool {
        self.screen.can_save()
    }

    pub async fn save(&mut self) -> SaveOutcome {
        self.screen.save().await
    }

    pub fn discard(&mut self) -> bool {
        self.screen.discard()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.screen.notice()
    }

    pub fn tick(&mut self, now: Instant) {
        self.screen.tick(now);
    }
}

impl UnsavedChanges for EducationManager {
    fn has_unsaved_changes(&self) -> bool {
        self.screen.has_unsaved_changes()
    }
}
