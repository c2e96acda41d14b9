use tokio::time::Instant;

use super::manager_screen::{ManagerScreen, SaveOutcome, ScreenContext, UnsavedChanges};
use crate::modules::admin::domain::{Notice, PersonalField};
use crate::modules::content::domain::{ContentDomain, PersonalData};

pub struct PersonalInfoManager {
    screen: ManagerScreen<PersonalData>,
}

impl PersonalInfoManager {
    pub fn mount(ctx: &ScreenContext) -> Self {
        Self {
            screen: ManagerScreen::mount(
                ctx,
                ContentDomain::PersonalInfo,
                ctx.defaults.personal.clone(),
                "Personal information saved successfully!",
            ),
        }
    }

    pub fn data(&self) -> &PersonalData {
        self.screen.current()
    }

    pub fn field(&self, field: PersonalField) -> &str {
        let data = self.screen.current();
        match field {
            PersonalField::Email => &data.personal_info.email,
            PersonalField::Phone => &data.personal_info.phone,
            PersonalField::Location => &data.personal_info.location,
            PersonalField::GithubUrl => &data.personal_info.github_url,
            PersonalField::Summary => &data.summary,
            PersonalField::ShortTermGoal => &data.career_goals.short_term,
            PersonalField::LongTermGoal => &data.career_goals.long_term,
        }
    }

    pub fn set_field(&mut self, field: PersonalField, value: &str) {
        let value = value.to_string();
        self.screen.store_mut().modify(|data| {
            let slot = match field {
                PersonalField::Email => &mut data.personal_info.email,
                PersonalField::Phone => &mut data.personal_info.phone,
                PersonalField::Location => &mut data.personal_info.location,
                PersonalField::GithubUrl => &mut data.personal_info.github_url,
                PersonalField::Summary => &mut data.summary,
                PersonalField::ShortTermGoal => &mut data.career_goals.short_term,
                PersonalField::LongTermGoal => &mut data.career_goals.long_term,
            };
            *slot = value;
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

    pub fn screen(&self) -> &ManagerScreen<PersonalData> {
        &self.screen
    }
}

impl UnsavedChanges for PersonalInfoManager {
    fn has_unsaved_changes(&self) -> bool {
        self.screen.has_unsaved_changes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::admin::application::ports::outgoing::MockConfirmation;
    use crate::modules::admin::application::services::ScreenSettings;
    use crate::modules::content::application::services::load_public_content;
    use crate::tests::support::fixtures::screen_context;

    #[tokio::test]
    async fn test_field_edits_mark_dirty_and_save_reaches_public_side() {
        let (_, ctx) = screen_context(MockConfirmation::new(), ScreenSettings::instant());
        let mut manager = PersonalInfoManager::mount(&ctx);

        manager.set_field(PersonalField::Location, "Porto, Portugal");
        manager.set_field(PersonalField::LongTermGoal, "Run a studio");
        assert!(manager.has_unsaved_changes());
        assert_eq!(manager.field(PersonalField::Location), "Porto, Portugal");

        assert_eq!(manager.save().await, SaveOutcome::Saved);
        assert!(!manager.has_unsaved_changes());

        let public =
            load_public_content(&ctx.storage, ContentDomain::PersonalInfo, &ctx.defaults.personal);
        assert_eq!(public.personal_info.location, "Porto, Portugal");
        assert_eq!(public.career_goals.long_term, "Run a studio");
    }

    #[test]
    fn test_setting_the_same_value_is_not_a_change() {
        let (_, ctx) = screen_context(MockConfirmation::new(), ScreenSettings::instant());
        let mut manager = PersonalInfoManager::mount(&ctx);
        let email = manager.field(PersonalField::Email).to_string();

        manager.set_field(PersonalField::Email, &email);

        assert!(!manager.has_unsaved_changes());
        assert!(!manager.can_save());
    }
}
