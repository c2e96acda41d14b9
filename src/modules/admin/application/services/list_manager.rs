use tokio::time::Instant;

use super::manager_screen::{ManagerScreen, SaveOutcome, ScreenContext, UnsavedChanges};
use crate::modules::admin::domain::Notice;
use crate::modules::content::application::services::ListEditError;
use crate::modules::content::domain::{Content, ContentDomain, PortfolioContent};

/// An entry type edited through a [`ListManager`].
pub trait ListEntry: Content {
    const DOMAIN: ContentDomain;
    /// Used in prompts, e.g. "delete this experience".
    const NOUN: &'static str;
    const SAVED_MESSAGE: &'static str;

    fn blank() -> Self;
    fn defaults(content: &PortfolioContent) -> Vec<Self>;
    /// Names of required fields that are still empty.
    fn missing_fields(&self) -> Vec<&'static str>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("No entry is being drafted")]
    NoDraft,

    #[error("No entry is being edited")]
    NotEditing,

    #[error("Missing required fields: {}", .missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },

    #[error(transparent)]
    Index(#[from] ListEditError),
}

/// Add, edit and delete for a list-shaped domain. New entries are drafted
/// off to the side and only land at the head of the list once their
/// required fields are filled in.
pub struct ListManager<I: ListEntry> {
    screen: ManagerScreen<Vec<I>>,
    draft: Option<I>,
    editing: Option<(usize, I)>,
}

impl<I: ListEntry> ListManager<I> {
    pub fn mount(ctx: &ScreenContext) -> Self {
        Self {
            screen: ManagerScreen::mount(
                ctx,
                I::DOMAIN,
                I::defaults(&ctx.defaults),
                I::SAVED_MESSAGE,
            ),
            draft: None,
            editing: None,
        }
    }

    pub fn entries(&self) -> &[I] {
        self.screen.current()
    }

    pub fn start_new(&mut self) -> &mut I {
        self.draft.insert(I::blank())
    }

    pub fn draft(&self) -> Option<&I> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut I> {
        self.draft.as_mut()
    }

    /// Moves the draft to the head of the list. An incomplete draft stays
    /// where it is and the list is untouched.
    pub fn commit_new(&mut self) -> Result<(), EntryError> {
        let draft = self.draft.as_ref().ok_or(EntryError::NoDraft)?;
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            return Err(EntryError::Incomplete { missing });
        }

        let entry = self.draft.take().ok_or(EntryError::NoDraft)?;
        self.screen.store_mut().insert_at(0, entry)?;
        // Indices shifted by one.
        if let Some((index, _)) = self.editing.as_mut() {
            *index += 1;
        }
        Ok(())
    }

    pub fn cancel_new(&mut self) {
        self.draft = None;
    }

    pub fn start_edit(&mut self, index: usize) -> Result<&mut I, EntryError> {
        let len = self.entries().len();
        let entry = self
            .entries()
            .get(index)
            .cloned()
            .ok_or(ListEditError::IndexOutOfBounds { index, len })?;
        let (_, entry) = self.editing.insert((index, entry));
        Ok(entry)
    }

    pub fn editing(&self) -> Option<(usize, &I)> {
        self.editing.as_ref().map(|(index, entry)| (*index, entry))
    }

    pub fn editing_mut(&mut self) -> Option<&mut I> {
        self.editing.as_mut().map(|(_, entry)| entry)
    }

    /// Writes the edited copy back in place.
    pub fn commit_edit(&mut self) -> Result<(), EntryError> {
        let (index, entry) = self.editing.take().ok_or(EntryError::NotEditing)?;
        self.screen.store_mut().update_at(index, entry)?;
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Returns `Ok(false)` when the user declines.
    pub fn delete(&mut self, index: usize) -> Result<bool, EntryError> {
        let len = self.entries().len();
        if index >= len {
            return Err(ListEditError::IndexOutOfBounds { index, len }.into());
        }
        let prompt = format!("Are you sure you want to delete this {}?", I::NOUN);
        if !self.screen.confirm(&prompt) {
            return Ok(false);
        }

        self.screen.store_mut().remove_at(index)?;
        self.editing = match self.editing.take() {
            Some((i, _)) if i == index => None,
            Some((i, entry)) if i > index => Some((i - 1, entry)),
            other => other,
        };
        Ok(true)
    }

    pub fn can_save(&self) -> bool {
        self.screen.can_save()
    }

    pub async fn save(&mut self) -> SaveOutcome {
        self.screen.save().await
    }

    pub fn discard(&mut self) -> bool {
        let discarded = self.screen.discard();
        if discarded {
            self.editing = None;
        }
        discarded
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.screen.notice()
    }

    pub fn tick(&mut self, now: Instant) {
        self.screen.tick(now);
    }

    pub fn screen(&self) -> &ManagerScreen<Vec<I>> {
        &self.screen
    }
}

impl<I: ListEntry> UnsavedChanges for ListManager<I> {
    fn has_unsaved_changes(&self) -> bool {
        self.screen.has_unsaved_changes()
    }
}

pub(crate) fn blank_fields<const N: usize>(
    fields: [(&'static str, &str); N],
) -> Vec<&'static str> {
    fields
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
}

/// Splits a comma-separated input such as `"Rust, Go , ,SQL"` into
/// trimmed, non-empty items.
pub fn parse_comma_list(input: &str) -> Vec<String> {
    split_trimmed(input, ',')
}

/// One item per line, blank lines dropped.
pub fn parse_line_list(input: &str) -> Vec<String> {
    split_trimmed(input, '\n')
}

fn split_trimmed(input: &str, separator: char) -> Vec<String> {
    input
        .split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
