mod content_storage;
mod content_store;
mod public_content;

pub use content_storage::{ContentStorage, SCHEMA_VERSION};
pub use content_store::{ContentStore, ListEditError, SaveError, DEFAULT_SAVE_DELAY};
pub use public_content::{load_portfolio, load_public_content, PublicContent, PublicContentService};
