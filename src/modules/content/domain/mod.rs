pub mod content_domain;
pub mod defaults;
pub mod entities;

pub use content_domain::{ContentDomain, PublicSection};
pub use defaults::DefaultsError;
pub use entities::*;
