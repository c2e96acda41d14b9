mod get_public_content;

pub use get_public_content::{GetPublicContentUseCase, SectionContent};
