mod get_public_portfolio;
mod get_public_section;

pub use get_public_portfolio::{__path_get_public_portfolio_handler, get_public_portfolio_handler};
pub use get_public_section::{__path_get_public_section_handler, get_public_section_handler};
