pub mod admin;
pub mod analytics;
pub mod auth;
pub mod contact;
pub mod content;
pub mod email;
