pub mod entities;

pub use entities::{
    ContactMessage, ContactStats, NewContactMessage, ReadFilter, ValidationError, MAX_MESSAGES,
};
