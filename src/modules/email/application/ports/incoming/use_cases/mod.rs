mod send_contact_email;

pub use send_contact_email::{ContactMailError, SendContactEmailUseCase};
