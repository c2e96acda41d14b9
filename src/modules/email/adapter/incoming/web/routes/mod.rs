mod send_email;

pub use send_email::{__path_send_email_handler, send_email_handler, EmailSentResponse};
