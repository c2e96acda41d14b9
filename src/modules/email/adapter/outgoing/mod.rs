pub mod recording_sender;
pub mod smtp_sender;

pub use recording_sender::RecordingEmailSender;
pub use smtp_sender::{Mailer, SmtpEmailSender};
