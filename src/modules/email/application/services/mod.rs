mod contact_mail_service;
mod notification_template;

pub use contact_mail_service::ContactMailService;
pub use notification_template::render_contact_notification;
