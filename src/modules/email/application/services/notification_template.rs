use chrono::{DateTime, Utc};
use minijinja::{context, Environment};

use crate::modules::contact::domain::NewContactMessage;

const TEMPLATE_NAME: &str = "contact_notification.html";

// The `.html` suffix turns on auto-escaping for every interpolated value.
const TEMPLATE: &str = r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <div style="background: linear-gradient(135deg, #10b981 0%, #059669 100%); padding: 30px; border-radius: 10px 10px 0 0;">
    <h2 style="color: white; margin: 0;">New Contact Message</h2>
  </div>
  <div style="background: #f9fafb; padding: 30px; border-radius: 0 0 10px 10px;">
    <div style="background: white; padding: 20px; border-radius: 8px; margin-bottom: 20px;">
      <h3 style="color: #1f2937; margin-top: 0;">Contact Information</h3>
      <p style="margin: 10px 0;"><strong>Name:</strong> {{ name }}</p>
      <p style="margin: 10px 0;"><strong>Email:</strong> <a href="mailto:{{ email }}">{{ email }}</a></p>
      <p style="margin: 10px 0;"><strong>Subject:</strong> {{ subject }}</p>
    </div>
    <div style="background: white; padding: 20px; border-radius: 8px;">
      <h3 style="color: #1f2937; margin-top: 0;">Message</h3>
      <p style="color: #4b5563; line-height: 1.6; white-space: pre-wrap;">{{ message }}</p>
    </div>
    <div style="margin-top: 20px; padding-top: 20px; border-top: 1px solid #e5e7eb; text-align: center; color: #6b7280; font-size: 14px;">
      <p>Sent from Portfolio Contact Form</p>
      <p>Reply directly to this email to respond to {{ name }}</p>
      <p>{{ sent_at }}</p>
    </div>
  </div>
</div>
"#;

pub fn render_contact_notification(
    submission: &NewContactMessage,
    sent_at: DateTime<Utc>,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, TEMPLATE)?;

    env.get_template(TEMPLATE_NAME)?.render(context! {
        name => submission.name.trim(),
        email => submission.email.trim(),
        subject => submission.subject.trim(),
        message => &submission.message,
        sent_at => sent_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    })
}
