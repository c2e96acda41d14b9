use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::modules::email::application::ports::outgoing::{EmailSender, OutgoingEmail};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    /// TLS relay with credentials. Fails only if the relay host cannot be
    /// used to build a TLS configuration.
    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
    ) -> Result<Self, String> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| e.to_string())?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(Box::new(transport), from_email))
    }

    // Plain local SMTP (Mailpit, MailHog) for development and test runs.
    pub fn new_local(host: &str, port: u16, from_email: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self::new_with_mailer(Box::new(transport), from_email)
    }

    fn build_message(&self, email: &OutgoingEmail) -> Result<Message, String> {
        let mut builder = Message::builder()
            .from(self.from_email.parse().map_err(|e| format!("{:?}", e))?)
            .to(email.to.parse().map_err(|e| format!("{:?}", e))?);

        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(reply_to.parse().map_err(|e| format!("{:?}", e))?);
        }

        builder
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_HTML)
            .body(email.html_body.clone())
            .map_err(|e| e.to_string())
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, email: &OutgoingEmail) -> Result<(), String> {
        let message = self.build_message(email)?;
        self.mailer.send(message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default, Clone)]
    struct CapturingMailer {
        sent: Arc<Mutex<Vec<Vec<u8>>>>,
    }

    #[async_trait]
    impl Mailer for CapturingMailer {
        async fn send(&self, email: Message) -> Result<(), String> {
            self.sent.lock().unwrap().push(email.formatted());
            Ok(())
        }
    }

    struct UnreachableMailer;

    #[async_trait]
    impl Mailer for UnreachableMailer {
        async fn send(&self, _: Message) -> Result<(), String> {
            panic!("Should not reach mailer when the message cannot be built");
        }
    }

    fn email(to: &str, reply_to: Option<&str>) -> OutgoingEmail {
        OutgoingEmail {
            to: to.to_string(),
            reply_to: reply_to.map(str::to_string),
            subject: "Portfolio Contact: Hello".to_string(),
            html_body: "<p>Hi</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_email_sets_reply_to_header() {
        let mailer = CapturingMailer::default();
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(mailer.clone()), "noreply@example.com");

        let result = sender
            .send_email(&email("owner@example.com", Some("ana@example.com")))
            .await;
        assert!(result.is_ok(), "Expected Ok, got {:?}", result);

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let raw = String::from_utf8_lossy(&sent[0]);
        assert!(raw.contains("Reply-To: ana@example.com"), "{}", raw);
        assert!(raw.contains("To: owner@example.com"), "{}", raw);
        assert!(raw.contains("Subject: Portfolio Contact: Hello"), "{}", raw);
    }

    #[tokio::test]
    async fn test_send_email_without_reply_to() {
        let mailer = CapturingMailer::default();
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(mailer.clone()), "noreply@example.com");

        sender
            .send_email(&email("owner@example.com", None))
            .await
            .unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert!(!String::from_utf8_lossy(&sent[0]).contains("Reply-To:"));
    }

    #[tokio::test]
    async fn test_send_email_invalid_from_address() {
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(UnreachableMailer), "invalid-from-email");

        let result = sender.send_email(&email("owner@example.com", None)).await;

        assert!(result.is_err(), "Expected error from invalid 'from' address");
    }

    #[tokio::test]
    async fn test_send_email_invalid_reply_to_address() {
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(UnreachableMailer), "noreply@example.com");

        let result = sender
            .send_email(&email("owner@example.com", Some("not-an-email")))
            .await;

        assert!(result.is_err(), "Expected error from invalid 'reply-to' address");
    }

    #[tokio::test]
    async fn test_send_email_propagates_transport_error() {
        struct FailingMailer;
        #[async_trait]
        impl Mailer for FailingMailer {
            async fn send(&self, _: Message) -> Result<(), String> {
                Err("connection refused".to_string())
            }
        }

        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(FailingMailer), "noreply@example.com");

        let result = sender.send_email(&email("owner@example.com", None)).await;

        assert_eq!(result, Err("connection refused".to_string()));
    }
}
