//! Email notification service using lettre

use crate::config::EmailConfig;
use crate::contact::ContactSubmission;
use lettre::{
    Message, SmtpTransport, Transport, message::Mailbox, message::header::ContentType,
    transport::smtp::authentication::Credentials,
};
use tracing::{error, info};

/// Email service for sending submission notifications
///
/// Holds no transport when SMTP credentials are absent; the submission
/// handler checks `is_configured` before doing any work.
#[derive(Clone)]
pub struct EmailService {
    mailer: Option<SmtpTransport>,
    from: String,
    notify_address: String,
    skip_sending: bool,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            info!(
                smtp_host = %config.smtp_host,
                "SMTP credentials not configured, submissions will be rejected"
            );
            None
        } else {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                notify_address = %config.notify_address,
                "Email service initialized with authentication and TLS"
            );
            // SmtpTransport::relay() uses STARTTLS by default, which is
            // appropriate for most SMTP servers on port 587
            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());
            Some(
                SmtpTransport::relay(&config.smtp_host)?
                    .port(config.smtp_port)
                    .credentials(creds)
                    .build(),
            )
        };

        let from = if config.from_address.is_empty() {
            config.smtp_username.clone()
        } else {
            config.from_address.clone()
        };

        Ok(Self {
            mailer,
            from,
            notify_address: config.notify_address.clone(),
            skip_sending: false,
        })
    }

    /// Create a mock email service for testing (skips actual SMTP)
    ///
    /// This function is intended for test use only. It reports itself as
    /// configured, logs email operations, and never opens a connection.
    pub fn new_mock(config: &EmailConfig) -> Self {
        info!(
            notify_address = %config.notify_address,
            "Mock email service initialized (SMTP calls skipped)"
        );

        Self {
            mailer: None,
            from: "mock@localhost".to_string(),
            notify_address: config.notify_address.clone(),
            skip_sending: true,
        }
    }

    /// Whether SMTP credentials were supplied at construction
    pub fn is_configured(&self) -> bool {
        self.mailer.is_some() || self.skip_sending
    }

    /// Send the new-submission notification to the operator inbox
    pub async fn send_contact_notification(
        &self,
        submission: &ContactSubmission,
    ) -> anyhow::Result<()> {
        let body = format!(
            "New Contact Form Submission\n\
             ============================\n\n\
             From: {} <{}>\n\
             Status: {}\n\
             Submitted: {}\n\n\
             Message:\n\
             {}\n",
            submission.name,
            submission.email,
            submission.status,
            submission.created_at.to_rfc3339(),
            submission.message
        );

        self.send(
            &self.notify_address,
            &format!("New contact form submission from {}", submission.name),
            body,
        )
    }

    /// Send the acknowledgment email back to the submitter
    pub async fn send_confirmation(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        let body = format!(
            "Hi {},\n\n\
             Thanks for reaching out. Your message has been received and we \
             will get back to you as soon as possible.\n\n\
             Your message:\n\
             {}\n",
            submission.name, submission.message
        );

        self.send(
            &submission.email,
            "Your message has been received",
            body,
        )
    }

    fn send(&self, to: &str, subject: &str, body: String) -> anyhow::Result<()> {
        if self.skip_sending {
            info!(to = %to, subject = %subject, "Mock email service: skipping SMTP send");
            return Ok(());
        }

        let Some(mailer) = &self.mailer else {
            anyhow::bail!("email credentials are not configured");
        };

        let from: Mailbox = self.from.parse()?;
        let to_mailbox: Mailbox = to.parse()?;

        let email = Message::builder()
            .from(from)
            .to(to_mailbox)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)?;

        match mailer.send(&email) {
            Ok(_) => {
                info!(to = %to, subject = %subject, "Email sent successfully");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, to = %to, "Failed to send email via SMTP");
                Err(anyhow::anyhow!("SMTP error: {e}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactStatus;
    use chrono::Utc;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            id: 1,
            name: "Jane Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            message: "Hello, I'd like to get in touch.".to_string(),
            status: ContactStatus::New,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_service_without_credentials_is_unconfigured() {
        let service = EmailService::new(&EmailConfig::default()).unwrap();
        assert!(!service.is_configured());
    }

    #[test]
    fn test_service_with_credentials_is_configured() {
        let config = EmailConfig {
            smtp_username: "owner@example.com".to_string(),
            smtp_password: "secret".to_string(),
            ..EmailConfig::default()
        };

        let service = EmailService::new(&config).unwrap();
        assert!(service.is_configured());
    }

    #[tokio::test]
    async fn test_mock_service_sends_without_smtp() {
        let service = EmailService::new_mock(&EmailConfig::default());
        assert!(service.is_configured());

        let submission = submission();
        assert!(service.send_contact_notification(&submission).await.is_ok());
        assert!(service.send_confirmation(&submission).await.is_ok());
    }

    #[tokio::test]
    async fn test_unconfigured_service_refuses_to_send() {
        let service = EmailService::new(&EmailConfig::default()).unwrap();
        let result = service.send_contact_notification(&submission()).await;
        assert!(result.is_err());
    }
}
