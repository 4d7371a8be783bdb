//! Outbound email. Sends are best-effort: a broken SMTP relay must never
//! fail the request that triggered the notification.

use crate::configuration::SmtpSettings;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl Mailer {
    pub fn new(settings: &SmtpSettings) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
            .unwrap_or_else(|_| {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
            })
            .port(settings.port)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();

        Mailer {
            transport,
            from: settings.from.clone(),
        }
    }

    #[tracing::instrument(name = "Send email.", skip(self, html))]
    pub async fn send(&self, to: &str, subject: &str, html: &str) {
        let message = Message::builder()
            .from(match self.from.parse() {
                Ok(mailbox) => mailbox,
                Err(err) => {
                    tracing::error!("invalid sender address {:?}: {:?}", self.from, err);
                    return;
                }
            })
            .to(match to.parse() {
                Ok(mailbox) => mailbox,
                Err(err) => {
                    tracing::error!("invalid recipient address {:?}: {:?}", to, err);
                    return;
                }
            })
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html.to_string());

        match message {
            Ok(message) => {
                if let Err(err) = self.transport.send(message).await {
                    tracing::error!("email to {} not sent: {:?}", to, err);
                }
            }
            Err(err) => {
                tracing::error!("could not build email to {}: {:?}", to, err);
            }
        }
    }

    pub async fn send_password_reset(&self, to: &str, reset_link: &str) {
        let html = format!(
            "<p>You requested a password reset.</p>\
             <p>Click <a href=\"{}\">here</a> to choose a new password. \
             The link expires in one hour.</p>\
             <p>If you did not request this, you can ignore this email.</p>",
            reset_link
        );
        self.send(to, "Password Reset Request", &html).await;
    }

    pub async fn send_business_status(&self, to: &str, business_name: &str, status: &str) {
        let html = format!(
            "<p>Your business <strong>{}</strong> has been {}.</p>",
            business_name, status
        );
        self.send(to, "Business Application Update", &html).await;
    }
}
