//! SMTP transport backed by lettre

use super::{DeliveryReceipt, MailError, Mailer, OutgoingMail};
use crate::config::MailConfig;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, warn};

/// Submission port; upgraded with STARTTLS instead of implicit TLS
const SUBMISSION_PORT: u16 = 587;

/// Pooled async SMTP client, built once at startup
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    /// Sender used when the submitter's address is unusable
    operator: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let operator: Mailbox = config.operator_address.parse().map_err(|e| {
            MailError::InvalidAddress(format!("{}: {}", config.operator_address, e))
        })?;

        // The login name is opaque to us; relays like SendGrid use `apikey`.
        let credentials = Credentials::new(config.username.clone(), config.password.clone());

        let builder = if uses_starttls(config.smtp_port) {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
        };
        let mut builder = builder
            .map_err(|e| MailError::Smtp(e.to_string()))?
            .credentials(credentials);
        if let Some(port) = config.smtp_port {
            builder = builder.port(port);
        }

        Ok(Self {
            transport: builder.build(),
            operator,
        })
    }

    fn build_message(&self, mail: OutgoingMail) -> Result<Message, MailError> {
        let to: Mailbox = mail
            .to
            .parse()
            .map_err(|e| MailError::InvalidAddress(format!("{}: {}", mail.to, e)))?;

        let builder = match mail.from.parse::<Mailbox>() {
            Ok(submitter) => Message::builder().from(submitter.clone()).reply_to(submitter),
            Err(e) => {
                // Submitted addresses are never format-checked; fall back to the operator.
                warn!("Submitter address {:?} unusable as sender: {}", mail.from, e);
                Message::builder().from(self.operator.clone())
            }
        };

        builder
            .to(to)
            .subject(mail.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body)
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

/// Port 587 speaks plain SMTP first and upgrades; every other port
/// (465 by default) is implicit TLS.
fn uses_starttls(port: Option<u16>) -> bool {
    port == Some(SUBMISSION_PORT)
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<DeliveryReceipt, MailError> {
        let message = self.build_message(mail)?;
        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        let text = response.message().collect::<Vec<_>>().join(" ");
        debug!("SMTP response code {}", response.code());

        Ok(DeliveryReceipt {
            response: format!("{} {}", response.code(), text),
        })
    }

    async fn verify(&self) -> Result<(), MailError> {
        match self.transport.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(MailError::Smtp("connection test failed".to_string())),
            Err(e) => Err(MailError::Smtp(e.to_string())),
        }
    }
}
