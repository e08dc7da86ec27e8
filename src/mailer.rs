//! Mail delivery
//!
//! The dispatcher only sees the [`Mailer`] capability:
//! `send(from, to, subject, body) -> receipt | error`. The SMTP implementation
//! lives in [`smtp`]; tests swap in [`testing::RecordingMailer`].

mod smtp;

pub use smtp::SmtpMailer;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}

/// A fully formatted message ready for the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    /// Submitter-supplied address, unvalidated
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// What the transport reported back for an accepted message
#[derive(Debug, Clone)]
pub struct DeliveryReceipt {
    pub response: String,
}

/// Shared, stateless-per-call mail transport
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Attempt exactly one delivery
    async fn send(&self, mail: OutgoingMail) -> Result<DeliveryReceipt, MailError>;

    /// Check the transport is reachable and accepts our credentials
    async fn verify(&self) -> Result<(), MailError>;
}
