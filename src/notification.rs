//! Plain-text notification formatting
//!
//! Values are interpolated as submitted: no escaping, no templating.

use crate::mailer::OutgoingMail;
use crate::models::FormSubmission;

/// Subject and body of one notification email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub body: String,
}

impl Notification {
    pub fn from_submission<F: FormSubmission>(form: &F) -> Self {
        let body = form
            .lines()
            .into_iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            subject: form.subject(),
            body,
        }
    }

    /// Address the notification to the operator mailbox
    pub fn into_mail(self, from: &str, to: &str) -> OutgoingMail {
        OutgoingMail {
            from: from.to_string(),
            to: to.to_string(),
            subject: self.subject,
            body: self.body,
        }
    }
}
