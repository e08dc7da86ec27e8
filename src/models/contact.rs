//! Contact form

use super::{loose_text, text, FormSubmission};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "loose_text")]
    #[validate(required)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "loose_text")]
    #[validate(required)]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "loose_text")]
    #[validate(required)]
    pub message: Option<String>,
}

impl FormSubmission for ContactSubmission {
    const KIND: &'static str = "Contact";

    fn sender(&self) -> &str {
        text(&self.email)
    }

    fn subject(&self) -> String {
        format!("Contact Form Submission from {}", text(&self.name))
    }

    fn lines(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Name", text(&self.name)),
            ("Email", text(&self.email)),
            ("Message", text(&self.message)),
        ]
    }
}
