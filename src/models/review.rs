//! Customer review form

use super::{loose_text, text, FormSubmission};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmission {
    #[serde(default, deserialize_with = "loose_text")]
    #[validate(required)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "loose_text")]
    #[validate(required)]
    pub email: Option<String>,

    /// Star rating as sent by the widget, number or string
    #[serde(default, deserialize_with = "loose_text")]
    #[validate(required)]
    pub rating: Option<String>,

    #[serde(default, deserialize_with = "loose_text")]
    #[validate(required)]
    pub message: Option<String>,
}

impl FormSubmission for ReviewSubmission {
    const KIND: &'static str = "Review";

    fn sender(&self) -> &str {
        text(&self.email)
    }

    fn subject(&self) -> String {
        format!("Review from {}", text(&self.name))
    }

    fn lines(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Name", text(&self.name)),
            ("Email", text(&self.email)),
            ("Rating", text(&self.rating)),
            ("Review", text(&self.message)),
        ]
    }
}
