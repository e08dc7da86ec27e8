//! Order enquiry form

use super::{loose_text, text, FormSubmission};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    #[serde(default, deserialize_with = "loose_text")]
    #[validate(required)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "loose_text")]
    #[validate(required)]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "loose_text")]
    #[validate(required)]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "loose_text")]
    #[validate(required)]
    pub item: Option<String>,

    #[serde(default, deserialize_with = "loose_text")]
    #[validate(required)]
    pub quantity: Option<String>,

    // Explicit so validation errors carry the form's own key.
    #[serde(rename = "callBackTime")]
    #[serde(default, deserialize_with = "loose_text")]
    #[validate(required)]
    pub call_back_time: Option<String>,

    /// Free-form details, optional
    #[serde(default, deserialize_with = "loose_text")]
    pub message: Option<String>,
}

impl FormSubmission for OrderSubmission {
    const KIND: &'static str = "Order";

    fn sender(&self) -> &str {
        text(&self.email)
    }

    fn subject(&self) -> String {
        format!("Order from {}", text(&self.name))
    }

    fn lines(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Name", text(&self.name)),
            ("Email", text(&self.email)),
            ("Phone", text(&self.phone)),
            ("Item", text(&self.item)),
            ("Quantity", text(&self.quantity)),
            ("Preferred Call-Back Time", text(&self.call_back_time)),
            ("Additional Details", self.message.as_deref().unwrap_or("None")),
        ]
    }
}
