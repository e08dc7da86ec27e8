//! Application state management
//!
//! Contains shared state accessible across all handlers. Nothing in here is
//! mutated after startup, so no locking is needed.

use crate::mailer::Mailer;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    /// Mail transport, configured once and reused by every request
    pub mailer: Arc<dyn Mailer>,

    /// Mailbox receiving every notification
    pub operator_address: String,
}

impl AppState {
    pub fn new(mailer: Arc<dyn Mailer>, operator_address: impl Into<String>) -> Self {
        Self {
            mailer,
            operator_address: operator_address.into(),
        }
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;
