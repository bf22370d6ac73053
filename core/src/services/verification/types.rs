//! Types for verification service results

use chrono::{DateTime, Utc};

/// Result of issuing a one-time code
#[derive(Debug, Clone)]
pub struct IssueCodeResult {
    /// The mail provider message id
    pub message_id: String,
    /// When the user may request another code
    pub next_resend_at: DateTime<Utc>,
}
