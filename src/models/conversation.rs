use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::MessageRecord;

/// Reconstructed view of one session log file: the admissible messages in
/// file order plus the metadata derived from them.
///
/// `session_id` comes from the log file's UUID stem; that is the value
/// `claude --resume` expects. Immutable once built; rebuilt on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub session_id: String,
    pub project_path: String,
    pub project_name: String,
    pub git_branch: String,
    pub messages: Vec<MessageRecord>,
    pub first_message: String,
    pub last_message: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl Conversation {
    /// Wall-clock span of the conversation in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}
