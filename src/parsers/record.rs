use chrono::{DateTime, Utc};

use crate::models::MessageRecord;

/// Parses one physical log line into a message record
///
/// Returns `None` for anything inadmissible: malformed JSON, records missing
/// `type`/`message`/`timestamp`, non-conversation record types (summary,
/// system, snapshots), and user records that merely echo a tool result. A
/// single bad line never aborts the surrounding file; the caller just skips
/// it.
pub fn parse_line(line: &str) -> Option<MessageRecord> {
    let record: MessageRecord = serde_json::from_str(line).ok()?;
    if record.is_tool_result_echo() {
        return None;
    }
    Some(record)
}

/// Parses a record timestamp (RFC 3339 / ISO-8601) into an instant.
pub fn parse_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    timestamp.parse::<DateTime<Utc>>().ok()
}
