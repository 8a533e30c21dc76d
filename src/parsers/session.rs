use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::format::format_message;
use crate::models::{Conversation, MessageRecord, Role};
use crate::parsers::record::{parse_line, parse_timestamp};
use crate::utils::project_name_from_dir;

/// Reconstructs a conversation from one session log file
///
/// Returns `None` whenever the file cannot yield a valid conversation: the
/// file is unreadable (logged as a warning), has no admissible records, the
/// first or last timestamp does not parse, or the file name has no stem to
/// use as the session id. Failures here are per-file and never propagate.
pub fn reconstruct(path: &Path, project_dir_name: &str) -> Option<Conversation> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("Warning: failed to read session file {}: {}", path.display(), error);
            return None;
        }
    };

    let lines: Vec<&str> = content.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.is_empty() {
        return None;
    }

    let messages: Vec<MessageRecord> = lines.iter().filter_map(|line| parse_line(line)).collect();
    if messages.is_empty() {
        return None;
    }

    let start_time = parse_timestamp(&messages[0].timestamp)?;
    let end_time = parse_timestamp(&messages[messages.len() - 1].timestamp)?;

    let session_id = path.file_stem().and_then(|stem| stem.to_str()).unwrap_or("").to_string();
    if session_id.is_empty() {
        return None;
    }

    // The branch lives on the newest record; the last line is re-parsed on
    // its own so a missing or foreign-shaped tail never fails the session.
    let git_branch = branch_from_line(lines[lines.len() - 1]);

    let first_message = messages
        .iter()
        .find(|m| m.role == Role::User)
        .map(format_message)
        .unwrap_or_default();
    let last_message = messages
        .iter()
        .rev()
        .find(|m| m.role == Role::User)
        .map(format_message)
        .unwrap_or_default();

    Some(Conversation {
        session_id,
        project_path: messages[0].cwd.clone(),
        project_name: project_name_from_dir(project_dir_name),
        git_branch,
        messages,
        first_message,
        last_message,
        start_time,
        end_time,
    })
}

fn branch_from_line(line: &str) -> String {
    serde_json::from_str::<Value>(line)
        .ok()
        .and_then(|value| {
            value.get("gitBranch").and_then(Value::as_str).filter(|s| !s.is_empty()).map(str::to_string)
        })
        .unwrap_or_else(|| "-".to_string())
}
