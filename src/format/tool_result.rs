use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Character budget for the raw-JSON fallback rendering.
const RESULT_PREVIEW_CHARS: usize = 100;

/// Typed view over a `toolUseResult` payload
///
/// Only the fields the formatter dispatches on are named; everything else is
/// retained in `extra` so the payload can still be dumped verbatim. Payloads
/// that are not JSON objects fail this decode and take the dump path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolUseResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filenames: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_todos: Option<Vec<TodoItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_todos: Option<Vec<TodoItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<FileReadInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_lines: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_string: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub status: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReadInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_lines: Option<u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Renders a `toolUseResult` payload by the first matching field, in
/// priority order: todo-list diff, file-read metadata, edit summary, stdout,
/// stderr, filename listing, raw dump.
pub fn format_tool_result(value: &Value) -> String {
    let Ok(result) = serde_json::from_value::<ToolUseResult>(value.clone()) else {
        return dump(value);
    };

    if let (Some(old), Some(new)) = (&result.old_todos, &result.new_todos) {
        let changed = new
            .iter()
            .filter(|item| match old.iter().find(|o| o.id == item.id) {
                None => true,
                Some(o) => o.status != item.status || o.content != item.content,
            })
            .count();
        return format!("[TodoWrite Result] {} todos updated", changed);
    }

    if result.file.is_some() || result.num_lines.is_some() {
        let path = result
            .file
            .as_ref()
            .and_then(|f| f.file_path.clone())
            .or_else(|| result.file_path.clone())
            .unwrap_or_else(|| "file".to_string());
        let lines = result.file.as_ref().and_then(|f| f.num_lines).or(result.num_lines).unwrap_or(0);
        return format!("[Read Result] {} ({} lines)", path, lines);
    }

    if result.old_string.is_some() && result.new_string.is_some() {
        let path = result.file_path.as_deref().unwrap_or("file");
        return format!("[Edit Result] {} modified", path);
    }

    if let Some(stdout) = result.stdout.as_deref().filter(|s| !s.is_empty()) {
        return format!("[Bash Output]\n{}", stdout.trim());
    }

    if let Some(stderr) = result.stderr.as_deref().filter(|s| !s.is_empty()) {
        return format!("[Bash Error]\n{}", stderr.trim());
    }

    if let Some(filenames) = &result.filenames {
        let shown = filenames.iter().take(5).map(String::as_str).collect::<Vec<_>>().join(", ");
        let overflow = if filenames.len() > 5 {
            format!(" ... and {} more", filenames.len() - 5)
        } else {
            String::new()
        };
        return format!("[Files Found: {}] {}{}", filenames.len(), shown, overflow);
    }

    dump(value)
}

fn dump(value: &Value) -> String {
    let raw = value.to_string();
    let mut preview: String = raw.chars().take(RESULT_PREVIEW_CHARS).collect();
    if preview.len() < raw.len() {
        preview.push_str("...");
    }
    format!("[Tool Result] {}", preview)
}
