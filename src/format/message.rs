use serde_json::Value;

use crate::models::{ContentBlock, MessageContent, MessageRecord};

/// Character budget for inline previews of prompts and raw tool input.
const INPUT_PREVIEW_CHARS: usize = 100;

/// Flattens a message payload into displayable text
///
/// String content passes through unchanged. Block sequences are walked in
/// order and joined with newlines; see [`format_tool_use`] for the per-tool
/// renderings of `tool_use` blocks.
pub fn format_message(record: &MessageRecord) -> String {
    match record.message.content.as_ref() {
        None => String::new(),
        Some(MessageContent::Text(text)) => text.clone(),
        Some(MessageContent::Blocks(blocks)) => {
            let mut parts: Vec<String> = Vec::new();
            for block in blocks {
                match block {
                    ContentBlock::Text { text } => {
                        if !text.is_empty() {
                            parts.push(text.clone());
                        }
                    }
                    ContentBlock::Thinking { thinking } => {
                        parts.push(format!("[Thinking...]\n{}", thinking.trim()));
                    }
                    ContentBlock::ToolUse { name, input, .. } => {
                        parts.push(format_tool_use(name, input));
                    }
                    ContentBlock::ToolResult { .. } => {
                        parts.push("[Tool Result]".to_string());
                    }
                    ContentBlock::Unknown => {}
                }
            }
            parts.join("\n")
        }
    }
}

/// Renders a `tool_use` block as `[Tool: <name>] <description>`
///
/// Recognized tools get specialized renderings (multi-line for edits and todo
/// lists); everything else derives a one-line description from conventional
/// input fields, or falls back to a truncated dump of the raw input.
pub fn format_tool_use(name: &str, input: &Value) -> String {
    match name {
        "Bash" => {
            let command = str_field(input, &["command", "cmd"]).unwrap_or("");
            format!("[Tool: Bash] {}", command)
        }
        "Edit" => {
            let path = file_path_field(input).unwrap_or("file");
            let old = str_field(input, &["old_string", "oldString"]).unwrap_or("");
            let new = str_field(input, &["new_string", "newString"]).unwrap_or("");
            format!("[Tool: Edit] {}\nOld:\n{}\nNew:\n{}", path, old, new)
        }
        "MultiEdit" => {
            let path = file_path_field(input).unwrap_or("file");
            let edits = input.get("edits").and_then(Value::as_array);
            let rendered = edits
                .map(|edits| {
                    edits
                        .iter()
                        .enumerate()
                        .map(|(i, edit)| {
                            let old = str_field(edit, &["old_string", "oldString"]).unwrap_or("");
                            let new = str_field(edit, &["new_string", "newString"]).unwrap_or("");
                            format!("Edit {}:\nOld:\n{}\nNew:\n{}", i + 1, old, new)
                        })
                        .collect::<Vec<_>>()
                        .join("\n\n")
                })
                .unwrap_or_default();
            format!("[Tool: MultiEdit] {}\n{}", path, rendered)
        }
        "Read" => {
            let path = file_path_field(input).unwrap_or("file");
            let line_info = input
                .get("offset")
                .and_then(Value::as_u64)
                .map(|offset| {
                    let limit = input.get("limit").and_then(Value::as_u64).unwrap_or(50);
                    format!(" (lines {}-{})", offset, offset + limit)
                })
                .unwrap_or_default();
            format!("[Tool: Read] {}{}", path, line_info)
        }
        "Grep" => {
            let pattern = str_field(input, &["pattern"]).unwrap_or("");
            let scope = str_field(input, &["glob", "path"]).unwrap_or(".");
            format!("[Tool: Grep] pattern: \"{}\" in {}", pattern, scope)
        }
        "Glob" => {
            let pattern = str_field(input, &["pattern"]).unwrap_or("");
            format!("[Tool: Glob] pattern: \"{}\"", pattern)
        }
        "TodoWrite" => match input.get("todos").and_then(Value::as_array) {
            Some(todos) => {
                let checklist = todos
                    .iter()
                    .map(|todo| {
                        let glyph = match todo.get("status").and_then(Value::as_str) {
                            Some("completed") => '✓',
                            Some("in_progress") => '→',
                            _ => '○',
                        };
                        let content = todo.get("content").and_then(Value::as_str).unwrap_or("");
                        format!("  {} {}", glyph, content)
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("[Tool: TodoWrite]\n{}", checklist)
            }
            None => "[Tool: TodoWrite]".to_string(),
        },
        _ => {
            let description = str_field(input, &["command", "description"])
                .map(str::to_string)
                .or_else(|| str_field(input, &["prompt"]).map(preview));
            match description {
                Some(description) => format!("[Tool: {}] {}", name, description),
                None => format!("[Tool: {}] {}", name, preview(&input.to_string())),
            }
        }
    }
}

/// First string value among conventional aliases of a tool input field.
fn str_field<'a>(input: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| input.get(*key).and_then(Value::as_str))
}

fn file_path_field(input: &Value) -> Option<&str> {
    str_field(input, &["file_path", "filePath"])
}

fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(INPUT_PREVIEW_CHARS).collect();
    if out.len() < text.len() {
        out.push_str("...");
    }
    out
}
