//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

/// Builder for a projects root (`~/.claude/projects`-shaped tree)
pub struct ProjectsRootBuilder {
    temp_dir: TempDir,
}

impl ProjectsRootBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a project directory (log-dir-name encoded) with session files
    pub fn with_project(self, dir_name: &str, sessions: &[SessionFileBuilder]) -> Self {
        let project_dir = self.temp_dir.path().join(dir_name);
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");
        for session in sessions {
            session.create_in(&project_dir);
        }
        self
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ProjectsRootBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one session log file
pub struct SessionFileBuilder {
    file_name: String,
    lines: Vec<String>,
    modified_secs: Option<u64>,
}

impl SessionFileBuilder {
    /// Create a session file; `file_name` should be `<uuid>.jsonl`
    pub fn new(file_name: &str) -> Self {
        Self { file_name: file_name.to_string(), lines: Vec::new(), modified_secs: None }
    }

    pub fn with_record(mut self, record: RecordBuilder) -> Self {
        self.lines.push(record.to_json());
        self
    }

    /// Append a raw physical line (malformed JSON, blank, foreign records)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Pin the file mtime (seconds past the epoch) for ordering tests
    pub fn modified(mut self, secs: u64) -> Self {
        self.modified_secs = Some(secs);
        self
    }

    pub fn create_in(&self, dir: &Path) {
        let path = dir.join(&self.file_name);
        let mut file = File::create(&path).expect("Failed to create session file");
        file.write_all(self.lines.join("\n").as_bytes()).expect("Failed to write session file");
        if let Some(secs) = self.modified_secs {
            file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
                .expect("Failed to set mtime");
        }
    }
}

/// Builder for one log record line
pub struct RecordBuilder {
    record_type: String,
    role: String,
    content_json: String,
    timestamp: String,
    cwd: String,
    git_branch: Option<String>,
    tool_use_result_json: Option<String>,
}

impl RecordBuilder {
    pub fn user() -> Self {
        Self {
            record_type: "user".to_string(),
            role: "user".to_string(),
            content_json: r#""Test message""#.to_string(),
            timestamp: "2025-01-15T10:00:00Z".to_string(),
            cwd: "/home/user/app".to_string(),
            git_branch: None,
            tool_use_result_json: None,
        }
    }

    pub fn assistant() -> Self {
        Self {
            record_type: "assistant".to_string(),
            role: "assistant".to_string(),
            content_json: r#"[{"type":"text","text":"Test response"}]"#.to_string(),
            timestamp: "2025-01-15T10:00:01Z".to_string(),
            cwd: "/home/user/app".to_string(),
            git_branch: None,
            tool_use_result_json: None,
        }
    }

    /// Plain string content
    pub fn text(mut self, text: &str) -> Self {
        self.content_json = format!(r#""{}""#, text);
        self
    }

    /// Structured content blocks (use the block helpers below)
    pub fn content_blocks(mut self, blocks: Vec<String>) -> Self {
        self.content_json = format!("[{}]", blocks.join(","));
        self
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }

    pub fn cwd(mut self, cwd: &str) -> Self {
        self.cwd = cwd.to_string();
        self
    }

    pub fn git_branch(mut self, branch: &str) -> Self {
        self.git_branch = Some(branch.to_string());
        self
    }

    pub fn tool_use_result(mut self, json: &str) -> Self {
        self.tool_use_result_json = Some(json.to_string());
        self
    }

    pub fn text_block(text: &str) -> String {
        format!(r#"{{"type":"text","text":"{}"}}"#, text)
    }

    pub fn thinking_block(text: &str) -> String {
        format!(r#"{{"type":"thinking","thinking":"{}"}}"#, text)
    }

    pub fn tool_use_block(id: &str, name: &str, input_json: &str) -> String {
        format!(r#"{{"type":"tool_use","id":"{}","name":"{}","input":{}}}"#, id, name, input_json)
    }

    pub fn tool_result_block(tool_use_id: &str, content_json: &str) -> String {
        format!(
            r#"{{"type":"tool_result","tool_use_id":"{}","content":{}}}"#,
            tool_use_id, content_json
        )
    }

    pub fn to_json(&self) -> String {
        let branch_field = self
            .git_branch
            .as_ref()
            .map(|b| format!(r#","gitBranch":"{}""#, b))
            .unwrap_or_default();
        let result_field = self
            .tool_use_result_json
            .as_ref()
            .map(|r| format!(r#","toolUseResult":{}"#, r))
            .unwrap_or_default();

        format!(
            r#"{{"type":"{}","message":{{"role":"{}","content":{}}},"timestamp":"{}","cwd":"{}","sessionId":"550e8400-e29b-41d4-a716-446655440000"{}{}}}"#,
            self.record_type,
            self.role,
            self.content_json,
            self.timestamp,
            self.cwd,
            branch_field,
            result_field
        )
    }
}

/// UUID-shaped file name for the nth test session
pub fn session_file_name(index: u32) -> String {
    format!("550e8400-e29b-41d4-a716-4466554{:05}.jsonl", index)
}

/// Session stem for the nth test session (what the session id should be)
pub fn session_stem(index: u32) -> String {
    format!("550e8400-e29b-41d4-a716-4466554{:05}", index)
}

/// A minimal two-message session file
pub fn simple_session(index: u32, mtime_secs: u64) -> SessionFileBuilder {
    SessionFileBuilder::new(&session_file_name(index))
        .with_record(
            RecordBuilder::user()
                .text(&format!("prompt {}", index))
                .timestamp("2025-01-15T10:00:00Z"),
        )
        .with_record(
            RecordBuilder::assistant()
                .text(&format!("reply {}", index))
                .timestamp("2025-01-15T10:05:00Z"),
        )
        .modified(mtime_secs)
}
