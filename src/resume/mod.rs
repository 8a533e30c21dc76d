//! Resuming a conversation by handing control to the external tool.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

use crate::clipboard::copy_to_clipboard;
use crate::models::Conversation;

/// Everything resumption needs from a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeRequest {
    pub session_id: String,
    pub project_path: String,
}

impl From<&Conversation> for ResumeRequest {
    fn from(conversation: &Conversation) -> Self {
        Self {
            session_id: conversation.session_id.clone(),
            project_path: conversation.project_path.clone(),
        }
    }
}

/// Spawns `claude <passthrough args> --resume <session-id>` and waits
///
/// The child inherits stdio and runs in the conversation's project directory
/// when that directory still exists. Returns the child's exit code so the
/// caller can propagate it. When spawning fails (tool not installed, PATH
/// problems), the session id is copied to the clipboard as a best effort and
/// manual instructions go to stderr before the error is returned.
pub fn resume_session(request: &ResumeRequest, claude_args: &[String]) -> Result<i32> {
    let mut command = Command::new("claude");
    command.args(claude_args).arg("--resume").arg(&request.session_id);
    if !request.project_path.is_empty() && Path::new(&request.project_path).is_dir() {
        command.current_dir(&request.project_path);
    }

    let status = match command.status() {
        Ok(status) => status,
        Err(error) => {
            report_spawn_failure(request, claude_args);
            return Err(error).context("Failed to spawn claude; is Claude Code on PATH?");
        }
    };

    Ok(status.code().unwrap_or(0))
}

fn report_spawn_failure(request: &ResumeRequest, claude_args: &[String]) {
    match copy_to_clipboard(&request.session_id) {
        Ok(()) => eprintln!("Session ID copied to clipboard: {}", request.session_id),
        Err(error) => eprintln!("Failed to copy session ID to clipboard: {}", error),
    }
    eprintln!("You can resume manually:");
    if !request.project_path.is_empty() {
        eprintln!("  cd \"{}\"", request.project_path);
    }
    let args = if claude_args.is_empty() {
        String::new()
    } else {
        format!("{} ", claude_args.join(" "))
    };
    eprintln!("  claude {}--resume {}", args, request.session_id);
}
