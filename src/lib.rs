//! cc-session-browser - Browse and resume Claude Code conversations
//!
//! This library reads the conversation logs Claude Code appends under
//! `~/.claude/projects/` and turns them into something a person can scroll
//! through and resume. It supports:
//!
//! - Discovering session log files per project directory, newest first
//! - Tolerantly parsing JSONL records into ordered message sequences
//! - Reconstructing conversation metadata (session id, project, branch, span)
//! - Lazy pagination that reads only as many files as one page needs
//! - Flattening tool invocations, tool results and thinking blocks into
//!   displayable text
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use cc_session_browser::fetch_page;
//!
//! let root = Path::new("/home/alice/.claude/projects");
//! let page = fetch_page(root, 25, 0, None)?;
//! for conversation in &page.conversations {
//!     println!("{}  {}", conversation.session_id, conversation.first_message);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod format;
pub mod models;
pub mod pager;
pub mod parsers;
pub mod resume;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use format::{display_text, format_message, format_tool_result};
pub use models::{Conversation, MessageRecord};
pub use pager::{ConversationPage, UNKNOWN_TOTAL, fetch_page, list_candidates};
pub use parsers::{parse_line, reconstruct};
pub use utils::paths::{project_name_from_dir, to_log_dir_name};
