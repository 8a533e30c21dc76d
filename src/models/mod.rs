//! Data models for session log files and reconstructed conversations.
//!
//! - [`MessageRecord`] - One decoded line of a session log
//! - [`ContentBlock`] - Tagged content variants inside a message payload
//! - [`Conversation`] - A reconstructed session with derived metadata
//! - [`LogFileDescriptor`] - A candidate file before any content read

pub mod conversation;
pub mod descriptor;
pub mod record;

pub use conversation::Conversation;
pub use descriptor::LogFileDescriptor;
pub use record::{ContentBlock, MessageBody, MessageContent, MessageRecord, Role};
