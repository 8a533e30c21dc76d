//! Content formatting: flattening polymorphic message payloads into
//! displayable text.
//!
//! Message content (plain string or ordered content blocks) goes through
//! [`format_message`]; `toolUseResult` payloads go through
//! [`format_tool_result`]; [`display_text`] picks whichever a record carries.
//! Single-line renderings are cut to terminal columns with the width-aware
//! helpers in [`truncate`].

pub mod message;
pub mod tool_result;
pub mod truncate;

pub use message::{format_message, format_tool_use};
pub use tool_result::{ToolUseResult, format_tool_result};
pub use truncate::{truncate_to_width, truncate_with_ellipsis};

use crate::models::MessageRecord;

/// Displayable text for a record: formatted message content when present,
/// otherwise the formatted tool result, otherwise empty.
pub fn display_text(record: &MessageRecord) -> String {
    if record.message.content.is_some() {
        return format_message(record);
    }
    match record.tool_use_result.as_ref() {
        Some(result) => format_tool_result(result),
        None => String::new(),
    }
}
