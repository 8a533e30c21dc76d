use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Record kind of a conversation turn. Log files also carry `summary`,
/// `system` and snapshot records; those fail to decode into this enum and are
/// skipped by the record parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One line of a session log file.
///
/// `type`, `message` and `timestamp` are the admissibility fields: a line
/// missing any of them does not decode and never reaches a conversation.
/// Everything else is tolerated with defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRecord {
    #[serde(rename = "type")]
    pub role: Role,
    pub message: MessageBody,
    pub timestamp: String,
    #[serde(default)]
    pub cwd: String,
    #[serde(rename = "sessionId", default)]
    pub session_id: String,
    #[serde(rename = "gitBranch", default, skip_serializing_if = "Option::is_none")]
    pub git_branch: Option<String>,
    #[serde(rename = "toolUseResult", default, skip_serializing_if = "Option::is_none")]
    pub tool_use_result: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<MessageContent>,
}

/// Message payload: either a plain string or an ordered block sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

/// A single content block within a structured message payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    ToolUse {
        #[serde(default)]
        id: String,
        name: String,
        #[serde(default)]
        input: Value,
    },
    ToolResult {
        #[serde(default)]
        tool_use_id: Option<String>,
        #[serde(default)]
        content: Option<Value>,
    },
    Thinking {
        thinking: String,
    },
    /// Forward compatibility: block kinds this build does not know about.
    #[serde(other)]
    Unknown,
}

impl MessageRecord {
    /// A user record whose first block is a tool result is the external
    /// tool echoing its own output back into the log, not user input.
    pub fn is_tool_result_echo(&self) -> bool {
        if self.role != Role::User {
            return false;
        }
        match self.message.content.as_ref() {
            Some(MessageContent::Blocks(blocks)) => {
                matches!(blocks.first(), Some(ContentBlock::ToolResult { .. }))
            }
            _ => false,
        }
    }
}
