//! Tolerant parsing of session log files.
//!
//! # Error Handling Strategy
//!
//! Every fallible step returns `Option` instead of raising: a malformed line
//! is skipped, an unreadable or unreconstructable file yields no
//! conversation, and the pagination engine consumes both through a single
//! uniform `filter_map`. Per-file problems are reported as stderr warnings;
//! nothing below the root-directory scan is ever fatal.

pub mod record;
pub mod session;

pub use record::{parse_line, parse_timestamp};
pub use session::reconstruct;
