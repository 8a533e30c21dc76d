use std::path::Path;

use anyhow::Result;

use crate::models::Conversation;
use crate::pager::discovery::list_candidates;
use crate::parsers::reconstruct;
use crate::utils::to_log_dir_name;

/// Sentinel total meaning "not counted": producing an exact figure would
/// require reconstructing the entire corpus.
pub const UNKNOWN_TOTAL: i64 = -1;

/// One page of conversations plus a total that is either exact (when it was
/// free to compute) or [`UNKNOWN_TOTAL`].
#[derive(Debug, Clone)]
pub struct ConversationPage {
    pub conversations: Vec<Conversation>,
    pub total: i64,
}

/// Serves a bounded page of conversations, newest first
///
/// The candidate list is metadata-only and cheap; file contents are read
/// lazily, one candidate at a time, while walking it. Candidates that fail to
/// reconstruct are skipped and count against neither `offset` nor `limit`,
/// and the walk stops as soon as the page is full: a deep corpus costs one
/// page of content reads, not a corpus-wide parse. Callers detect "more pages
/// likely" by receiving a full page.
///
/// # Errors
///
/// Only a root directory that exists but cannot be scanned is an error.
/// A missing root yields an empty page with `total = 0`.
pub fn fetch_page(
    root: &Path,
    limit: usize,
    offset: usize,
    dir_filter: Option<&Path>,
) -> Result<ConversationPage> {
    if !root.exists() {
        return Ok(ConversationPage { conversations: Vec::new(), total: 0 });
    }

    let filter_name = dir_filter.map(to_log_dir_name);
    let candidates = list_candidates(root, filter_name.as_deref())?;
    if candidates.is_empty() {
        return Ok(ConversationPage { conversations: Vec::new(), total: 0 });
    }

    let conversations: Vec<Conversation> = candidates
        .iter()
        .filter_map(|candidate| reconstruct(&candidate.path, &candidate.project_dir_name))
        .skip(offset)
        .take(limit)
        .collect();

    Ok(ConversationPage { conversations, total: UNKNOWN_TOTAL })
}
