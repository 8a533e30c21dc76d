//! TUI application state and event handling.
//!
//! The `App` owns the loaded conversation window, the selection, and the
//! preview scroll position, and runs the main event loop via `run()`.
//! Conversations are pulled in pages through the pagination engine: the first
//! page at startup, the next whenever the selection runs off the end of a
//! full page. A short page marks the corpus as exhausted.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;

use super::events::{Action, poll_event};
use super::layout::AppLayout;
use super::rendering::{RenderState, preview_line_count, render_ui};
use crate::clipboard::copy_to_clipboard;
use crate::config::KeyBindings;
use crate::models::Conversation;
use crate::pager::fetch_page;
use crate::resume::ResumeRequest;

/// Conversations fetched per page request.
const PAGE_SIZE: usize = 25;
/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 2000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

#[cfg(test)]
impl StatusMessage {
    pub(crate) fn success_for_test(text: &str) -> Self {
        Self {
            text: text.to_string(),
            message_type: MessageType::Success,
            expires_at: Instant::now() + Duration::from_secs(60),
        }
    }
}

pub struct App {
    root: PathBuf,
    dir_filter: Option<PathBuf>,
    bindings: KeyBindings,
    help_text: String,
    conversations: Vec<Conversation>,
    list_state: ListState,
    selected_idx: usize,
    preview_scroll: usize,
    exhausted: bool,
    should_quit: bool,
    resume: Option<ResumeRequest>,
    status_message: Option<StatusMessage>,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    /// Creates the app and loads the first page. A root that exists but
    /// cannot be scanned fails here; everything later degrades to status
    /// messages.
    pub fn new(root: PathBuf, dir_filter: Option<PathBuf>, bindings: KeyBindings) -> Result<Self> {
        let help_text = bindings.help_text();
        let mut app = Self {
            root,
            dir_filter,
            bindings,
            help_text,
            conversations: Vec::new(),
            list_state: ListState::default(),
            selected_idx: 0,
            // Start at the newest messages; clamped against the real line
            // count before every draw.
            preview_scroll: usize::MAX,
            exhausted: false,
            should_quit: false,
            resume: None,
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        };
        app.load_next_page()?;
        Ok(app)
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<Option<ResumeRequest>> {
        while !self.should_quit {
            let had_status = self.status_message.is_some();
            self.clear_expired_status();
            if had_status && self.status_message.is_none() {
                self.needs_redraw = true;
            }

            let size = terminal.size()?;
            let layout = AppLayout::new(Rect::new(0, 0, size.width, size.height));
            let viewport = layout.preview_inner_height();
            let max_scroll = self.max_preview_scroll(viewport);
            if self.preview_scroll > max_scroll {
                self.preview_scroll = max_scroll;
            }

            // Draw if dirty or every ~100ms so terminal resizes settle.
            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100)
            {
                let state = RenderState {
                    conversations: &self.conversations,
                    selected_idx: self.selected_idx,
                    preview_scroll: self.preview_scroll,
                    status_message: self.status_message.as_ref(),
                    help_text: &self.help_text,
                };
                terminal.draw(|frame| render_ui(frame, &state, &mut self.list_state))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100), &self.bindings)?;
            self.handle_action(action, viewport, max_scroll);
        }

        Ok(self.resume.clone())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action, page_rows: usize, max_scroll: usize) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::SelectPrevious => self.move_selection(-1),
            Action::SelectNext => self.move_selection(1),
            Action::Confirm => {
                if let Some(conversation) = self.conversations.get(self.selected_idx) {
                    self.resume = Some(ResumeRequest::from(conversation));
                    self.should_quit = true;
                }
            }
            Action::CopySessionId => self.copy_selected_session_id(),
            Action::ScrollUp => {
                self.set_scroll(self.effective_scroll(max_scroll).saturating_sub(1));
            }
            Action::ScrollDown => {
                self.set_scroll((self.effective_scroll(max_scroll) + 1).min(max_scroll));
            }
            Action::ScrollPageUp => {
                let step = (page_rows / 2).max(1);
                self.set_scroll(self.effective_scroll(max_scroll).saturating_sub(step));
            }
            Action::ScrollPageDown => {
                let step = (page_rows / 2).max(1);
                self.set_scroll((self.effective_scroll(max_scroll) + step).min(max_scroll));
            }
            Action::ScrollTop => self.set_scroll(0),
            Action::ScrollBottom => self.set_scroll(max_scroll),
        }
    }

    fn move_selection(&mut self, delta: i64) {
        if self.conversations.is_empty() {
            return;
        }
        let new_idx = if delta < 0 {
            self.selected_idx.saturating_sub(1)
        } else {
            self.selected_idx + 1
        };

        if delta > 0 && new_idx >= self.conversations.len() {
            if !self.exhausted
                && let Err(error) = self.load_next_page()
            {
                self.set_status(format!("Failed to load more: {}", error), MessageType::Error);
            }
            if new_idx >= self.conversations.len() {
                return;
            }
        }

        if new_idx != self.selected_idx {
            self.selected_idx = new_idx;
            self.preview_scroll = usize::MAX;
            self.needs_redraw = true;
        }
    }

    /// Fetches the page after the conversations already loaded. A short (or
    /// empty) page means the corpus has no more reconstructable sessions.
    fn load_next_page(&mut self) -> Result<()> {
        let page = fetch_page(
            &self.root,
            PAGE_SIZE,
            self.conversations.len(),
            self.dir_filter.as_deref(),
        )?;
        if page.conversations.len() < PAGE_SIZE {
            self.exhausted = true;
        }
        self.conversations.extend(page.conversations);
        self.needs_redraw = true;
        Ok(())
    }

    fn copy_selected_session_id(&mut self) {
        let Some(conversation) = self.conversations.get(self.selected_idx) else {
            return;
        };
        match copy_to_clipboard(&conversation.session_id) {
            Ok(()) => {
                self.set_status("✓ Session ID copied to clipboard", MessageType::Success);
            }
            Err(error) => {
                self.set_status(format!("✗ {}", error), MessageType::Error);
            }
        }
    }

    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType) {
        let duration = match message_type {
            MessageType::Success => STATUS_SUCCESS_DURATION_MS,
            MessageType::Error => STATUS_ERROR_DURATION_MS,
        };
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration),
        });
        self.needs_redraw = true;
    }

    fn clear_expired_status(&mut self) {
        let expired = self
            .status_message
            .as_ref()
            .map(|message| Instant::now() >= message.expires_at)
            .unwrap_or(false);
        if expired {
            self.status_message = None;
        }
    }

    fn effective_scroll(&self, max_scroll: usize) -> usize {
        self.preview_scroll.min(max_scroll)
    }

    fn set_scroll(&mut self, scroll: usize) {
        if scroll != self.preview_scroll {
            self.preview_scroll = scroll;
            self.needs_redraw = true;
        }
    }

    fn max_preview_scroll(&self, viewport: usize) -> usize {
        self.conversations
            .get(self.selected_idx)
            .map(preview_line_count)
            .unwrap_or(0)
            .saturating_sub(viewport)
    }
}
