use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height reserved for the conversation list, borders included.
const LIST_HEIGHT: u16 = 8;

/// Vertical layout: title row, conversation list, preview, status bar.
pub struct AppLayout {
    pub header_area: Rect,
    pub list_area: Rect,
    pub preview_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),           // Title
                Constraint::Length(LIST_HEIGHT), // Conversation list
                Constraint::Min(5),              // Preview
                Constraint::Length(1),           // Status bar
            ])
            .split(area);

        Self {
            header_area: chunks[0],
            list_area: chunks[1],
            preview_area: chunks[2],
            status_area: chunks[3],
        }
    }

    /// Rows available for preview content once the border is gone.
    pub fn preview_inner_height(&self) -> usize {
        usize::from(self.preview_area.height.saturating_sub(2))
    }

    /// Rows available for list entries once the border is gone.
    pub fn list_inner_height(&self) -> usize {
        usize::from(self.list_area.height.saturating_sub(2))
    }
}
