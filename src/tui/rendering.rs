use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use super::timestamps::{format_clock, format_timestamp};
use crate::format::{display_text, truncate_with_ellipsis};
use crate::models::{Conversation, Role};
use crate::parsers::parse_timestamp;
use crate::utils::format_path_with_tilde;

/// Fixed rows at the top of the preview pane (session, project, blank).
pub(crate) const PREVIEW_HEADER_ROWS: usize = 3;

pub struct RenderState<'a> {
    pub conversations: &'a [Conversation],
    pub selected_idx: usize,
    pub preview_scroll: usize,
    pub status_message: Option<&'a StatusMessage>,
    pub help_text: &'a str,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState, list_state: &mut ListState) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, layout.header_area, state.conversations.len());
    render_list(frame, layout.list_area, state, list_state);
    render_preview(
        frame,
        layout.preview_area,
        state.conversations.get(state.selected_idx),
        state.preview_scroll,
    );
    render_status_bar(frame, layout.status_area, state);
}

fn render_header(frame: &mut Frame, area: Rect, count: usize) {
    let title = Line::from(vec![
        Span::styled(
            "cc-session-browser",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" - {} conversations", count)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_list(frame: &mut Frame, area: Rect, state: &RenderState, list_state: &mut ListState) {
    let width = usize::from(area.width.saturating_sub(4));

    let items: Vec<ListItem> = state
        .conversations
        .iter()
        .map(|conversation| {
            let timestamp = format_timestamp(&conversation.end_time);
            let preview = conversation.first_message.lines().next().unwrap_or("");
            let row = format!(
                "{:>10}  {}  {}",
                timestamp, conversation.project_name, preview
            );
            ListItem::new(truncate_with_ellipsis(&row, width))
                .style(Style::default().fg(Color::Rgb(113, 113, 122)))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(113, 113, 122)))
                .title(" Conversations "),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Rgb(250, 250, 250))
                .bg(Color::Rgb(16, 185, 129))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    list_state.select(if state.conversations.is_empty() {
        None
    } else {
        Some(state.selected_idx)
    });
    frame.render_stateful_widget(list, area, list_state);
}

fn render_preview(
    frame: &mut Frame,
    area: Rect,
    conversation: Option<&Conversation>,
    scroll: usize,
) {
    let Some(conversation) = conversation else {
        let placeholder = Paragraph::new("Select a conversation to preview").block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(113, 113, 122)))
                .title(" Preview "),
        );
        frame.render_widget(placeholder, area);
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Session: ", Style::default().fg(Color::Rgb(113, 113, 122))),
            Span::styled(
                conversation.session_id.clone(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled("Project: ", Style::default().fg(Color::Rgb(113, 113, 122))),
            Span::raw(format_path_with_tilde(&conversation.project_path)),
            Span::styled("  Branch: ", Style::default().fg(Color::Rgb(113, 113, 122))),
            Span::raw(conversation.git_branch.clone()),
            Span::styled(
                format!(
                    "  ({} messages, {} min)",
                    conversation.messages.len(),
                    conversation.duration_minutes()
                ),
                Style::default().fg(Color::Rgb(113, 113, 122)),
            ),
        ]),
        Line::from(""),
    ];
    lines.extend(build_message_lines(conversation));

    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title(" Conversation History "),
        )
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}

/// Formatted preview lines for a conversation's messages, one header line per
/// message followed by its indented content. Also used by the app to clamp
/// scrolling, so it must stay in sync with what the preview draws.
pub(crate) fn build_message_lines(conversation: &Conversation) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for record in &conversation.messages {
        let Some(instant) = parse_timestamp(&record.timestamp) else {
            continue;
        };
        let (label, color) = match record.role {
            Role::User => ("[User]", Color::Cyan),
            Role::Assistant => ("[Assistant]", Color::Green),
        };
        lines.push(Line::from(vec![
            Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(" ({})", format_clock(&instant)),
                Style::default().fg(Color::Rgb(113, 113, 122)),
            ),
        ]));

        let content = display_text(record);
        for content_line in content.lines() {
            lines.push(content_line_to_spans(content_line));
        }
        lines.push(Line::from(""));
    }

    lines
}

/// Message content lines get a two-space indent; `[Tool: ...]`-style labels
/// are highlighted.
fn content_line_to_spans(line: &str) -> Line<'static> {
    if line.starts_with('[')
        && let Some(end) = line.find(']')
    {
        let (label, rest) = line.split_at(end + 1);
        return Line::from(vec![
            Span::raw("  "),
            Span::styled(label.to_string(), Style::default().fg(Color::Yellow)),
            Span::raw(rest.to_string()),
        ]);
    }
    Line::from(format!("  {}", line))
}

/// Total preview rows for a conversation, header included.
pub(crate) fn preview_line_count(conversation: &Conversation) -> usize {
    PREVIEW_HEADER_ROWS + build_message_lines(conversation).len()
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (text, style) = match state.status_message {
        Some(message) => {
            let color = match message.message_type {
                MessageType::Success => Color::Green,
                MessageType::Error => Color::Rgb(239, 68, 68),
            };
            (
                format!(" {} ", message.text),
                Style::default().fg(color).bg(Color::Rgb(24, 24, 27)).add_modifier(Modifier::BOLD),
            )
        }
        None => {
            let position = if state.conversations.is_empty() {
                "no conversations".to_string()
            } else {
                format!("{}/{}", state.selected_idx + 1, state.conversations.len())
            };
            (
                format!(" {} | {} ", position, state.help_text),
                Style::default().fg(Color::Rgb(250, 250, 250)).bg(Color::Rgb(24, 24, 27)),
            )
        }
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
