//! Operation log pane
//!
//! Lists every operation with its index. Applied operations use the normal
//! foreground, pending ones are dimmed, and the next operation to apply is
//! highlighted. While following, the view keeps the cursor centred.

use super::utils::{border_style, clamp_scroll};
use crate::stacks::OperationLog;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Scroll state for the log pane
pub struct LogScrollState {
    pub offset: usize,
    /// Keep the cursor centred; cleared when the user scrolls manually
    pub follow: bool,
}

impl Default for LogScrollState {
    fn default() -> Self {
        LogScrollState {
            offset: 0,
            follow: true,
        }
    }
}

/// Render the operation log pane
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    log: &OperationLog,
    cursor: usize,
    is_focused: bool,
    scroll_state: &mut LogScrollState,
) {
    let block = Block::default()
        .title(format!(" Operations ({}) ", log.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if log.is_empty() {
        let paragraph = Paragraph::new("(already sorted)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    // One extra row for the end-of-log marker
    let total_rows = log.len() + 1;
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if scroll_state.follow {
        scroll_state.offset = cursor.saturating_sub(visible_height / 2);
    }
    scroll_state.offset = clamp_scroll(scroll_state.offset, total_rows, visible_height);

    let index_width = log.len().to_string().len();

    let mut lines: Vec<Line> = log
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, op)| {
            let is_current = idx == cursor;
            let (marker, op_style) = if is_current {
                (
                    Span::styled("▶ ", Style::default().fg(DEFAULT_THEME.secondary)),
                    Style::default()
                        .fg(DEFAULT_THEME.opcode)
                        .bg(DEFAULT_THEME.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else if idx < cursor {
                (Span::raw("  "), Style::default().fg(DEFAULT_THEME.fg))
            } else {
                (Span::raw("  "), Style::default().fg(DEFAULT_THEME.comment))
            };

            Line::from(vec![
                marker,
                Span::styled(
                    format!("{:>width$} ", idx + 1, width = index_width),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(format!("{:<3}", op.as_str()), op_style),
            ])
        })
        .collect();

    if lines.len() < visible_height && scroll_state.offset + lines.len() == log.len() {
        let end_style = if cursor == log.len() {
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };
        lines.push(Line::from(Span::styled("  ── end ──", end_style)));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
