//! Stack pane rendering
//!
//! Draws one stack top-first, one element per row: the element's value
//! followed by a bar whose length and colour grow with its rank.

use super::utils::{bar_width, border_style, clamp_scroll, rank_color};
use crate::stacks::Stack;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render a stack pane
///
/// `total` is the number of elements in the whole permutation, so bars in
/// A and B share one scale.
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    stack: &Stack,
    total: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" {} ({}) ", title, stack.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if stack.is_empty() {
        let paragraph = Paragraph::new("(empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    *scroll_offset = clamp_scroll(*scroll_offset, stack.len(), visible_height);

    let label_width = stack
        .iter()
        .map(|e| e.value.to_string().len())
        .max()
        .unwrap_or(1);
    let content_width = area.width.saturating_sub(2) as usize;
    let max_bar = content_width.saturating_sub(label_width + 1);

    let lines: Vec<Line> = stack
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|element| {
            let color = rank_color(element.rank, total);
            Line::from(vec![
                Span::styled(
                    format!("{:>width$} ", element.value, width = label_width),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    "█".repeat(bar_width(element.rank, total, max_bar)),
                    Style::default().fg(color),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
