//! Shared pane helpers

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Color, Modifier, Style};

/// Border style for a pane depending on focus
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Interpolate between the low and high bar colours by rank
pub(crate) fn rank_color(rank: usize, total: usize) -> Color {
    let (lr, lg, lb) = DEFAULT_THEME.bar_low;
    let (hr, hg, hb) = DEFAULT_THEME.bar_high;
    let t = if total > 1 {
        rank.min(total - 1) as f64 / (total - 1) as f64
    } else {
        0.0
    };
    let mix = |low: u8, high: u8| (low as f64 + (high as f64 - low as f64) * t).round() as u8;
    Color::Rgb(mix(lr, hr), mix(lg, hg), mix(lb, hb))
}

/// Bar length for `rank` when the longest bar may be `max_width` cells
pub(crate) fn bar_width(rank: usize, total: usize, max_width: usize) -> usize {
    if max_width == 0 {
        return 0;
    }
    if total <= 1 {
        return max_width;
    }
    1 + rank.min(total - 1) * (max_width - 1) / (total - 1)
}

/// Clamp a scroll offset so the last page stays full
pub(crate) fn clamp_scroll(offset: usize, total_items: usize, visible_height: usize) -> usize {
    if total_items > visible_height {
        offset.min(total_items - visible_height)
    } else {
        0
    }
}
