//! Styling shared by the visual panes

use crate::playback::FrameKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color of a highlighted element for this kind of frame
pub fn highlight_color(kind: FrameKind) -> Color {
    match kind {
        FrameKind::Swap => DEFAULT_THEME.swap,
        FrameKind::Compare | FrameKind::Operation => DEFAULT_THEME.compare,
        FrameKind::Initial | FrameKind::Complete => DEFAULT_THEME.primary,
    }
}

/// Color of an element that is not highlighted
pub fn base_color(kind: FrameKind) -> Color {
    match kind {
        FrameKind::Complete => DEFAULT_THEME.success,
        _ => DEFAULT_THEME.primary,
    }
}

pub fn element_style(kind: FrameKind, highlighted: bool) -> Style {
    if highlighted {
        Style::default()
            .fg(highlight_color(kind))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(base_color(kind))
    }
}

/// Bordered block used by every pane
pub fn pane_block(title: String, is_active: bool) -> Block<'static> {
    let border_style = if is_active {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}
