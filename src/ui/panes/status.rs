//! Status bar rendering with keybindings and state indicators

use crate::config::Mode;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub mode: Mode,
    pub current_step: usize,
    pub total_steps: usize,
    /// More steps can still be pulled, so the total is not final
    pub is_live: bool,
    pub is_playing: bool,
    /// Prompt label and typed text while a value is being entered
    pub input: Option<(&'a str, &'a str)>,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let bar_style = Style::default().bg(DEFAULT_THEME.status_bg);
    let sep_style = bar_style.fg(DEFAULT_THEME.comment);

    // Left side: Step info and status, or the value prompt
    let left_spans = match data.input {
        Some((label, typed)) => vec![
            Span::styled(
                format!(" {} ", label),
                Style::default()
                    .bg(DEFAULT_THEME.secondary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}▏", typed), bar_style.fg(DEFAULT_THEME.fg)),
        ],
        None => {
            let step_text = if data.is_live {
                format!(" Step {}/{}+ ", data.current_step, data.total_steps.saturating_sub(1))
            } else {
                format!(" Step {}/{} ", data.current_step, data.total_steps.saturating_sub(1))
            };
            vec![
                Span::styled(
                    step_text,
                    Style::default()
                        .bg(DEFAULT_THEME.primary)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" | ", sep_style),
                Span::styled(format!(" {} ", data.message), bar_style.fg(DEFAULT_THEME.fg)),
            ]
        }
    };

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar_style)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar_style.fg(DEFAULT_THEME.fg);

    let bindings: &[(&str, &str)] = match (data.input.is_some(), data.mode) {
        (true, _) => &[("↵", "apply"), ("esc", "cancel")],
        (false, Mode::Sort) => &[
            ("←/→", "step"),
            ("⎵", "play"),
            ("↵/⌫", "end/start"),
            ("n/p", "algorithm"),
            ("r", "random"),
            ("+/-", "speed"),
            ("tab", "structures"),
            ("q", "quit"),
        ],
        (false, Mode::Structure) => &[
            ("←/→", "step"),
            ("⎵", "play"),
            ("i/d/f", "insert/delete/find"),
            ("t", "demo"),
            ("n/p", "structure"),
            ("r", "random"),
            ("tab", "sorting"),
            ("q", "quit"),
        ],
    };

    let mut right_spans = Vec::new();
    for (index, (key, desc)) in bindings.iter().enumerate() {
        if index > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }

    // Show status indicators based on position and state
    let is_at_start = data.current_step == 0;
    let is_at_end = !data.is_live && data.current_step + 1 >= data.total_steps;

    let indicator = if data.input.is_some() {
        Some((" ⌨ INPUT ", DEFAULT_THEME.secondary))
    } else if data.is_playing {
        Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
    } else if is_at_end {
        Some((" END ", DEFAULT_THEME.error))
    } else if is_at_start {
        Some((" START ", DEFAULT_THEME.success))
    } else {
        None
    };

    if let Some((text, color)) = indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar_style)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
