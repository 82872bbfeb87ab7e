use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{app::AppState, ui::theme::Theme};

/// Label of the last tab.
pub const TOTALS_LABEL: &str = "Total";

/// Renders the tab bar: one tab per category, then the totals tab.
pub fn render_tabs(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let labels = state
        .sections
        .iter()
        .map(|view| view.title.as_str())
        .chain(std::iter::once(TOTALS_LABEL));
    let active = state.tab_index();

    let mut spans = vec![Span::raw(" ")];
    for (i, label) in labels.enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("{} ", i + 1),
            Style::default().fg(theme.text_muted),
        ));

        if i == active {
            spans.push(Span::styled("[", Style::default().fg(theme.accent)));
            spans.push(Span::styled(
                label.to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled("]", Style::default().fg(theme.accent)));
        } else {
            spans.push(Span::styled(
                label.to_string(),
                Style::default().fg(theme.text_muted),
            ));
        }
    }

    let underline = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(underline), area);
}
