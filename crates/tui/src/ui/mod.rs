pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Tab};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();

    // Main layout: info bar, tabs, content, status, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(2), // Tab bar (label + underline)
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    components::tabs::render_tabs(frame, layout[1], state, &theme);

    match state.tab {
        Tab::Category(index) => {
            if let Some(view) = state.sections.get(index) {
                screens::section::render(frame, layout[2], view, state.currency);
            }
        }
        Tab::Totals => screens::totals::render(frame, layout[2], state, state.currency),
    }

    render_status(frame, layout[3], state, &theme);
    render_bottom_bar(frame, layout[4], state, &theme);
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled("Budget Analysis", Style::default().fg(theme.accent)),
        Span::raw("  "),
        Span::styled("Currency", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.currency)),
        Span::styled(
            engine::GRAND_TOTAL_LABEL,
            Style::default().fg(theme.text_muted),
        ),
        Span::raw(": "),
        components::money::styled_amount(state.grand_total, state.currency, theme),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_status(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let Some(message) = &state.status else {
        return;
    };
    let line = Line::from(Span::styled(
        message.as_str(),
        Style::default().fg(theme.error),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = components::hints::hints_to_spans(&components::hints::global_hints(), theme);

    let context = components::hints::context_hints(state);
    if !context.is_empty() {
        parts.push(components::hints::hint_separator(theme));
        parts.extend(components::hints::hints_to_spans(&context, theme));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{app::App, config::AppConfig};

    fn screen_text(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(130, 32)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn category_tab_lists_default_items() {
        let app = App::new(AppConfig::default());
        let text = screen_text(&app.state);

        assert!(text.contains("Living Expenses"));
        assert!(text.contains("Mortgage/Rent"));
        assert!(text.contains("$0.00"));
    }

    #[test]
    fn totals_tab_shows_monthly_savings() {
        let mut app = App::new(AppConfig::default());
        app.state.tab = Tab::Totals;
        let text = screen_text(&app.state);

        assert!(text.contains("Gross Income"));
        assert!(text.contains("Monthly Savings"));
    }
}
