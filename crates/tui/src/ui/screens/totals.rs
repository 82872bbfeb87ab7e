use engine::{Currency, GRAND_TOTAL_LABEL};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::{
    app::AppState,
    ui::{components::money, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, currency: Currency) {
    let theme = Theme::default();

    let mut rows: Vec<Row> = state
        .totals
        .iter()
        .map(|(category, total)| {
            Row::new(vec![
                Cell::from(category.clone()),
                Cell::from(Line::from(money::styled_amount(*total, currency, &theme)).right_aligned()),
            ])
        })
        .collect();

    rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
    rows.push(
        Row::new(vec![
            Cell::from(GRAND_TOTAL_LABEL),
            Cell::from(
                Line::from(money::styled_amount_bold(state.grand_total, currency, &theme))
                    .right_aligned(),
            ),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD)),
    );

    let table = Table::new(rows, [Constraint::Min(24), Constraint::Length(18)])
        .header(
            Row::new(vec![
                Cell::from("Category"),
                Cell::from(Line::from("Monthly").right_aligned()),
            ])
            .style(Style::default().fg(theme.text_muted)),
        )
        .block(
            Block::default()
                .title("Total")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        );

    frame.render_widget(table, area);
}
