use engine::Currency;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::{
    app::{SectionMode, SectionView},
    ui::{components::money, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, view: &SectionView, currency: Currency) {
    let theme = Theme::default();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    render_table(frame, layout[0], view, currency, &theme);
    render_total(frame, layout[1], view, currency, &theme);
}

fn render_table(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &SectionView,
    currency: Currency,
    theme: &Theme,
) {
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Item"),
        Cell::from(Line::from("Monthly").right_aligned()),
    ])
    .style(
        Style::default()
            .fg(theme.text_muted)
            .add_modifier(Modifier::BOLD),
    );

    let rows = view.rows.iter().enumerate().map(|(index, row)| {
        let marker = if view.marked.contains(&index) {
            Span::styled("✗", Style::default().fg(theme.marked))
        } else if row.editable_name {
            Span::styled("·", Style::default().fg(theme.text_muted))
        } else {
            Span::raw(" ")
        };

        let name = match view.mode {
            SectionMode::EditName { row: editing } if editing == index => editing_span(view, theme),
            _ if row.name.is_empty() => {
                Span::styled("(unnamed)", Style::default().fg(theme.text_muted))
            }
            _ => Span::raw(row.name.clone()),
        };

        let amount = match view.mode {
            SectionMode::EditAmount { row: editing } if editing == index => {
                editing_span(view, theme)
            }
            _ => money::plain_amount(row.amount, currency, theme),
        };

        Row::new(vec![
            Cell::from(marker),
            Cell::from(name),
            Cell::from(Line::from(amount).right_aligned()),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Min(20),
            Constraint::Length(18),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(view.title.clone())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    )
    .row_highlight_style(
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("» ");

    let mut table_state = TableState::default();
    if !view.rows.is_empty() {
        table_state.select(Some(view.selected));
    }
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn editing_span(view: &SectionView, theme: &Theme) -> Span<'static> {
    Span::styled(
        format!("{}▏", view.input),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::UNDERLINED),
    )
}

fn render_total(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &SectionView,
    currency: Currency,
    theme: &Theme,
) {
    let line = Line::from(vec![
        Span::styled("Total", Style::default().fg(theme.text_muted)),
        Span::raw(": "),
        money::styled_amount_bold(view.total, currency, theme),
        Span::raw("   "),
        Span::styled("Items", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}", view.rows.len())),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    frame.render_widget(Paragraph::new(line).block(block), area);
}
