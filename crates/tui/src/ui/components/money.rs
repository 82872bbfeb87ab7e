use engine::{Currency, Money};
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::Theme;

/// Creates a styled span for a signed total with semantic coloring.
///
/// - Positive amounts: green with `+` prefix
/// - Negative amounts: red (negative sign shown)
/// - Zero: neutral text color
#[must_use]
pub fn styled_amount(amount: Money, currency: Currency, theme: &Theme) -> Span<'static> {
    let (color, prefix) = if amount.is_positive() {
        (theme.positive, "+")
    } else if amount.is_negative() {
        (theme.negative, "")
    } else {
        (theme.text, "")
    };

    Span::styled(
        format!("{prefix}{}", amount.format(currency)),
        Style::default().fg(color),
    )
}

/// Same as [`styled_amount`], in bold (grand total).
#[must_use]
pub fn styled_amount_bold(amount: Money, currency: Currency, theme: &Theme) -> Span<'static> {
    let span = styled_amount(amount, currency, theme);
    let style = span.style.add_modifier(Modifier::BOLD);
    span.style(style)
}

/// Line item amount: entered values are unsigned, so no coloring.
#[must_use]
pub fn plain_amount(amount: Money, currency: Currency, theme: &Theme) -> Span<'static> {
    let color = if amount.is_zero() {
        theme.text_muted
    } else {
        theme.text
    };
    Span::styled(amount.format(currency), Style::default().fg(color))
}
