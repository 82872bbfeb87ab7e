use ratatui::{style::Style, text::Span};

use crate::{
    app::{AppState, SectionMode, Tab},
    ui::theme::Theme,
};

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

/// Creates a separator span for dividing hint groups.
pub fn hint_separator(theme: &Theme) -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(theme.border))
}

/// Hints for the active tab and mode.
pub fn context_hints(state: &AppState) -> Vec<KeyHint> {
    let Tab::Category(_) = state.tab else {
        return Vec::new();
    };
    let Some(view) = state.active_section() else {
        return Vec::new();
    };

    match view.mode {
        SectionMode::Browse => vec![
            KeyHint::new("↑↓", "select"),
            KeyHint::new("Enter", "amount"),
            KeyHint::new("e", "name"),
            KeyHint::new("a", "add"),
            KeyHint::new("Space", "mark"),
            KeyHint::new("d", "remove"),
        ],
        SectionMode::EditAmount { .. } | SectionMode::EditName { .. } => vec![
            KeyHint::new("Enter", "save"),
            KeyHint::new("Esc", "cancel"),
        ],
    }
}

/// Global application shortcuts.
pub fn global_hints() -> Vec<KeyHint> {
    vec![
        KeyHint::new("Tab", "next"),
        KeyHint::new("1-7", "jump"),
        KeyHint::new("q", "quit"),
    ]
}
