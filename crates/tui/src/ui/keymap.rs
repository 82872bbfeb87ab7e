use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which set of bindings is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    Browse,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    NextTab,
    PrevTab,
    JumpTab(usize),
    Up,
    Down,
    EditAmount,
    EditName,
    AddRow,
    ToggleMark,
    RemoveRows,
    Submit,
    Cancel,
    Backspace,
    Input(char),
    None,
}

pub fn map_key(key: KeyEvent, mode: KeyMode) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return AppAction::Quit;
        }
        return AppAction::None;
    }

    match mode {
        KeyMode::Browse => map_browse(key.code),
        KeyMode::Editing => map_editing(key.code),
    }
}

fn map_browse(code: KeyCode) -> AppAction {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => AppAction::Quit,
        KeyCode::Tab | KeyCode::Right => AppAction::NextTab,
        KeyCode::BackTab | KeyCode::Left => AppAction::PrevTab,
        KeyCode::Char(ch @ '1'..='9') => AppAction::JumpTab(ch as usize - '1' as usize),
        KeyCode::Up | KeyCode::Char('k') => AppAction::Up,
        KeyCode::Down | KeyCode::Char('j') => AppAction::Down,
        KeyCode::Enter => AppAction::EditAmount,
        KeyCode::Char('e') => AppAction::EditName,
        KeyCode::Char('a') | KeyCode::Char('+') => AppAction::AddRow,
        KeyCode::Char(' ') => AppAction::ToggleMark,
        KeyCode::Char('d') | KeyCode::Char('-') | KeyCode::Delete => AppAction::RemoveRows,
        KeyCode::Esc => AppAction::Cancel,
        _ => AppAction::None,
    }
}

fn map_editing(code: KeyCode) -> AppAction {
    match code {
        KeyCode::Enter => AppAction::Submit,
        KeyCode::Esc => AppAction::Cancel,
        KeyCode::Backspace => AppAction::Backspace,
        KeyCode::Char(ch) => AppAction::Input(ch),
        _ => AppAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_quits_only_while_browsing() {
        assert_eq!(map_key(press(KeyCode::Char('q')), KeyMode::Browse), AppAction::Quit);
        assert_eq!(
            map_key(press(KeyCode::Char('q')), KeyMode::Editing),
            AppAction::Input('q')
        );
    }

    #[test]
    fn ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key, KeyMode::Browse), AppAction::Quit);
        assert_eq!(map_key(key, KeyMode::Editing), AppAction::Quit);
    }

    #[test]
    fn digits_jump_to_tabs() {
        assert_eq!(map_key(press(KeyCode::Char('1')), KeyMode::Browse), AppAction::JumpTab(0));
        assert_eq!(map_key(press(KeyCode::Char('7')), KeyMode::Browse), AppAction::JumpTab(6));
        assert_eq!(
            map_key(press(KeyCode::Char('7')), KeyMode::Editing),
            AppAction::Input('7')
        );
    }

    #[test]
    fn row_actions_are_mapped() {
        assert_eq!(map_key(press(KeyCode::Char('+')), KeyMode::Browse), AppAction::AddRow);
        assert_eq!(map_key(press(KeyCode::Char('-')), KeyMode::Browse), AppAction::RemoveRows);
        assert_eq!(map_key(press(KeyCode::Char(' ')), KeyMode::Browse), AppAction::ToggleMark);
        assert_eq!(map_key(press(KeyCode::Enter), KeyMode::Browse), AppAction::EditAmount);
        assert_eq!(map_key(press(KeyCode::Enter), KeyMode::Editing), AppAction::Submit);
    }
}
