use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    InputChar(char),
    Backspace,
    /// Show the number typed so far
    Apply,
    Increment,
    Decrement,
    ToggleAnimated,
    StopAnimation,
    CycleFont,
    ToggleBold,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => Action::Quit,

        // Number entry
        (KeyCode::Char(c), _) if c.is_ascii_digit() || c == '-' => Action::InputChar(c),
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Enter, _) => Action::Apply,

        // Stepping
        (KeyCode::Char('+'), _) | (KeyCode::Char('='), _) | (KeyCode::Up, _) => Action::Increment,
        (KeyCode::Char('_'), _) | (KeyCode::Down, _) => Action::Decrement,

        // Display
        (KeyCode::Char('a'), _) => Action::ToggleAnimated,
        (KeyCode::Char('s'), _) => Action::StopAnimation,
        (KeyCode::Char('f'), _) => Action::CycleFont,
        (KeyCode::Char('b'), _) => Action::ToggleBold,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_number_entry() {
        assert_eq!(handle_key_event(key(KeyCode::Char('7'))), Action::InputChar('7'));
        assert_eq!(handle_key_event(key(KeyCode::Char('-'))), Action::InputChar('-'));
        assert_eq!(handle_key_event(key(KeyCode::Enter)), Action::Apply);
        assert_eq!(handle_key_event(key(KeyCode::Backspace)), Action::Backspace);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_shifted_plus_steps() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT)),
            Action::Increment
        );
        assert_eq!(handle_key_event(key(KeyCode::Char('_'))), Action::Decrement);
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(handle_key_event(key(KeyCode::Char('z'))), Action::None);
    }
}
