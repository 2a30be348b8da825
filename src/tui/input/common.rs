use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Terminals speaking the kitty keyboard protocol report `Shift+g` as
/// `Char('g') + SHIFT` and `Shift+/` as `Char('/') + SHIFT`; fold both
/// into the characters other terminals send.
pub(super) fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
    {
        if c.is_ascii_lowercase() {
            key.code = KeyCode::Char(c.to_ascii_uppercase());
        } else if c == '/' {
            key.code = KeyCode::Char('?');
            key.modifiers.remove(KeyModifiers::SHIFT);
        }
    }
    key
}

pub(super) fn is_down(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('j') | KeyCode::Down)
}

pub(super) fn is_up(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('k') | KeyCode::Up)
}

pub(super) fn is_activate(code: KeyCode) -> bool {
    matches!(code, KeyCode::Enter | KeyCode::Char(' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_kitty_shift() {
        let key = normalize_key(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::SHIFT));
        assert_eq!(key.code, KeyCode::Char('G'));
        let key = normalize_key(KeyEvent::new(KeyCode::Char('/'), KeyModifiers::SHIFT));
        assert_eq!(key.code, KeyCode::Char('?'));
        assert!(!key.modifiers.contains(KeyModifiers::SHIFT));
        let key = normalize_key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert_eq!(key.code, KeyCode::Char('G'));
    }
}
