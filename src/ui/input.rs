use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

/// A printable character typed without Ctrl or Alt.
pub fn typed_char(key: KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(ch)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_char_ignores_case() {
        let key = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::CONTROL);
        assert!(is_ctrl_char(key, 'q'));
    }

    #[test]
    fn shifted_letters_are_typed() {
        let key = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(typed_char(key), Some('A'));
        let ctrl = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(typed_char(ctrl), None);
    }
}
