use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_types::input::Key;

/// Result of translating a single key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Key(Key),
    Ignore,
    Quit,
}

/// Map a crossterm key event to a terminal key.
///
/// Only presses count; releases and repeats reported by enhanced keyboards
/// are ignored. Ctrl+C and Ctrl+D quit, Ctrl+L clears the screen.
pub fn translate(event: &KeyEvent) -> InputResult {
    if event.kind != KeyEventKind::Press {
        return InputResult::Ignore;
    }
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    match event.code {
        KeyCode::Char('c' | 'd') if ctrl => InputResult::Quit,
        KeyCode::Char('l') if ctrl => InputResult::Key(Key::ClearScreen),
        KeyCode::Char(_) if ctrl => InputResult::Ignore,
        KeyCode::Char(c) => InputResult::Key(Key::Char(c)),
        KeyCode::Backspace => InputResult::Key(Key::Backspace),
        KeyCode::Up => InputResult::Key(Key::ArrowUp),
        KeyCode::Down => InputResult::Key(Key::ArrowDown),
        KeyCode::Tab => InputResult::Key(Key::Tab),
        KeyCode::Enter => InputResult::Key(Key::Enter),
        _ => InputResult::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> InputResult {
        translate(&KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> InputResult {
        translate(&KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn printable_chars_pass_through() {
        assert_eq!(press(KeyCode::Char('x')), InputResult::Key(Key::Char('x')));
        assert_eq!(
            translate(&KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT)),
            InputResult::Key(Key::Char('X'))
        );
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(press(KeyCode::Up), InputResult::Key(Key::ArrowUp));
        assert_eq!(press(KeyCode::Down), InputResult::Key(Key::ArrowDown));
        assert_eq!(press(KeyCode::Tab), InputResult::Key(Key::Tab));
        assert_eq!(press(KeyCode::Enter), InputResult::Key(Key::Enter));
        assert_eq!(press(KeyCode::Backspace), InputResult::Key(Key::Backspace));
    }

    #[test]
    fn control_chords() {
        assert_eq!(ctrl('c'), InputResult::Quit);
        assert_eq!(ctrl('d'), InputResult::Quit);
        assert_eq!(ctrl('l'), InputResult::Key(Key::ClearScreen));
        assert_eq!(ctrl('a'), InputResult::Ignore);
    }

    #[test]
    fn releases_are_ignored() {
        let release =
            KeyEvent::new_with_kind(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(translate(&release), InputResult::Ignore);
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(press(KeyCode::Left), InputResult::Ignore);
        assert_eq!(press(KeyCode::F(1)), InputResult::Ignore);
    }
}
