//! Keyboard handling.
//!
//! Controls focus: `a` add "New todo", `+`/`i` increment, `c` add via the
//! stable handle, `Tab` or `/` focus the input, `q` quit.
//! Input focus: characters edit the draft, `Enter` submits, `Backspace`
//! deletes, `Esc` or `Tab` return to the controls. `Ctrl+C` always quits.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, Focus, CALLBACK_TASK_TEXT};
use crate::error::AppResult;

impl App {
    /// Apply a key press. Releases and repeats are ignored.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> AppResult<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.focus {
            Focus::Controls => self.handle_controls_key(key),
            Focus::Input => {
                self.handle_input_key(key);
                Ok(())
            }
        }
    }

    fn handle_controls_key(&mut self, key: KeyEvent) -> AppResult<()> {
        match key.code {
            KeyCode::Char('a') => self.add_default(),
            KeyCode::Char('+') | KeyCode::Char('i') => {
                self.increment()?;
            }
            KeyCode::Char('c') => {
                self.add_handle().add(CALLBACK_TASK_TEXT);
            }
            KeyCode::Tab | KeyCode::Char('/') => self.set_focus(Focus::Input),
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.submit_draft();
            }
            KeyCode::Backspace => self.pop_draft_char(),
            KeyCode::Esc | KeyCode::Tab => self.set_focus(Focus::Controls),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.push_draft_char(c);
            }
            _ => {}
        }
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            self.focus = focus;
            self.mark_dirty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(press(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_controls_keys() {
        let mut app = App::default();
        app.handle_key_event(press(KeyCode::Char('a'))).unwrap();
        app.handle_key_event(press(KeyCode::Char('+'))).unwrap();
        app.handle_key_event(press(KeyCode::Char('i'))).unwrap();

        assert_eq!(app.todos().len(), 6);
        assert_eq!(app.counter(), 2);
    }

    #[test]
    fn test_callback_key_goes_through_channel() {
        let mut app = App::default();
        app.handle_key_event(press(KeyCode::Char('c'))).unwrap();
        assert_eq!(app.todos().len(), 5);

        app.process_messages();
        assert_eq!(app.todos().last().unwrap().as_str(), CALLBACK_TASK_TEXT);
    }

    #[test]
    fn test_typing_and_submitting() {
        let mut app = App::default();
        app.handle_key_event(press(KeyCode::Tab)).unwrap();
        assert_eq!(app.focus, Focus::Input);

        // 'a' and 'q' are plain characters while typing
        type_text(&mut app, "aq");
        app.handle_key_event(press(KeyCode::Enter)).unwrap();
        assert!(app.validation_error().is_some());
        assert_eq!(app.todos().len(), 5);
        assert!(!app.should_quit);

        type_text(&mut app, " task");
        app.handle_key_event(press(KeyCode::Enter)).unwrap();
        assert_eq!(app.todos().last().unwrap().as_str(), "aq task");
        assert_eq!(app.input_draft(), "");
    }

    #[test]
    fn test_backspace_edits_draft() {
        let mut app = App::default();
        app.set_focus(Focus::Input);
        type_text(&mut app, "abc");
        app.handle_key_event(press(KeyCode::Backspace)).unwrap();
        assert_eq!(app.input_draft(), "ab");
    }

    #[test]
    fn test_escape_returns_to_controls_then_quits() {
        let mut app = App::default();
        app.set_focus(Focus::Input);
        app.handle_key_event(press(KeyCode::Esc)).unwrap();
        assert_eq!(app.focus, Focus::Controls);
        assert!(!app.should_quit);

        app.handle_key_event(press(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_input() {
        let mut app = App::default();
        app.set_focus(Focus::Input);
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.should_quit);
        assert_eq!(app.input_draft(), "");
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = App::default();
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        app.handle_key_event(key).unwrap();
        assert_eq!(app.todos().len(), 5);
    }
}
