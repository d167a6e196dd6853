// Key map - physical keys to controller events
//
// Bindings depend on the mode: while composing, letters are text, so the
// command letters (q, a, l, d, ...) only act in Idle and Selecting.
// Ctrl+C is an interrupt in every mode.

use crate::controller::{Action, Event, Mode};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a terminal key event into a controller event
///
/// Only press events are mapped; release and repeat reports are ignored so
/// terminals with keyboard enhancement do not double-fire.
pub fn map_key(mode: &Mode, key: &KeyEvent) -> Option<Event> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Event::Interrupt),
            _ => None,
        };
    }

    let action = match mode {
        Mode::Idle => idle_action(key.code),
        Mode::Composing { .. } => composing_action(key.code),
        Mode::Selecting { .. } => selecting_action(key.code),
    }?;
    Some(Event::Key(action))
}

fn idle_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::Add),
        KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Enter => Some(Action::List),
        _ => None,
    }
}

fn composing_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Char(c) => Some(Action::Insert(c)),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Delete => Some(Action::DeleteForward),
        KeyCode::Left => Some(Action::CursorLeft),
        KeyCode::Right => Some(Action::CursorRight),
        KeyCode::Home => Some(Action::CursorHome),
        KeyCode::End => Some(Action::CursorEnd),
        _ => None,
    }
}

fn selecting_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => Some(Action::Delete),
        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Char('t') => Some(Action::Toggle),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Cancel),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        _ => None,
    }
}
