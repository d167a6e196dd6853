//! Interaction controller - the state machine behind the TUI
//!
//! The controller owns the todo store and the current [`Mode`]. Every input
//! (key action, expiry tick, interrupt) is reduced synchronously by
//! [`Controller::handle`], which mutates state and returns the effects the
//! event loop should carry out. Nothing in here touches the terminal or the
//! clock, so the whole machine is driven directly from tests.
//!
//! ```text
//!            add              confirm / cancel
//!   Idle ─────────▶ Composing ────────────────▶ Idle
//!    │                                           ▲
//!    │ list            delete / cancel           │
//!    └──────────▶ Selecting ─────────────────────┘
//!                  ▲     │ up / down / toggle
//!                  └─────┘
//! ```

mod render;
mod text_field;

#[cfg(test)]
mod tests;

pub use render::{help_text, render, render_lines, RenderLine};
pub use text_field::TextField;

use crate::todo::TodoStore;
use chrono::{DateTime, Duration, Utc};

/// Current interaction mode, carrying the fields that only exist in that mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    /// Navigation, waiting for a command key
    #[default]
    Idle,
    /// Typing the text of a new item
    Composing { input: TextField },
    /// Browsing items; `selected` is a 1-based cursor, `None` when the store is empty
    Selecting { selected: Option<usize> },
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Idle => "Idle",
            Mode::Composing { .. } => "Composing",
            Mode::Selecting { .. } => "Selecting",
        }
    }
}

/// Logical key actions, independent of the physical key map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Add,
    List,
    Confirm,
    Cancel,
    Toggle,
    Delete,
    Up,
    Down,
    // Text editing (Composing only)
    Insert(char),
    Backspace,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
}

/// Everything the controller can be asked to reduce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key(Action),
    /// The one-shot expiry timer fired
    ExpiryTick,
    /// Process-level quit (Ctrl+C / SIGINT), honoured in every mode
    Interrupt,
}

/// Hints for the presentation layer; never errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Added(usize),
    EmptyRejected,
    Removed(String),
    Expired(usize),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Added(id) => format!("Added #{}", id),
            Notice::EmptyRejected => "Nothing to add".to_string(),
            Notice::Removed(text) => format!("Deleted \"{}\"", text),
            Notice::Expired(1) => "1 expired todo removed".to_string(),
            Notice::Expired(n) => format!("{} expired todos removed", n),
        }
    }
}

/// Follow-up work requested by a reduction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Leave the event loop
    Terminate,
    /// Schedule the next expiry tick
    RearmExpiry,
    Notice(Notice),
}

/// Owns the store and the mode; reduces one event at a time
#[derive(Debug)]
pub struct Controller {
    store: TodoStore,
    mode: Mode,
    /// Added to `now` to compute the due date of new items
    default_due: Duration,
}

impl Controller {
    pub fn new(store: TodoStore, default_due: Duration) -> Self {
        Self {
            store,
            mode: Mode::Idle,
            default_due,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    /// Plain-text rendering of the current state
    pub fn render(&self) -> String {
        render(&self.mode, &self.store)
    }

    /// Reduce one event against the current state
    pub fn handle(&mut self, event: Event, now: DateTime<Utc>) -> Vec<Effect> {
        let mode = std::mem::take(&mut self.mode);
        let from = mode.name();

        let (next, effects) = match event {
            Event::Interrupt => (mode, vec![Effect::Terminate]),
            Event::ExpiryTick => self.sweep(mode, now),
            Event::Key(action) => match mode {
                Mode::Idle => self.on_idle(action),
                Mode::Composing { input } => self.on_composing(input, action, now),
                Mode::Selecting { selected } => self.on_selecting(selected, action),
            },
        };

        if next.name() != from {
            tracing::debug!(from, to = next.name(), ?event, "Mode transition");
        }
        self.mode = next;
        effects
    }

    fn on_idle(&mut self, action: Action) -> (Mode, Vec<Effect>) {
        match action {
            Action::Quit => (Mode::Idle, vec![Effect::Terminate]),
            Action::Add => (
                Mode::Composing {
                    input: TextField::new(),
                },
                Vec::new(),
            ),
            Action::List => {
                let selected = (!self.store.is_empty()).then_some(1);
                (Mode::Selecting { selected }, Vec::new())
            }
            _ => (Mode::Idle, Vec::new()),
        }
    }

    fn on_composing(
        &mut self,
        mut input: TextField,
        action: Action,
        now: DateTime<Utc>,
    ) -> (Mode, Vec<Effect>) {
        match action {
            Action::Confirm => {
                let text = input.take();
                let due_at = now.checked_add_signed(self.default_due);
                if due_at.is_none() {
                    tracing::warn!("Due date out of range, item will not expire");
                }
                let notice = match self.store.add(&text, due_at) {
                    Some(id) => {
                        tracing::debug!(id, "Todo added");
                        Notice::Added(id)
                    }
                    None => Notice::EmptyRejected,
                };
                (Mode::Idle, vec![Effect::Notice(notice)])
            }
            Action::Cancel => (Mode::Idle, Vec::new()),
            Action::Insert(c) => {
                input.insert(c);
                (Mode::Composing { input }, Vec::new())
            }
            Action::Backspace => {
                input.backspace();
                (Mode::Composing { input }, Vec::new())
            }
            Action::DeleteForward => {
                input.delete_forward();
                (Mode::Composing { input }, Vec::new())
            }
            Action::CursorLeft => {
                input.move_left();
                (Mode::Composing { input }, Vec::new())
            }
            Action::CursorRight => {
                input.move_right();
                (Mode::Composing { input }, Vec::new())
            }
            Action::CursorHome => {
                input.move_home();
                (Mode::Composing { input }, Vec::new())
            }
            Action::CursorEnd => {
                input.move_end();
                (Mode::Composing { input }, Vec::new())
            }
            _ => (Mode::Composing { input }, Vec::new()),
        }
    }

    fn on_selecting(&mut self, selected: Option<usize>, action: Action) -> (Mode, Vec<Effect>) {
        let len = self.store.len();
        match action {
            Action::Delete => {
                let mut effects = Vec::new();
                if let Some(removed) = selected.and_then(|i| self.store.remove_at(i)) {
                    tracing::debug!(id = removed.id, "Todo deleted");
                    effects.push(Effect::Notice(Notice::Removed(removed.text)));
                }
                // Selection is dropped on the way back to Idle; the next `list` starts at 1
                (Mode::Idle, effects)
            }
            Action::Toggle => {
                if let Some(index) = selected {
                    self.store.toggle_done(index);
                }
                (Mode::Selecting { selected }, Vec::new())
            }
            Action::Cancel => (Mode::Idle, Vec::new()),
            Action::Up => {
                let selected = selected.map(|i| i.saturating_sub(1).max(1));
                (Mode::Selecting { selected }, Vec::new())
            }
            Action::Down => {
                let selected = selected.map(|i| (i + 1).min(len));
                (Mode::Selecting { selected }, Vec::new())
            }
            _ => (Mode::Selecting { selected }, Vec::new()),
        }
    }

    fn sweep(&mut self, mode: Mode, now: DateTime<Utc>) -> (Mode, Vec<Effect>) {
        let removed = self.store.sweep_expired(now);
        let mut effects = vec![Effect::RearmExpiry];
        if removed > 0 {
            tracing::info!(removed, remaining = self.store.len(), "Expired todos swept");
            effects.push(Effect::Notice(Notice::Expired(removed)));
        }

        let mode = match mode {
            Mode::Selecting { selected } => Mode::Selecting {
                selected: clamp_selection(selected, self.store.len()),
            },
            other => other,
        };
        (mode, effects)
    }
}

/// Keep a 1-based selection inside `[1, len]`, or `None` for an empty store
fn clamp_selection(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(selected.unwrap_or(1).clamp(1, len))
}
