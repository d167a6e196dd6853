//! Controller scenario tests
//!
//! Each test drives the state machine through the same logical events the
//! terminal loop would deliver and checks the resulting mode, store and effects.

use super::*;
use crate::todo::TodoStore;

fn controller_with(texts: &[&str]) -> Controller {
    let mut store = TodoStore::new();
    for text in texts {
        store.add(text, None);
    }
    Controller::new(store, Duration::hours(24))
}

fn press(c: &mut Controller, actions: &[Action]) -> Vec<Effect> {
    let now = Utc::now();
    actions
        .iter()
        .flat_map(|a| c.handle(Event::Key(*a), now))
        .collect()
}

fn type_text(c: &mut Controller, text: &str) {
    let actions: Vec<Action> = text.chars().map(Action::Insert).collect();
    press(c, &actions);
}

fn selected(c: &Controller) -> Option<usize> {
    match c.mode() {
        Mode::Selecting { selected } => *selected,
        other => panic!("expected Selecting, got {}", other.name()),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_add_buy_milk() {
    let mut c = controller_with(&[]);
    let now = Utc::now();

    c.handle(Event::Key(Action::Add), now);
    assert!(matches!(c.mode(), Mode::Composing { .. }));
    type_text(&mut c, "Buy milk");
    let effects = c.handle(Event::Key(Action::Confirm), now);

    assert_eq!(c.mode(), &Mode::Idle);
    assert_eq!(effects, vec![Effect::Notice(Notice::Added(1))]);
    assert_eq!(c.store().len(), 1);

    let item = c.store().item_at(1).unwrap();
    assert_eq!(item.id, 1);
    assert_eq!(item.text, "Buy milk");
    assert!(!item.done);
    assert_eq!(item.due_at, Some(now + Duration::hours(24)));
}

#[test]
fn test_list_down_toggle() {
    let mut c = controller_with(&["one", "two"]);
    press(&mut c, &[Action::List, Action::Down, Action::Toggle]);

    assert_eq!(selected(&c), Some(2));
    assert!(!c.store().item_at(1).unwrap().done);
    assert!(c.store().item_at(2).unwrap().done);
}

#[test]
fn test_list_delete_first() {
    let mut c = controller_with(&["one", "two", "three"]);
    press(&mut c, &[Action::List]);
    assert_eq!(selected(&c), Some(1));

    let effects = press(&mut c, &[Action::Delete]);
    assert_eq!(c.mode(), &Mode::Idle);
    assert_eq!(effects, vec![Effect::Notice(Notice::Removed("one".to_string()))]);
    assert_eq!(c.store().len(), 2);

    let first = c.store().item_at(1).unwrap();
    assert_eq!(first.text, "two");
    assert_eq!(first.id, 1);
}

#[test]
fn test_expiry_tick_sweeps_then_rearms() {
    let mut c = controller_with(&[]);
    let created = Utc::now();
    press(&mut c, &[Action::Add]);
    type_text(&mut c, "stale");
    c.handle(Event::Key(Action::Confirm), created);

    let later = created + Duration::hours(25);
    let effects = c.handle(Event::ExpiryTick, later);
    assert_eq!(
        effects,
        vec![Effect::RearmExpiry, Effect::Notice(Notice::Expired(1))]
    );
    assert!(c.store().is_empty());

    // Second immediate fire removes nothing but still re-arms
    let effects = c.handle(Event::ExpiryTick, later);
    assert_eq!(effects, vec![Effect::RearmExpiry]);
}

#[test]
fn test_expiry_before_due_keeps_item() {
    let mut c = controller_with(&[]);
    let now = Utc::now();
    press(&mut c, &[Action::Add]);
    type_text(&mut c, "fresh");
    c.handle(Event::Key(Action::Confirm), now);

    c.handle(Event::ExpiryTick, now + Duration::hours(23));
    assert_eq!(c.store().len(), 1);
}

#[test]
fn test_confirm_with_unrepresentable_due_date_keeps_item() {
    let store = TodoStore::new();
    let mut c = Controller::new(store, Duration::days(365_000_000));
    press(&mut c, &[Action::Add]);
    type_text(&mut c, "x");
    let effects = press(&mut c, &[Action::Confirm]);

    assert_eq!(effects, vec![Effect::Notice(Notice::Added(1))]);
    assert_eq!(c.store().item_at(1).unwrap().due_at, None);
}

// ─────────────────────────────────────────────────────────────────────────────
// Composing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_confirm_blank_rejected() {
    let mut c = controller_with(&["keep"]);
    press(&mut c, &[Action::Add]);
    type_text(&mut c, "   ");
    let effects = press(&mut c, &[Action::Confirm]);

    assert_eq!(c.mode(), &Mode::Idle);
    assert_eq!(effects, vec![Effect::Notice(Notice::EmptyRejected)]);
    assert_eq!(c.store().len(), 1);
}

#[test]
fn test_cancel_discards_buffer() {
    let mut c = controller_with(&[]);
    press(&mut c, &[Action::Add]);
    type_text(&mut c, "draft");
    press(&mut c, &[Action::Cancel]);
    assert_eq!(c.mode(), &Mode::Idle);
    assert!(c.store().is_empty());

    // Re-entering Composing starts from an empty buffer
    press(&mut c, &[Action::Add]);
    match c.mode() {
        Mode::Composing { input } => assert_eq!(input.value(), ""),
        other => panic!("expected Composing, got {}", other.name()),
    }
}

#[test]
fn test_command_keys_are_text_while_composing() {
    let mut c = controller_with(&[]);
    press(&mut c, &[Action::Add]);
    let effects = press(&mut c, &[Action::Quit, Action::List, Action::Delete]);
    assert!(effects.is_empty());
    assert!(matches!(c.mode(), Mode::Composing { .. }));
}

#[test]
fn test_editing_keys() {
    let mut c = controller_with(&[]);
    press(&mut c, &[Action::Add]);
    type_text(&mut c, "Buy mlk");
    press(
        &mut c,
        &[
            Action::CursorLeft,
            Action::CursorLeft,
            Action::Insert('i'),
            Action::CursorEnd,
            Action::Backspace,
            Action::Insert('k'),
            Action::CursorHome,
            Action::DeleteForward,
            Action::Insert('b'),
            Action::CursorRight,
        ],
    );
    press(&mut c, &[Action::Confirm]);
    assert_eq!(c.store().item_at(1).unwrap().text, "buy milk");
}

// ─────────────────────────────────────────────────────────────────────────────
// Selecting
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_selection_stays_in_bounds() {
    let mut c = controller_with(&["a", "b", "c"]);
    press(&mut c, &[Action::List, Action::Up, Action::Up]);
    assert_eq!(selected(&c), Some(1));

    press(&mut c, &[Action::Down, Action::Down, Action::Down, Action::Down]);
    assert_eq!(selected(&c), Some(3));
}

#[test]
fn test_empty_store_selection_is_none() {
    let mut c = controller_with(&[]);
    press(&mut c, &[Action::List]);
    assert_eq!(selected(&c), None);

    press(&mut c, &[Action::Down, Action::Up, Action::Toggle]);
    assert_eq!(selected(&c), None);
    assert!(c.render().starts_with("(no todos)"));

    let effects = press(&mut c, &[Action::Delete]);
    assert!(effects.is_empty());
    assert_eq!(c.mode(), &Mode::Idle);
}

#[test]
fn test_toggle_twice_in_selecting() {
    let mut c = controller_with(&["a"]);
    press(&mut c, &[Action::List, Action::Toggle, Action::Toggle]);
    assert!(!c.store().item_at(1).unwrap().done);
    assert_eq!(selected(&c), Some(1));
}

#[test]
fn test_sweep_clamps_selection() {
    let now = Utc::now();
    let mut c = controller_with(&["keep"]);
    press(&mut c, &[Action::Add]);
    type_text(&mut c, "expires");
    c.handle(Event::Key(Action::Confirm), now);

    press(&mut c, &[Action::List, Action::Down]);
    assert_eq!(selected(&c), Some(2));

    c.handle(Event::ExpiryTick, now + Duration::days(2));
    assert_eq!(selected(&c), Some(1));
}

#[test]
fn test_sweep_to_empty_clears_selection() {
    let now = Utc::now();
    let mut c = controller_with(&[]);
    press(&mut c, &[Action::Add]);
    type_text(&mut c, "gone");
    c.handle(Event::Key(Action::Confirm), now);
    press(&mut c, &[Action::List]);

    c.handle(Event::ExpiryTick, now + Duration::days(2));
    assert_eq!(selected(&c), None);
}

#[test]
fn test_sweep_preserves_compose_buffer() {
    let mut c = controller_with(&[]);
    press(&mut c, &[Action::Add]);
    type_text(&mut c, "half");
    c.handle(Event::ExpiryTick, Utc::now());

    match c.mode() {
        Mode::Composing { input } => assert_eq!(input.value(), "half"),
        other => panic!("expected Composing, got {}", other.name()),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Termination
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_quit_only_from_idle() {
    let mut c = controller_with(&["a"]);
    assert!(press(&mut c, &[Action::List, Action::Quit]).is_empty());
    assert_eq!(press(&mut c, &[Action::Cancel, Action::Quit]), vec![Effect::Terminate]);
}

#[test]
fn test_interrupt_from_any_mode() {
    let mut c = controller_with(&[]);
    press(&mut c, &[Action::Add]);
    let effects = c.handle(Event::Interrupt, Utc::now());
    assert_eq!(effects, vec![Effect::Terminate]);
}

#[test]
fn test_notice_messages() {
    assert_eq!(Notice::Expired(1).message(), "1 expired todo removed");
    assert_eq!(Notice::Expired(3).message(), "3 expired todos removed");
    assert_eq!(Notice::Added(2).message(), "Added #2");
}
