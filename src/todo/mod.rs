//! Todo store - the ordered in-memory list of todo items
//!
//! Ids are positional: the item at 1-based position `p` always has id `p`.
//! Every mutation that shifts items re-derives the ids of the items behind it,
//! so an id is only meaningful until the next removal.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    /// 1-based positional id
    pub id: usize,
    /// Trimmed, never empty
    pub text: String,
    pub done: bool,
    /// Undone items past this instant are removed by the expiry sweep
    pub due_at: Option<DateTime<Utc>>,
}

impl TodoItem {
    /// Whether this item is eligible for removal by a sweep at `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        !self.done && self.due_at.is_some_and(|due| due <= now)
    }
}

/// Startup record supplied by the launcher (config `[[seed]]` table or seed file)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedItem {
    /// Declared id; ignored in favour of position
    #[serde(default)]
    pub id: Option<usize>,
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl SeedItem {
    pub fn new(text: impl Into<String>, done: bool) -> Self {
        Self {
            id: None,
            text: text.into(),
            done,
        }
    }
}

/// Ordered collection of todo items
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    items: Vec<TodoItem>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from startup records
    ///
    /// Seeded items never expire. Blank records are skipped.
    pub fn from_seed<I>(records: I) -> Self
    where
        I: IntoIterator<Item = SeedItem>,
    {
        let mut store = Self::new();
        for record in records {
            let Some(id) = store.add(&record.text, None) else {
                tracing::debug!("Skipping blank seed record");
                continue;
            };
            if let Some(declared) = record.id {
                if declared != id {
                    tracing::debug!(declared, assigned = id, "Seed id re-derived from position");
                }
            }
            if record.done {
                store.toggle_done(id);
            }
        }
        store
    }

    /// Append a new item, returning its id
    ///
    /// Returns `None` without touching the store when `text` trims to empty.
    pub fn add(&mut self, text: &str, due_at: Option<DateTime<Utc>>) -> Option<usize> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.items.len() + 1;
        self.items.push(TodoItem {
            id,
            text: text.to_string(),
            done: false,
            due_at,
        });
        Some(id)
    }

    /// Flip `done` on the item at 1-based `index`
    ///
    /// Returns false (and does nothing) when `index` is out of range.
    pub fn toggle_done(&mut self, index: usize) -> bool {
        match self.slot(index).and_then(|i| self.items.get_mut(i)) {
            Some(item) => {
                item.done = !item.done;
                true
            }
            None => false,
        }
    }

    /// Delete the item at 1-based `index`, shifting later items left
    pub fn remove_at(&mut self, index: usize) -> Option<TodoItem> {
        let slot = self.slot(index)?;
        let removed = self.items.remove(slot);
        self.renumber_from(slot);
        Some(removed)
    }

    /// Remove every undone item whose due date is at or before `now`
    ///
    /// Returns the number of items removed. Order of the survivors is kept.
    pub fn sweep_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.is_expired(now));
        let removed = before - self.items.len();
        if removed > 0 {
            self.renumber_from(0);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only access by 1-based index
    pub fn item_at(&self, index: usize) -> Option<&TodoItem> {
        self.slot(index).and_then(|i| self.items.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TodoItem> {
        self.items.iter()
    }

    /// Convert a 1-based index into a vector slot
    fn slot(&self, index: usize) -> Option<usize> {
        (1..=self.items.len()).contains(&index).then(|| index - 1)
    }

    fn renumber_from(&mut self, slot: usize) {
        for (i, item) in self.items.iter_mut().enumerate().skip(slot) {
            item.id = i + 1;
        }
    }
}
