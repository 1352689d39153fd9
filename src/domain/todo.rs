use chrono::{DateTime, Local};
use log::debug;
use uuid::Uuid;

/// A single to-do entry
#[derive(Debug, Clone)]
pub struct TodoItem {
    /// Unique ID, stable for the item's lifetime
    pub id: Uuid,
    pub title: String,
    pub is_completed: bool,
    /// When the item was added
    pub created_at: DateTime<Local>,
    /// When the item was last checked off (None while open)
    pub completed_at: Option<DateTime<Local>>,
}

impl TodoItem {
    pub fn new(title: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            is_completed: false,
            created_at: Local::now(),
            completed_at: None,
        }
    }

    /// Flip the completion flag, returning the new value
    pub fn toggle(&mut self) -> bool {
        self.is_completed = !self.is_completed;
        self.completed_at = if self.is_completed { Some(Local::now()) } else { None };
        self.is_completed
    }
}

/// Ordered list of to-do items, in insertion order
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new open item. Blank titles are ignored.
    pub fn add_item(&mut self, title: &str) -> Option<Uuid> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let item = TodoItem::new(title.to_string());
        let id = item.id;
        debug!("todo added: {} {:?}", id, item.title);
        self.items.push(item);
        Some(id)
    }

    /// Flip completion of the item with this id.
    /// Returns the new state, or None if no such item exists.
    pub fn toggle_completion(&mut self, id: Uuid) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        let completed = item.toggle();
        debug!("todo toggled: {} completed={}", id, completed);
        Some(completed)
    }

    /// Remove every item whose id is listed. Unknown ids are ignored.
    pub fn delete_items(&mut self, ids: &[Uuid]) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !ids.contains(&item.id));
        let removed = before - self.items.len();
        debug!("todo deleted by id: {} removed", removed);
        removed
    }

    /// Remove items at the given positions. Out-of-range offsets are ignored.
    pub fn delete_at_offsets(&mut self, offsets: &[usize]) -> usize {
        let before = self.items.len();
        let mut index = 0;
        self.items.retain(|_| {
            let keep = !offsets.contains(&index);
            index += 1;
            keep
        });
        let removed = before - self.items.len();
        debug!("todo deleted by offset: {} removed", removed);
        removed
    }

    pub fn get(&self, id: Uuid) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &TodoItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items not yet completed
    pub fn remaining_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_completed).count()
    }
}
