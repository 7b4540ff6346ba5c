use std::collections::BTreeMap;

use chrono::Utc;

use super::todo::{CreateTodo, Todo, TodoId};

/// Priority-ordered container backing the service.
///
/// Items are kept in insertion order (which is id order, since ids are
/// assigned sequentially); `list_all` sorts by (priority, id) on demand.
/// `priorities_in_use` counts live items per priority value so a value stays
/// "in use" while at least one item holds it.
#[derive(Debug)]
pub struct PriorityCollection {
    items: Vec<Todo>,
    next_id: i64,
    priorities_in_use: BTreeMap<i64, usize>,
}

impl Default for PriorityCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl PriorityCollection {
    pub fn new() -> Self {
        Self { items: Vec::new(), next_id: 1, priorities_in_use: BTreeMap::new() }
    }

    /// Assigns the next id, stamps creation time, and stores the item.
    /// Any priority is accepted, duplicates included.
    pub fn add(&mut self, input: CreateTodo) -> Todo {
        let id = TodoId(self.next_id);
        self.next_id += 1;
        let todo = Todo {
            id,
            title: input.title,
            priority: input.priority,
            created_at: Utc::now(),
            completed: false,
        };
        *self.priorities_in_use.entry(todo.priority).or_insert(0) += 1;
        self.items.push(todo.clone());
        todo
    }

    /// Linear scan over live items; O(n), fine at the expected scale.
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.items.iter().find(|t| t.id == id)
    }

    /// Removes the item with `id`, returning false (and touching nothing)
    /// when no such item exists. The item's priority leaves the in-use set
    /// only once no remaining item holds it.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let Some(pos) = self.items.iter().position(|t| t.id == id) else {
            return false;
        };
        let removed = self.items.remove(pos);
        if let Some(count) = self.priorities_in_use.get_mut(&removed.priority) {
            *count -= 1;
            if *count == 0 {
                self.priorities_in_use.remove(&removed.priority);
            }
        }
        true
    }

    /// All items sorted by (priority asc, id asc). The id tie-break keeps
    /// equal-priority items in insertion order.
    pub fn list_all(&self) -> Vec<Todo> {
        let mut items = self.items.clone();
        items.sort_by_key(|t| (t.priority, t.id));
        items
    }

    /// Integers within [min, max] of the in-use priorities that no live item
    /// holds, ascending. Empty when no items exist or only one distinct
    /// priority is in use. Recomputed from the in-use set on every call.
    pub fn missing_priorities(&self) -> Vec<i64> {
        let (Some((&min, _)), Some((&max, _))) = (
            self.priorities_in_use.first_key_value(),
            self.priorities_in_use.last_key_value(),
        ) else {
            return Vec::new();
        };
        (min..=max).filter(|p| !self.priorities_in_use.contains_key(p)).collect()
    }

    /// Resets to the empty state with the id counter back at 1. Intended for
    /// controlled reinitialization between test runs.
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_id = 1;
        self.priorities_in_use.clear();
    }
}
