//! Session-goal checklist.
//!
//! A flat list persisted as a JSON array under `focus_goals`. Insertion
//! order is the only ordering; ids are unique so toggle/remove stay correct
//! after reordering-free edits.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{StoreError, ValidationError};
use crate::store::{self, keys, KvStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
}

/// Goal CRUD over the shared store.
pub struct GoalList<'a> {
    store: &'a dyn KvStore,
}

impl<'a> GoalList<'a> {
    pub fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    /// All goals in insertion order. A malformed list reads as empty.
    pub fn load(&self) -> Vec<Goal> {
        store::get_json(self.store, keys::GOALS).unwrap_or_default()
    }

    /// Append a goal. Text is trimmed; whitespace-only text is rejected
    /// with a validation error for the caller to surface inline.
    pub fn add(&self, text: &str) -> Result<Goal, crate::error::CoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText { field: "goal" }.into());
        }
        let goal = Goal {
            id: Uuid::new_v4(),
            text: text.to_string(),
            completed: false,
        };
        let mut goals = self.load();
        goals.push(goal.clone());
        self.save(&goals)?;
        Ok(goal)
    }

    /// Flip a goal's completed flag. Returns the updated goal, or `None`
    /// if the id is unknown.
    pub fn toggle(&self, id: Uuid) -> Result<Option<Goal>, StoreError> {
        let mut goals = self.load();
        let toggled = goals.iter_mut().find(|g| g.id == id).map(|g| {
            g.completed = !g.completed;
            g.clone()
        });
        if toggled.is_some() {
            self.save(&goals)?;
        }
        Ok(toggled)
    }

    /// Remove a goal by id. Returns whether anything was removed.
    pub fn remove(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut goals = self.load();
        let before = goals.len();
        goals.retain(|g| g.id != id);
        let removed = goals.len() != before;
        if removed {
            self.save(&goals)?;
        }
        Ok(removed)
    }

    fn save(&self, goals: &[Goal]) -> Result<(), StoreError> {
        store::set_json(self.store, keys::GOALS, &goals)
    }
}
