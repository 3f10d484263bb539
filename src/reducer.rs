//! Reducers
//!
//! Pure `(State, Action) -> State` transitions, usable without any reactive
//! runtime. `hooks::use_reducer` wires them to a signal.

use crate::error::ListError;
use crate::list::{ItemCollection, ItemId};

pub trait Reducer: Sized {
    type Action;

    fn reduce(self, action: Self::Action) -> Self;
}

// ========================
// Counter
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counter {
    pub count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
}

impl Reducer for Counter {
    type Action = CounterAction;

    fn reduce(self, action: CounterAction) -> Self {
        match action {
            CounterAction::Increment => Counter { count: self.count + 1 },
            CounterAction::Decrement => Counter { count: self.count - 1 },
        }
    }
}

// ========================
// Todo list
// ========================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    Add(String),
    Remove(ItemId),
}

/// Todo entries plus the outcome of the last edit
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TodoList {
    items: ItemCollection<String>,
    last_error: Option<ListError>,
}

impl TodoList {
    pub fn items(&self) -> &ItemCollection<String> {
        &self.items
    }

    pub fn last_error(&self) -> Option<ListError> {
        self.last_error
    }
}

impl Reducer for TodoList {
    type Action = TodoAction;

    fn reduce(mut self, action: TodoAction) -> Self {
        self.last_error = None;
        match action {
            TodoAction::Add(value) => {
                let id = self.items.append(value);
                log::debug!("[TODO] added #{}", id);
            }
            TodoAction::Remove(id) => {
                if let Err(e) = self.items.remove(id) {
                    log::warn!("[TODO] {}", e);
                    self.last_error = Some(e);
                }
            }
        }
        self
    }
}
