//! # Level Buckets
//!
//! A [`LevelBucket`] holds the actions registered for one level and runs
//! them in the order they were appended. Buckets are created and owned by a
//! [`Container`](crate::container::Container); they are public so callers can
//! inspect them, but all mutation goes through the container.
use std::fmt;

use crate::error::{BoxError, Result};

/// A zero-argument unit of work registered against a level.
pub type Action<'a, E = BoxError> = Box<dyn FnOnce() -> std::result::Result<(), E> + 'a>;

/// Initial capacity reserved for each bucket's action list.
const ACTIONS_INIT_CAPACITY: usize = 8;

/// Ordered, append-only list of actions for a single level.
pub struct LevelBucket<'a, E = BoxError> {
    index: usize,
    name: Option<String>,
    actions: Vec<Action<'a, E>>,
}

// Manual Debug implementation, actions are opaque closures
impl<E> fmt::Debug for LevelBucket<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelBucket")
            .field("index", &self.index)
            .field("name", &self.name)
            .field("actions", &self.actions.len())
            .finish()
    }
}

impl<'a, E> LevelBucket<'a, E> {
    /// Create an empty, unnamed bucket for `index`
    pub fn new(index: usize) -> Self {
        Self {
            index,
            name: None,
            actions: Vec::with_capacity(ACTIONS_INIT_CAPACITY),
        }
    }

    /// Create an empty bucket carrying a display name
    pub fn named(index: usize, name: impl Into<String>) -> Self {
        let mut bucket = Self::new(index);
        bucket.name = Some(name.into());
        bucket
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The configured name, or `level-<index>` when none was given.
    pub fn name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("level-{}", self.index),
        }
    }

    /// Number of registered actions
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Append an action to the end of this level.
    ///
    /// Never fails at the moment; the `Result` leaves room for capacity or
    /// state checks without changing callers.
    pub fn register(&mut self, action: Action<'a, E>) -> Result<()> {
        self.actions.push(action);
        log::trace!("Level {} now holds {} action(s)", self.index, self.actions.len());
        Ok(())
    }

    /// Run every action in append order.
    ///
    /// Stops at the first action that returns `Err` and hands that error back
    /// as-is. Actions after it are dropped without running.
    pub fn init(self) -> std::result::Result<(), E> {
        for (position, action) in self.actions.into_iter().enumerate() {
            if let Err(err) = action() {
                log::debug!("Action #{} in level {} failed", position, self.index);
                return Err(err);
            }
        }
        Ok(())
    }
}
