//! # Init Container
//!
//! The [`Container`] owns a fixed number of [`LevelBucket`]s, indexed
//! `0..num_levels`. Subsystems register actions (or [`Initializer`] objects)
//! against a level; a single call to [`Container::init`] then runs level 0,
//! then level 1, and so on, each level in registration order.
//!
//! ```
//! use initcontainer::Container;
//!
//! let mut container: Container<'_> = Container::new(3);
//! container.register_func(|| Ok(()), 2)?;
//! container.register_func(|| Ok(()), 0)?;
//! container.init()?;
//! # Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
//! ```
//!
//! `init` consumes the container, so it can run at most once and nothing can
//! be registered after it has started.
pub mod config;
pub mod initializer;

use std::fmt;

use crate::error::{BoxError, Error, Result};
use crate::level::{Action, LevelBucket};

pub use config::{ConfigFormat, ContainerConfig};
pub use initializer::{from_fn, Initializer, InitializerFn};

/// Ordered set of levels plus the actions registered against them.
pub struct Container<'a, E = BoxError> {
    levels: Vec<LevelBucket<'a, E>>,
}

impl<E> fmt::Debug for Container<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("levels", &self.levels)
            .finish()
    }
}

impl<'a, E> Container<'a, E> {
    /// Create a container with `num_levels` empty levels.
    ///
    /// Levels are numbered from zero, so `Container::new(5)` accepts levels
    /// 0 through 4. Zero levels is allowed; such a container accepts no
    /// registrations and its `init` does nothing.
    pub fn new(num_levels: usize) -> Self {
        let levels = (0..num_levels).map(LevelBucket::new).collect();
        Self { levels }
    }

    /// Create a container laid out by `config`, naming levels where the
    /// config provides names.
    pub fn from_config(config: &ContainerConfig) -> Result<Self> {
        config.validate()?;
        let levels = (0..config.num_levels)
            .map(|index| match config.level_names.get(index) {
                Some(name) => LevelBucket::named(index, name.clone()),
                None => LevelBucket::new(index),
            })
            .collect();
        Ok(Self { levels })
    }

    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    /// Total number of registered actions across all levels
    pub fn len(&self) -> usize {
        self.levels.iter().map(LevelBucket::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(LevelBucket::is_empty)
    }

    /// Number of actions registered at `level`, or `None` if the level does not exist
    pub fn level_len(&self, level: usize) -> Option<usize> {
        self.levels.get(level).map(LevelBucket::len)
    }

    /// Display name of `level`, or `None` if the level does not exist
    pub fn level_name(&self, level: usize) -> Option<String> {
        self.levels.get(level).map(LevelBucket::name)
    }

    /// Read-only view of the levels, in execution order
    pub fn levels(&self) -> &[LevelBucket<'a, E>] {
        &self.levels
    }

    /// Register an action to run at `level`.
    ///
    /// The lower the level, the earlier the action runs. Fails with
    /// [`Error::LevelOutOfRange`] when `level >= num_levels`, in which case
    /// the action is dropped unexecuted and the container is unchanged.
    pub fn register_func<F>(&mut self, action: F, level: usize) -> Result<()>
    where
        F: FnOnce() -> std::result::Result<(), E> + 'a,
    {
        self.register_action(Box::new(action), level)
    }

    /// Register an [`Initializer`] to run at `level`.
    ///
    /// Same ordering and error behaviour as [`register_func`](Self::register_func).
    pub fn register<I>(&mut self, initializer: I, level: usize) -> Result<()>
    where
        I: Initializer<E> + 'a,
    {
        self.register_action(initializer::into_action(initializer), level)
    }

    fn register_action(&mut self, action: Action<'a, E>, level: usize) -> Result<()> {
        let num_levels = self.levels.len();
        let bucket = self
            .levels
            .get_mut(level)
            .ok_or(Error::LevelOutOfRange { level, num_levels })?;

        bucket.register(action)?;
        log::debug!("Registered init action at level {} ({})", level, bucket.name());
        Ok(())
    }

    /// Run every registered action, level 0 first.
    ///
    /// The first action to fail stops the run: its error is returned exactly
    /// as the action produced it, and no action at a later position (in its
    /// own level or any higher level) runs. Work already done by earlier
    /// actions is left in place.
    pub fn init(self) -> std::result::Result<(), E> {
        let num_levels = self.levels.len();
        let total = self.len();
        log::info!("Running {} init action(s) across {} level(s)", total, num_levels);

        for bucket in self.levels {
            let index = bucket.index();
            let name = bucket.name();
            if bucket.is_empty() {
                log::trace!("Skipping empty level {} ({})", index, name);
                continue;
            }

            log::debug!("Initializing level {} ({}): {} action(s)", index, name, bucket.len());
            if let Err(err) = bucket.init() {
                log::warn!("Initialization stopped at level {} ({})", index, name);
                return Err(err);
            }
            log::debug!("Level {} ({}) complete", index, name);
        }

        log::info!("Initialization complete");
        Ok(())
    }
}
