//! # initcontainer
//!
//! A leveled initialization registry. Independent subsystems register init
//! actions against a numbered level; one call to [`Container::init`] runs
//! them all, lowest level first and in registration order within a level.
//! This lets subsystems say "run before/after" without a central ordering
//! file.
pub mod container;
pub mod error;
pub mod level;

pub use container::{from_fn, ConfigFormat, Container, ContainerConfig, Initializer, InitializerFn};
pub use error::{BoxError, Error, Result};
pub use level::{Action, LevelBucket};
