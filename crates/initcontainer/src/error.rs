//! # Init Container Errors
//!
//! Defines the error types raised by the container itself.
//!
//! [`Error`] covers registration and configuration problems. Failures coming
//! out of a registered action are *not* represented here: [`Container::init`]
//! hands back the action's own error value untouched.
//!
//! [`Container::init`]: crate::container::Container::init
use std::error::Error as StdError;
use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

/// Default error type for actions and initializers.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, ThisError)]
pub enum Error {
    /// Registration targeted a level outside `0..num_levels`.
    #[error("Level {level} is out of range (container has {num_levels} levels, valid range is 0..{num_levels})")]
    LevelOutOfRange { level: usize, num_levels: usize },

    #[error("Invalid container config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Failed to read container config '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse container config as {format}: {source}")]
    ConfigParse {
        format: String,
        #[source]
        source: BoxError,
    },

    #[error("Failed to serialize container config to {format}: {source}")]
    ConfigSerialize {
        format: String,
        #[source]
        source: BoxError,
    },
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;
