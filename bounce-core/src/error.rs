//! Setup-time errors
//!
//! Everything here is fatal: it aborts world creation and is never retried.
//! Once a world exists, ticks cannot fail.

use thiserror::Error;

/// Error raised while loading configuration or building a world
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "arena {arena_width}x{arena_height} cannot hold {count} bodies of size {body_width}x{body_height}"
    )]
    ArenaTooSmall {
        arena_width: f32,
        arena_height: f32,
        body_width: f32,
        body_height: f32,
        count: usize,
    },

    #[error("placed {placed} of {requested} bodies before giving up after {attempts} attempts")]
    PlacementExhausted {
        placed: usize,
        requested: usize,
        attempts: u32,
    },

    #[error("invalid body: {0}")]
    InvalidBody(String),

    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
