//! Simulation configuration loaded from JSON.
//!
//! Every field is optional in the file; missing fields take the reference
//! values below.
//!
//! ```json
//! {
//!   "body_count": 10,
//!   "arena_width": 800.0,
//!   "arena_height": 600.0,
//!   "restitution": 0.8,
//!   "min_event_gap": 0.1,
//!   "seed": 42
//! }
//! ```

use crate::collision::DEFAULT_RESTITUTION;
use crate::engine::DEFAULT_BODY_SIZE;
use crate::error::ConfigError;
use crate::events::DEFAULT_MIN_EVENT_GAP;
use crate::integrator::DEFAULT_ATTRACTION_CAP;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub body_count: usize,
    pub body_width: f32,
    pub body_height: f32,
    pub body_mass: f32,
    /// Initial velocity components are drawn from [-max_initial_speed, max_initial_speed]
    pub max_initial_speed: f32,
    pub arena_width: f32,
    pub arena_height: f32,
    pub restitution: f32,
    pub attraction_cap: f32,
    pub attraction_enabled: bool,
    /// Seconds
    pub min_event_gap: f64,
    /// Per body
    pub max_placement_attempts: u32,
    /// Used by headless runs to turn tick counts into event timestamps
    pub ticks_per_second: f64,
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            body_count: 10,
            body_width: DEFAULT_BODY_SIZE,
            body_height: DEFAULT_BODY_SIZE,
            body_mass: 1.0,
            max_initial_speed: 1.0,
            arena_width: 800.0,
            arena_height: 600.0,
            restitution: DEFAULT_RESTITUTION,
            attraction_cap: DEFAULT_ATTRACTION_CAP,
            attraction_enabled: true,
            min_event_gap: DEFAULT_MIN_EVENT_GAP,
            max_placement_attempts: 10_000,
            ticks_per_second: 60.0,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json_str(&source)
    }

    pub fn body_size(&self) -> Vec2 {
        Vec2::new(self.body_width, self.body_height)
    }

    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }

    /// Check value ranges. Arena capacity is checked later, during placement.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("body_width", self.body_width)?;
        positive("body_height", self.body_height)?;
        positive("body_mass", self.body_mass)?;
        positive("arena_width", self.arena_width)?;
        positive("arena_height", self.arena_height)?;

        if !(self.max_initial_speed.is_finite() && self.max_initial_speed >= 0.0) {
            return Err(ConfigError::invalid_parameter(
                "max_initial_speed",
                format!("must be finite and non-negative, got {}", self.max_initial_speed),
            ));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::invalid_parameter(
                "restitution",
                format!("must be within [0, 1], got {}", self.restitution),
            ));
        }
        if !(self.attraction_cap.is_finite() && self.attraction_cap >= 0.0) {
            return Err(ConfigError::invalid_parameter(
                "attraction_cap",
                format!("must be finite and non-negative, got {}", self.attraction_cap),
            ));
        }
        if !(self.min_event_gap.is_finite() && self.min_event_gap >= 0.0) {
            return Err(ConfigError::invalid_parameter(
                "min_event_gap",
                format!("must be finite and non-negative, got {}", self.min_event_gap),
            ));
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::invalid_parameter(
                "max_placement_attempts",
                "must be at least 1",
            ));
        }
        if !(self.ticks_per_second.is_finite() && self.ticks_per_second > 0.0) {
            return Err(ConfigError::invalid_parameter(
                "ticks_per_second",
                format!("must be positive, got {}", self.ticks_per_second),
            ));
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid_parameter(
            name,
            format!("must be positive, got {}", value),
        ))
    }
}
