//! Initial body placement by rejection sampling

use crate::collision::rects_overlap;
use crate::engine::Body;
use crate::error::ConfigError;
use glam::Vec2;
use rand::Rng;
use tracing::debug;

/// Parameters for [`place_bodies`]
#[derive(Debug, Clone)]
pub struct PlacementSpec {
    pub count: usize,
    pub arena: Vec2,
    pub body_size: Vec2,
    pub mass: f32,
    pub max_initial_speed: f32,
    /// Candidate positions tried per body before giving up
    pub max_attempts: u32,
}

/// Scatter `spec.count` non-overlapping bodies across the arena.
///
/// Each body is resampled until it clears every body placed before it.
/// Fails on non-finite inputs, if the arena cannot fit a single body, if the
/// bodies' total area exceeds the arena, or if any body runs out of attempts.
pub fn place_bodies<R: Rng>(
    spec: &PlacementSpec,
    rng: &mut R,
) -> Result<Vec<Body>, ConfigError> {
    let size = spec.body_size;
    let arena = spec.arena;
    let too_small = || ConfigError::ArenaTooSmall {
        arena_width: arena.x,
        arena_height: arena.y,
        body_width: size.x,
        body_height: size.y,
        count: spec.count,
    };

    if !arena.is_finite() {
        return Err(ConfigError::invalid_parameter(
            "arena",
            format!("must be finite, got {}x{}", arena.x, arena.y),
        ));
    }
    if !(size.is_finite() && size.x > 0.0 && size.y > 0.0) {
        return Err(ConfigError::invalid_parameter(
            "body_size",
            format!("must be positive and finite, got {}x{}", size.x, size.y),
        ));
    }
    if !(spec.max_initial_speed.is_finite() && spec.max_initial_speed >= 0.0) {
        return Err(ConfigError::invalid_parameter(
            "max_initial_speed",
            format!("must be finite and non-negative, got {}", spec.max_initial_speed),
        ));
    }

    if spec.count == 0 {
        return Ok(Vec::new());
    }
    if arena.x < size.x || arena.y < size.y {
        return Err(too_small());
    }
    if spec.count as f32 * size.x * size.y > arena.x * arena.y {
        return Err(too_small());
    }

    let span = arena - size;
    let mut bodies: Vec<Body> = Vec::with_capacity(spec.count);

    for _ in 0..spec.count {
        let vel = Vec2::new(
            random_component(rng, spec.max_initial_speed),
            random_component(rng, spec.max_initial_speed),
        );

        let mut placed = None;
        for attempt in 1..=spec.max_attempts {
            let pos = Vec2::new(rng.gen_range(0.0..=span.x), rng.gen_range(0.0..=span.y));
            let clear = bodies
                .iter()
                .all(|other| !rects_overlap(pos, size, other.pos, other.size()));
            if clear {
                debug!(index = bodies.len(), attempt, "placed body");
                placed = Some(pos);
                break;
            }
        }

        let pos = placed.ok_or(ConfigError::PlacementExhausted {
            placed: bodies.len(),
            requested: spec.count,
            attempts: spec.max_attempts,
        })?;
        bodies.push(Body::new(pos, vel, size, spec.mass)?);
    }

    Ok(bodies)
}

fn random_component<R: Rng>(rng: &mut R, max: f32) -> f32 {
    if max > 0.0 {
        rng.gen_range(-max..max)
    } else {
        0.0
    }
}
