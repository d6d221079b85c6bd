use crate::error::ConfigError;
use glam::Vec2;
use tracing::debug;

/// Side length of a body in the reference configuration
pub const DEFAULT_BODY_SIZE: f32 = 50.0;

/// An axis-aligned rectangular body
///
/// `pos` is the top-left corner. Size and mass are fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    size: Vec2,
    mass: f32,
}

impl Body {
    /// Create a body, rejecting non-positive or non-finite size and mass
    pub fn new(pos: Vec2, vel: Vec2, size: Vec2, mass: f32) -> Result<Self, ConfigError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(ConfigError::InvalidBody(format!(
                "mass must be positive and finite, got {}",
                mass
            )));
        }
        if !(size.is_finite() && size.x > 0.0 && size.y > 0.0) {
            return Err(ConfigError::InvalidBody(format!(
                "size must be positive and finite, got {}x{}",
                size.x, size.y
            )));
        }
        Ok(Self {
            pos,
            vel,
            size,
            mass,
        })
    }

    /// A 50x50 body of mass 1
    pub fn square(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            size: Vec2::splat(DEFAULT_BODY_SIZE),
            mass: 1.0,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// All simulation state: bodies, arena bounds and the attraction input
#[derive(Debug, Clone)]
pub struct World {
    pub bodies: Vec<Body>,
    arena: Vec2,
    attraction_point: Option<Vec2>,
    attraction_enabled: bool,
}

impl World {
    pub fn new(arena: Vec2) -> Self {
        Self::with_bodies(arena, Vec::new())
    }

    pub fn with_bodies(arena: Vec2, bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            arena,
            attraction_point: None,
            attraction_enabled: true,
        }
    }

    /// Arena bounds as (width, height)
    pub fn arena(&self) -> Vec2 {
        self.arena
    }

    /// Resize the arena. Bodies are left where they are.
    pub fn set_arena(&mut self, width: f32, height: f32) {
        let arena = Vec2::new(width, height);
        if arena != self.arena {
            debug!(width, height, "arena resized");
            self.arena = arena;
        }
    }

    pub fn attraction_enabled(&self) -> bool {
        self.attraction_enabled
    }

    /// Enable or disable attraction. Disabling forgets the pointer.
    pub fn set_attraction_enabled(&mut self, enabled: bool) {
        if enabled != self.attraction_enabled {
            debug!(enabled, "attraction toggled");
        }
        self.attraction_enabled = enabled;
        if !enabled {
            self.attraction_point = None;
        }
    }

    pub fn toggle_attraction(&mut self) -> bool {
        self.set_attraction_enabled(!self.attraction_enabled);
        self.attraction_enabled
    }

    /// Record a pointer position; ignored while attraction is disabled
    pub fn set_pointer(&mut self, point: Vec2) {
        if self.attraction_enabled {
            self.attraction_point = Some(point);
        }
    }

    /// The point every body is pulled toward this tick, if any
    pub fn attraction_snapshot(&self) -> Option<Vec2> {
        if self.attraction_enabled {
            self.attraction_point
        } else {
            None
        }
    }
}
