use crate::collision::{overlaps, pair_mut, resolve_pair};
use crate::engine::{Body, World};
use crate::events::{Axis, ImpactEvent};

/// Upper bound on the per-tick velocity increment factor from the attraction point
pub const DEFAULT_ATTRACTION_CAP: f32 = 0.02;

/// Tunables for a single tick
#[derive(Debug, Clone, Copy)]
pub struct StepParams {
    pub restitution: f32,
    pub attraction_cap: f32,
}

impl Default for StepParams {
    fn default() -> Self {
        Self {
            restitution: crate::collision::DEFAULT_RESTITUTION,
            attraction_cap: DEFAULT_ATTRACTION_CAP,
        }
    }
}

/// Attraction factor at `distance`: `min(1 / max(distance, 1), cap)`
pub fn attraction_force(distance: f32, cap: f32) -> f32 {
    (1.0 / distance.max(1.0)).min(cap)
}

/// Advance the world by one tick, pushing every impact into `events`.
///
/// Order: attraction, integration, boundary reflection, then all pairs i < j.
/// One tick is one unit of time, so velocity is added to position directly.
pub fn step(world: &mut World, params: &StepParams, events: &mut Vec<ImpactEvent>) {
    let attraction = world.attraction_snapshot();
    let arena = world.arena();

    // Attraction is applied as a direct velocity increment, not accel * dt
    if let Some(point) = attraction {
        for body in world.bodies.iter_mut() {
            let delta = point - body.center();
            let force = attraction_force(delta.length(), params.attraction_cap);
            body.vel += delta * force;
        }
    }

    for body in world.bodies.iter_mut() {
        body.pos += body.vel;
    }

    for (i, body) in world.bodies.iter_mut().enumerate() {
        // No clamping: a body may sit slightly outside the arena until it moves back
        if body.pos.x + body.width() >= arena.x || body.pos.x <= 0.0 {
            body.vel.x = -body.vel.x;
            events.push(ImpactEvent::boundary(i, Axis::X));
        }
        if body.pos.y + body.height() >= arena.y || body.pos.y <= 0.0 {
            body.vel.y = -body.vel.y;
            events.push(ImpactEvent::boundary(i, Axis::Y));
        }
    }

    resolve_collisions(&mut world.bodies, params.restitution, events);
}

/// Single O(n^2) pass over all pairs. Overlaps created by a resolution are
/// not revisited until the next tick.
fn resolve_collisions(bodies: &mut [Body], restitution: f32, events: &mut Vec<ImpactEvent>) {
    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = pair_mut(bodies, i, j);
            if overlaps(a, b) {
                resolve_pair(a, b, restitution);
                events.push(ImpactEvent::collision(i, j));
                events.push(ImpactEvent::collision(j, i));
            }
        }
    }
}
