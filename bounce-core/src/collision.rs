//! Pairwise overlap tests and collision response

use crate::engine::Body;
use glam::Vec2;

/// Restitution applied to both velocities before the exchange
pub const DEFAULT_RESTITUTION: f32 = 0.8;

/// True when the two rectangles share positive area. Touching edges do not count.
pub fn overlaps(a: &Body, b: &Body) -> bool {
    rects_overlap(a.pos, a.size(), b.pos, b.size())
}

pub(crate) fn rects_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}

/// Penetration depth of two overlapping bodies on each axis
pub fn overlap_extent(a: &Body, b: &Body) -> Vec2 {
    let x = (a.pos.x + a.width() - b.pos.x).min(b.pos.x + b.width() - a.pos.x);
    let y = (a.pos.y + a.height() - b.pos.y).min(b.pos.y + b.height() - a.pos.y);
    Vec2::new(x, y)
}

/// Separate `a` and `b` along the axis of least overlap, then exchange velocities.
///
/// Assumes the caller already checked [`overlaps`].
pub fn resolve_pair(a: &mut Body, b: &mut Body, restitution: f32) {
    separate(a, b);
    exchange_velocities(a, b, restitution);
}

fn separate(a: &mut Body, b: &mut Body) {
    let extent = overlap_extent(a, b);

    // Ties go to the y axis
    if extent.x < extent.y {
        let half = extent.x / 2.0;
        if a.pos.x < b.pos.x {
            a.pos.x -= half;
            b.pos.x += half;
        } else {
            a.pos.x += half;
            b.pos.x -= half;
        }
    } else {
        let half = extent.y / 2.0;
        if a.pos.y < b.pos.y {
            a.pos.y -= half;
            b.pos.y += half;
        } else {
            a.pos.y += half;
            b.pos.y -= half;
        }
    }
}

/// 1D elastic collision applied to each axis independently on damped velocities
fn exchange_velocities(a: &mut Body, b: &mut Body, restitution: f32) {
    let v1 = a.vel * restitution;
    let v2 = b.vel * restitution;
    let m1 = a.mass();
    let m2 = b.mass();
    let total = m1 + m2;

    a.vel = v1 * ((m1 - m2) / total) + v2 * (2.0 * m2 / total);
    b.vel = v2 * ((m2 - m1) / total) + v1 * (2.0 * m1 / total);
}

/// Split-borrow two distinct bodies out of a slice
pub(crate) fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
