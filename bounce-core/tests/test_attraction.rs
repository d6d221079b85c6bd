//! Pointer attraction force and its enable flag

use bounce_core::engine::World;
use bounce_core::integrator::{attraction_force, step, StepParams, DEFAULT_ATTRACTION_CAP};
use bounce_core::tests::test_helpers::{approx_eq_f32, body_at};
use glam::Vec2;

fn open_world(bodies: Vec<bounce_core::Body>) -> World {
    World::with_bodies(Vec2::new(5_000.0, 5_000.0), bodies)
}

#[test]
fn test_force_saturates_at_cap() {
    let cap = DEFAULT_ATTRACTION_CAP;
    assert_eq!(attraction_force(0.0, cap), cap);
    assert_eq!(attraction_force(0.5, cap), cap);
    assert_eq!(attraction_force(1.0, cap), cap);
    assert_eq!(attraction_force(50.0, cap), cap);
    assert!(approx_eq_f32(attraction_force(100.0, cap), 0.01, 1e-7));
}

#[test]
fn test_force_never_exceeds_cap() {
    let cap = DEFAULT_ATTRACTION_CAP;
    let mut distance = 0.0_f32;
    while distance < 1_000.0 {
        let force = attraction_force(distance, cap);
        assert!(force <= cap, "force {} at distance {}", force, distance);
        assert!(force.is_finite());
        distance += 0.37;
    }
}

#[test]
fn test_force_decreases_with_distance() {
    let cap = DEFAULT_ATTRACTION_CAP;
    assert!(attraction_force(200.0, cap) < attraction_force(100.0, cap));
    assert!(attraction_force(1_000.0, cap) < attraction_force(200.0, cap));
}

#[test]
fn test_attraction_increments_velocity_before_integration() {
    // Center at (1025, 1025); point 100 units to the right gives force 0.01
    let mut world = open_world(vec![body_at(1_000.0, 1_000.0, 0.0, 0.0)]);
    world.set_pointer(Vec2::new(1_125.0, 1_025.0));

    let mut events = Vec::new();
    step(&mut world, &StepParams::default(), &mut events);

    let body = &world.bodies[0];
    assert!(approx_eq_f32(body.vel.x, 1.0, 1e-5));
    assert_eq!(body.vel.y, 0.0);
    assert!(approx_eq_f32(body.pos.x, 1_001.0, 1e-3));
    assert!(events.is_empty());
}

#[test]
fn test_pointer_on_center_is_finite() {
    let mut world = open_world(vec![body_at(1_000.0, 1_000.0, 0.5, 0.0)]);
    world.set_pointer(Vec2::new(1_025.0, 1_025.0));

    let mut events = Vec::new();
    step(&mut world, &StepParams::default(), &mut events);

    let body = &world.bodies[0];
    assert!(body.vel.is_finite());
    assert_eq!(body.vel, Vec2::new(0.5, 0.0));
}

#[test]
fn test_pointer_ignored_while_disabled() {
    let mut world = open_world(vec![body_at(1_000.0, 1_000.0, 0.0, 0.0)]);
    world.set_attraction_enabled(false);
    world.set_pointer(Vec2::new(0.0, 0.0));

    assert_eq!(world.attraction_snapshot(), None);

    let mut events = Vec::new();
    step(&mut world, &StepParams::default(), &mut events);
    assert_eq!(world.bodies[0].vel, Vec2::ZERO);
}

#[test]
fn test_disabling_clears_point() {
    let mut world = open_world(Vec::new());
    world.set_pointer(Vec2::new(10.0, 20.0));
    assert_eq!(world.attraction_snapshot(), Some(Vec2::new(10.0, 20.0)));

    assert!(!world.toggle_attraction());
    assert_eq!(world.attraction_snapshot(), None);

    // Re-enabling does not bring the old point back
    assert!(world.toggle_attraction());
    assert_eq!(world.attraction_snapshot(), None);

    world.set_pointer(Vec2::new(30.0, 40.0));
    assert_eq!(world.attraction_snapshot(), Some(Vec2::new(30.0, 40.0)));
}

#[test]
fn test_all_bodies_pulled_toward_same_point() {
    let mut world = open_world(vec![
        body_at(500.0, 1_000.0, 0.0, 0.0),
        body_at(1_500.0, 1_000.0, 0.0, 0.0),
    ]);
    world.set_pointer(Vec2::new(1_025.0, 1_025.0));

    let mut events = Vec::new();
    step(&mut world, &StepParams::default(), &mut events);

    assert!(world.bodies[0].vel.x > 0.0);
    assert!(world.bodies[1].vel.x < 0.0);
    assert!(approx_eq_f32(world.bodies[0].vel.x, -world.bodies[1].vel.x, 1e-6));
}
