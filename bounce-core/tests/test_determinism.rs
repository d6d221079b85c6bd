//! Determinism tests - identical inputs produce identical trajectories

use bounce_core::config::SimConfig;
use bounce_core::integrator::{step, StepParams};
use bounce_core::runtime::run_headless;
use bounce_core::tests::test_helpers::{body_at, quiet_world};
use glam::Vec2;

#[test]
fn test_free_flight_is_linear() {
    let initial = vec![
        body_at(1_000.0, 1_000.0, 0.5, 0.25),
        body_at(3_000.0, 1_000.0, -0.75, 0.0),
        body_at(5_000.0, 5_000.0, 0.0, -1.0),
    ];
    let mut world = quiet_world(initial.clone());
    let mut events = Vec::new();

    let ticks = 200;
    for _ in 0..ticks {
        step(&mut world, &StepParams::default(), &mut events);
    }

    assert!(events.is_empty(), "free flight should not produce impacts");
    for (body, start) in world.bodies.iter().zip(initial.iter()) {
        assert_eq!(body.pos, start.pos + start.vel * ticks as f32);
        assert_eq!(body.vel, start.vel);
    }
}

#[test]
fn test_stepping_twice_matches() {
    let initial = vec![
        body_at(100.0, 100.0, 1.3, -0.7),
        body_at(180.0, 120.0, -0.9, 0.4),
        body_at(400.0, 50.0, 0.2, 0.9),
    ];

    let run = || {
        let mut world = bounce_core::World::with_bodies(Vec2::new(600.0, 400.0), initial.clone());
        world.set_pointer(Vec2::new(300.0, 200.0));
        let mut events = Vec::new();
        for _ in 0..1_000 {
            step(&mut world, &StepParams::default(), &mut events);
        }
        (world.bodies, events)
    };

    let (bodies_a, events_a) = run();
    let (bodies_b, events_b) = run();
    assert_eq!(bodies_a, bodies_b);
    assert_eq!(events_a, events_b);
}

#[test]
fn test_seeded_headless_runs_match() {
    let config = SimConfig {
        seed: Some(7),
        ..SimConfig::default()
    };

    let first = run_headless(&config, 600).expect("first run failed");
    let second = run_headless(&config, 600).expect("second run failed");

    assert_eq!(first.ticks, 600);
    assert_eq!(first.raw_event_count, second.raw_event_count);
    assert_eq!(first.accepted, second.accepted);
    for (a, b) in first.bodies.iter().zip(second.bodies.iter()) {
        assert_eq!(a.pos, b.pos);
        assert_eq!(a.vel, b.vel);
    }
}
