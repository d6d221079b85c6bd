use crate::config::SimConfig;
use crate::engine::World;
use crate::error::ConfigError;
use crate::events::{EventThrottle, ImpactEvent};
use crate::integrator::{step, StepParams};
use crate::placement::{place_bodies, PlacementSpec};
use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{info, trace};

/// Snapshot of one body for rendering
#[derive(Debug, Clone, Serialize)]
pub struct BodyState {
    pub index: usize,
    pub pos: [f32; 2],
    pub size: [f32; 2],
    pub vel: [f32; 2],
}

/// A world plus everything needed to drive it tick by tick
#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub world: World,
    pub config: SimConfig,
    pub params: StepParams,
    pub throttle: EventThrottle,
    pub current_tick: u64,
    raw_events: Vec<ImpactEvent>,
}

impl SimulationContext {
    /// Wrap an existing world, taking tunables from `config`
    pub fn from_world(world: World, config: SimConfig) -> Self {
        let params = StepParams {
            restitution: config.restitution,
            attraction_cap: config.attraction_cap,
        };
        Self {
            world,
            throttle: EventThrottle::new(config.min_event_gap),
            params,
            config,
            current_tick: 0,
            raw_events: Vec::new(),
        }
    }

    /// Timestamp of the current tick on the simulated clock, in seconds
    pub fn simulated_time(&self) -> f64 {
        self.current_tick as f64 / self.config.ticks_per_second
    }

    /// Impacts produced by the last tick before throttling
    pub fn raw_events(&self) -> &[ImpactEvent] {
        &self.raw_events
    }
}

/// Validate `config` and place its bodies
pub fn build_simulation_context(config: &SimConfig) -> Result<SimulationContext, ConfigError> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let spec = PlacementSpec {
        count: config.body_count,
        arena: config.arena(),
        body_size: config.body_size(),
        mass: config.body_mass,
        max_initial_speed: config.max_initial_speed,
        max_attempts: config.max_placement_attempts,
    };
    let bodies = place_bodies(&spec, &mut rng)?;

    let mut world = World::with_bodies(config.arena(), bodies);
    world.set_attraction_enabled(config.attraction_enabled);
    info!(
        bodies = world.bodies.len(),
        width = config.arena_width,
        height = config.arena_height,
        "world built"
    );

    Ok(SimulationContext::from_world(world, config.clone()))
}

/// Run one tick and return the impacts that pass the throttle at time `now`
pub fn step_simulation(ctx: &mut SimulationContext, now: f64) -> Vec<ImpactEvent> {
    ctx.raw_events.clear();
    step(&mut ctx.world, &ctx.params, &mut ctx.raw_events);
    ctx.current_tick += 1;

    let accepted = ctx.throttle.filter(now, ctx.raw_events.iter().copied());
    trace!(
        tick = ctx.current_tick,
        raw = ctx.raw_events.len(),
        accepted = accepted.len(),
        "tick"
    );
    accepted
}

pub fn get_body_states(ctx: &SimulationContext) -> Vec<BodyState> {
    ctx.world
        .bodies
        .iter()
        .enumerate()
        .map(|(index, body)| BodyState {
            index,
            pos: body.pos.to_array(),
            size: body.size().to_array(),
            vel: body.vel.to_array(),
        })
        .collect()
}

/// Outcome of a headless run
#[derive(Debug, Serialize)]
pub struct SimulationResult {
    pub ticks: u64,
    pub raw_event_count: usize,
    pub accepted: Vec<(u64, ImpactEvent)>,
    pub bodies: Vec<BodyState>,
}

/// Build a world from `config` and run it for `ticks` ticks on the simulated clock
pub fn run_headless(config: &SimConfig, ticks: u64) -> Result<SimulationResult, ConfigError> {
    let mut ctx = build_simulation_context(config)?;
    Ok(run_context(&mut ctx, ticks, None))
}

/// Drive an existing context; `pointer` is fed to the world before every tick
pub fn run_context(
    ctx: &mut SimulationContext,
    ticks: u64,
    pointer: Option<Vec2>,
) -> SimulationResult {
    let mut raw_event_count = 0;
    let mut accepted = Vec::new();

    for _ in 0..ticks {
        if let Some(point) = pointer {
            ctx.world.set_pointer(point);
        }
        let now = ctx.simulated_time();
        let events = step_simulation(ctx, now);
        raw_event_count += ctx.raw_events.len();
        accepted.extend(events.into_iter().map(|event| (ctx.current_tick, event)));
    }

    SimulationResult {
        ticks: ctx.current_tick,
        raw_event_count,
        accepted,
        bodies: get_body_states(ctx),
    }
}
