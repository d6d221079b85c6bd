pub mod collision;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod integrator;
pub mod placement;
pub mod runtime;
pub mod voices;

pub use collision::{overlaps, resolve_pair};
pub use config::SimConfig;
pub use engine::{Body, World};
pub use error::ConfigError;
pub use events::{Axis, EventThrottle, ImpactEvent, ImpactKind, MonotonicClock};
pub use integrator::{attraction_force, step, StepParams};
pub use placement::{place_bodies, PlacementSpec};
pub use runtime::{
    build_simulation_context, get_body_states, run_context, run_headless, step_simulation,
    BodyState, SimulationContext, SimulationResult,
};
