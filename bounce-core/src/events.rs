//! Impact events and the global event throttle

use crate::voices::note_for;
use serde::Serialize;
use std::time::Instant;

/// Minimum gap, in seconds, between two accepted impact events
pub const DEFAULT_MIN_EVENT_GAP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImpactKind {
    /// The body crossed or touched an arena edge on `axis`
    Boundary { axis: Axis },
    /// The body collided with body `other`
    Collision { other: usize },
}

/// A discrete impact involving one body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImpactEvent {
    pub body: usize,
    pub kind: ImpactKind,
}

impl ImpactEvent {
    pub fn boundary(body: usize, axis: Axis) -> Self {
        Self {
            body,
            kind: ImpactKind::Boundary { axis },
        }
    }

    pub fn collision(body: usize, other: usize) -> Self {
        Self {
            body,
            kind: ImpactKind::Collision { other },
        }
    }

    /// Pitch assigned to the body that produced this event
    pub fn note(&self) -> &'static str {
        note_for(self.body)
    }
}

/// Drops any event that arrives less than `min_gap` after the last accepted one.
///
/// The gap is global across all bodies. Suppressed events are discarded, not queued.
/// Owned by the simulation driver and only touched from the simulation thread.
#[derive(Debug, Clone)]
pub struct EventThrottle {
    min_gap: f64,
    last_accepted: Option<f64>,
}

impl EventThrottle {
    pub fn new(min_gap: f64) -> Self {
        Self {
            min_gap,
            last_accepted: None,
        }
    }

    pub fn last_accepted(&self) -> Option<f64> {
        self.last_accepted
    }

    /// Decide whether an event at time `now` gets through, recording it if so.
    ///
    /// A gap that equals `min_gap` up to clock rounding counts as reaching it,
    /// so timestamps like `tick / 60.0` spaced exactly `min_gap` apart all pass.
    pub fn accept(&mut self, now: f64) -> bool {
        let open = match self.last_accepted {
            None => true,
            Some(last) => now - last >= self.min_gap - rounding_slack(now),
        };
        if open {
            self.last_accepted = Some(now);
        }
        open
    }

    /// Keep the events that pass the throttle, all stamped with `now`
    pub fn filter(&mut self, now: f64, events: impl IntoIterator<Item = ImpactEvent>) -> Vec<ImpactEvent> {
        events.into_iter().filter(|_| self.accept(now)).collect()
    }

    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}

/// A few ulps of `now`, the error a subtraction of two nearby timestamps can carry
fn rounding_slack(now: f64) -> f64 {
    4.0 * f64::EPSILON * now.abs().max(1.0)
}

impl Default for EventThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_EVENT_GAP)
    }
}

/// Seconds elapsed since the clock was created
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}
