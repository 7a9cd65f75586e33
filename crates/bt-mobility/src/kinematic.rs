//! Straight-line reference mover.

use bt_core::{AgentRng, Position};

use crate::Mover;

/// Retargets closer than this to the current destination redirect the
/// mover without planning a new path.
pub const DEFAULT_REPLAN_DISTANCE: f32 = 0.5;

/// A mover that travels in a straight line at constant speed after a short,
/// randomised path-planning delay.
///
/// Planning latency comes from a per-agent [`AgentRng`], so runs are
/// reproducible for a given seed.  A new path is planned when the mover is
/// idle or the destination jumps by more than the replan distance; a target
/// that drifts a little each tick is followed without replanning.
#[derive(Clone, Debug)]
pub struct KinematicMover {
    position:                 Position,
    destination:              Option<Position>,
    /// Units per simulated second.
    speed:                    f32,
    /// Driver steps left before the current path is ready.
    planning_ticks:           u32,
    max_extra_planning_ticks: u32,
    replan_distance:          f32,
    rng:                      AgentRng,
}

impl KinematicMover {
    pub fn new(position: Position, speed: f32, rng: AgentRng) -> Self {
        Self {
            position,
            destination: None,
            speed,
            planning_ticks: 0,
            max_extra_planning_ticks: 0,
            replan_distance: DEFAULT_REPLAN_DISTANCE,
            rng,
        }
    }

    /// Planning takes between 1 and `1 + max_extra` steps.  Default 0
    /// (always exactly one step).
    pub fn with_planning_latency(mut self, max_extra: u32) -> Self {
        self.max_extra_planning_ticks = max_extra;
        self
    }

    pub fn with_replan_distance(mut self, distance: f32) -> Self {
        self.replan_distance = distance;
        self
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn destination(&self) -> Option<Position> {
        self.destination
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Advance the mover by `dt_secs` of simulated time.
    pub fn step(&mut self, dt_secs: f32) {
        if self.planning_ticks > 0 {
            self.planning_ticks -= 1;
            return;
        }
        if let Some(target) = self.destination {
            self.position = self.position.step_toward(target, self.speed * dt_secs);
        }
    }
}

impl Mover for KinematicMover {
    fn set_destination(&mut self, target: Position) {
        let replan = match self.destination {
            None => true,
            Some(current) => current.distance(target) > self.replan_distance,
        };
        self.destination = Some(target);
        if replan {
            self.planning_ticks = 1 + self.rng.gen_range(0..=self.max_extra_planning_ticks);
        }
    }

    fn remaining_distance(&self) -> f32 {
        match self.destination {
            Some(target) => self.position.distance(target),
            None => 0.0,
        }
    }

    fn path_pending(&self) -> bool {
        self.planning_ticks > 0
    }

    fn reset_path(&mut self) {
        self.destination = None;
        self.planning_ticks = 0;
    }
}
