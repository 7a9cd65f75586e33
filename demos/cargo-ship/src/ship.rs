//! The world every demo agent acts on: one ship and its surroundings.

use bt_core::{AgentId, AgentRng, Position, Tick, TickContext};
use bt_mobility::{KinematicMover, Mover};
use bt_sim::AgentWorld;

/// A pirate that loiters at `position` during `[from, until)`.
#[derive(Copy, Clone, Debug)]
pub struct PirateRaid {
    pub position: Position,
    pub from:     Tick,
    pub until:    Tick,
}

pub struct Ship {
    pub mover:    KinematicMover,
    pub cargo:    u32,
    pub capacity: u32,
    /// Loads delivered to the station so far.
    pub unloads:  u32,
    pub raid:     Option<PirateRaid>,
    /// Where the pirate is right now, if it is around.
    pub pirate:   Option<Position>,
}

impl Ship {
    pub fn new(start: Position, speed: f32, seed: u64, id: AgentId) -> Self {
        let mover = KinematicMover::new(start, speed, AgentRng::new(seed, id))
            .with_planning_latency(2);
        Self {
            mover,
            cargo: 0,
            capacity: 0,
            unloads: 0,
            raid: None,
            pirate: None,
        }
    }

    pub fn with_hold(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_raid(mut self, raid: PirateRaid) -> Self {
        self.raid = Some(raid);
        self
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.mover.position()
    }

    pub fn hold_full(&self) -> bool {
        self.cargo >= self.capacity
    }

    /// `true` when a pirate is within `radius`.
    pub fn threatened(&self, radius: f32) -> bool {
        self.pirate
            .is_some_and(|p| p.distance(self.position()) < radius)
    }

    /// A point `distance` away from the pirate, straight out along the line
    /// from the pirate through the ship.  `None` once the pirate is gone.
    pub fn escape_point(&self, distance: f32) -> Option<Position> {
        let pirate = self.pirate?;
        let here = self.position();
        let len = pirate.distance(here);
        let (dx, dy, dz) = if len > f32::EPSILON {
            ((here.x - pirate.x) / len, (here.y - pirate.y) / len, (here.z - pirate.z) / len)
        } else {
            (1.0, 0.0, 0.0)
        };
        Some(Position::new(
            pirate.x + dx * distance,
            pirate.y + dy * distance,
            pirate.z + dz * distance,
        ))
    }
}

impl Mover for Ship {
    fn set_destination(&mut self, target: Position) {
        self.mover.set_destination(target);
    }

    fn remaining_distance(&self) -> f32 {
        self.mover.remaining_distance()
    }

    fn path_pending(&self) -> bool {
        self.mover.path_pending()
    }

    fn reset_path(&mut self) {
        self.mover.reset_path();
    }
}

impl AgentWorld for Ship {
    fn step(&mut self, ctx: &TickContext) {
        self.mover.step(ctx.dt_secs);
        // The pirate shows up for the tick after this one.
        let next = ctx.tick + 1;
        self.pirate = self
            .raid
            .filter(|r| r.from <= next && next < r.until)
            .map(|r| r.position);
    }

    fn position(&self) -> Option<Position> {
        Some(self.mover.position())
    }
}
