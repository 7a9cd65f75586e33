//! Waypoint patrols.

use bt_core::{Position, Status, TickContext};
use bt_mobility::{Mover, Route};
use bt_tree::Strategy;
use tracing::trace;

use crate::Approach;

/// Visits an ordered list of waypoints once, first to last.
///
/// `Running` until the last waypoint is reached, then `Success` on that
/// tick and every later call until reset.  An empty list succeeds at once.
/// Reset rewinds to the first waypoint and cancels the in-flight order.
pub struct Patrol {
    waypoints: Vec<Position>,
    /// Index of the waypoint being approached; `waypoints.len()` once done.
    cursor:    usize,
    approach:  Approach,
}

impl Patrol {
    pub fn new(waypoints: Vec<Position>) -> Self {
        Self { waypoints, cursor: 0, approach: Approach::default() }
    }

    pub fn from_route(route: &Route) -> Self {
        Self::new(route.waypoints.clone())
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.approach = Approach::new(threshold);
        self
    }

    #[inline]
    pub fn waypoints(&self) -> &[Position] {
        &self.waypoints
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.waypoints.len()
    }

    #[inline]
    pub fn approach(&self) -> &Approach {
        &self.approach
    }
}

impl<W: Mover> Strategy<W> for Patrol {
    fn process(&mut self, _ctx: &TickContext, world: &mut W) -> Status {
        let Some(&target) = self.waypoints.get(self.cursor) else {
            return Status::Success;
        };
        if !self.approach.advance(world, target) {
            return Status::Running;
        }

        self.cursor += 1;
        trace!(reached = self.cursor, of = self.waypoints.len(), "waypoint reached");
        if self.is_complete() { Status::Success } else { Status::Running }
    }

    fn reset(&mut self) {
        self.cursor = 0;
        self.approach.reset();
    }
}
