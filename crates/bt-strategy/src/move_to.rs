//! Single-target movement.

use bt_core::{Position, Status, TickContext};
use bt_mobility::Mover;
use bt_tree::Strategy;

use crate::Approach;

/// Where a [`MoveToTarget`] is heading this tick.
///
/// `None` means the target no longer exists.
pub trait TargetSource<W>: Send {
    fn target(&self, world: &W) -> Option<Position>;
}

/// A fixed point.
impl<W> TargetSource<W> for Position {
    #[inline]
    fn target(&self, _world: &W) -> Option<Position> {
        Some(*self)
    }
}

/// A target looked up from the world every tick, e.g. another entity's
/// current position.
pub struct Tracked<F>(pub F);

impl<W, F> TargetSource<W> for Tracked<F>
where
    F: Fn(&W) -> Option<Position> + Send,
{
    #[inline]
    fn target(&self, world: &W) -> Option<Position> {
        (self.0)(world)
    }
}

/// Moves the agent to a target.
///
/// `Running` while en route, `Success` on arrival and on every later call
/// until reset, without issuing further orders.  `Failure` if the target
/// vanishes; the order is dropped on the spot.
pub struct MoveToTarget<T> {
    target:   T,
    approach: Approach,
    arrived:  bool,
}

impl<T> MoveToTarget<T> {
    pub fn new(target: T) -> Self {
        Self { target, approach: Approach::default(), arrived: false }
    }

    /// Override the arrival threshold.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.approach = Approach::new(threshold);
        self
    }

    #[inline]
    pub fn has_arrived(&self) -> bool {
        self.arrived
    }

    #[inline]
    pub fn approach(&self) -> &Approach {
        &self.approach
    }
}

impl<W, T> Strategy<W> for MoveToTarget<T>
where
    W: Mover,
    T: TargetSource<W>,
{
    fn process(&mut self, _ctx: &TickContext, world: &mut W) -> Status {
        if self.arrived {
            return Status::Success;
        }
        let Some(target) = self.target.target(world) else {
            self.approach.abandon(world);
            return Status::Failure;
        };
        if self.approach.advance(world, target) {
            self.arrived = true;
            return Status::Success;
        }
        Status::Running
    }

    fn reset(&mut self) {
        self.arrived = false;
        self.approach.reset();
    }
}
