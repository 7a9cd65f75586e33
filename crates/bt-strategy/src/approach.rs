//! Arrival detection shared by the movement strategies.

use bt_core::Position;
use bt_mobility::Mover;
use tracing::trace;

/// Remaining distance below which a mover counts as arrived.
pub const DEFAULT_ARRIVAL_THRESHOLD: f32 = 0.1;

/// Drives one mover toward one target at a time.
///
/// A mover's remaining distance is stale until it has planned a path for
/// the latest order, so arrival is only accepted after the mover has been
/// seen with a pending path (the latch) and once that path is ready.  On
/// arrival the latch clears and the mover is stopped, ready for the next
/// order.
#[derive(Clone, Debug)]
pub struct Approach {
    threshold: f32,
    latched:   bool,
    /// Set by `reset`; the next `advance` cancels the mover's order first.
    cancel:    bool,
}

impl Default for Approach {
    fn default() -> Self {
        Self::new(DEFAULT_ARRIVAL_THRESHOLD)
    }
}

impl Approach {
    pub fn new(threshold: f32) -> Self {
        Self { threshold, latched: false, cancel: false }
    }

    #[inline]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// `true` once a pending path has been observed for the current order.
    #[inline]
    pub fn is_latched(&self) -> bool {
        self.latched
    }

    /// `true` when a reset is waiting to cancel the mover's order.
    #[inline]
    pub fn cancel_pending(&self) -> bool {
        self.cancel
    }

    /// Issue the order for this tick and report whether the mover arrived.
    pub fn advance<M>(&mut self, mover: &mut M, target: Position) -> bool
    where
        M: Mover + ?Sized,
    {
        if self.cancel {
            self.cancel = false;
            mover.reset_path();
        }

        mover.set_destination(target);

        let pending = mover.path_pending();
        if self.latched && !pending && mover.remaining_distance() < self.threshold {
            trace!(%target, "arrived");
            self.latched = false;
            mover.reset_path();
            return true;
        }
        if pending {
            self.latched = true;
        }
        false
    }

    /// Drop the current order immediately.  Used when the world itself is
    /// at hand, e.g. when a tracked target disappears.
    pub fn abandon<M>(&mut self, mover: &mut M)
    where
        M: Mover + ?Sized,
    {
        self.latched = false;
        self.cancel = false;
        mover.reset_path();
    }

    /// Forget the current order and cancel it on the next `advance`.
    pub fn reset(&mut self) {
        self.latched = false;
        self.cancel = true;
    }
}
