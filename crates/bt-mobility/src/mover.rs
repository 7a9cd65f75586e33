//! The `Mover` capability trait.

use bt_core::Position;

/// Something that can be ordered to travel to a position.
///
/// Implemented by a navigation backend, or by an agent's world state that
/// forwards to one.  Movement strategies call it once per tick and never
/// hold on to it between ticks.
pub trait Mover {
    /// Order the mover toward `target`.  Re-issuing the current destination
    /// must not restart path planning.
    fn set_destination(&mut self, target: Position);

    /// Distance left along the current path.  May be stale while
    /// [`path_pending`][Self::path_pending] is `true`.
    fn remaining_distance(&self) -> f32;

    /// `true` while a path is still being computed.
    fn path_pending(&self) -> bool;

    /// Cancel the current order and stop.
    fn reset_path(&mut self);
}
