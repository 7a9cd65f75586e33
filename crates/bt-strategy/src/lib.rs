//! `bt-strategy` - the built-in [`Strategy`][bt_tree::Strategy] variants.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`condition`] | `Condition` - predicate over the world, Success or Failure      |
//! | [`action`]    | `Action` - one side effect per call, always Success             |
//! | [`timed`]     | `TimedAction` - side effect once a duration has accumulated     |
//! | [`approach`]  | `Approach` - the path-pending latch shared by movement          |
//! | [`move_to`]   | `MoveToTarget`, `TargetSource`, `Tracked`                       |
//! | [`patrol`]    | `Patrol` - visit an ordered list of waypoints once              |
//!
//! # Movement strategies
//!
//! [`MoveToTarget`] and [`Patrol`] require the agent's world type to
//! implement [`Mover`][bt_mobility::Mover].  They reissue their order every
//! tick and only trust the mover's remaining distance once they have seen
//! it report a pending path for the current order, and never while that
//! path is still pending.  A reset cannot reach the world, so the in-flight
//! order is cancelled on the strategy's next `process`.

pub mod action;
pub mod approach;
pub mod condition;
pub mod move_to;
pub mod patrol;
pub mod timed;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use approach::{Approach, DEFAULT_ARRIVAL_THRESHOLD};
pub use condition::Condition;
pub use move_to::{MoveToTarget, TargetSource, Tracked};
pub use patrol::Patrol;
pub use timed::TimedAction;
