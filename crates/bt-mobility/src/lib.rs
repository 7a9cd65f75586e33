//! `bt-mobility` - the movement capability consumed by movement strategies.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`mover`]     | `Mover` trait - set destination, remaining distance, pending    |
//! | [`kinematic`] | `KinematicMover` - straight-line mover with planning latency    |
//! | [`route`]     | `Route` - an ordered list of waypoints                          |
//! | [`loader`]    | `load_routes_csv`, `load_routes_reader`                         |
//! | [`error`]     | `MobilityError`, `MobilityResult<T>`                            |
//!
//! # Movement model
//!
//! The behaviour-tree engine never moves anything.  Strategies issue orders
//! through [`Mover`] and read back two facts: how far the mover still has
//! to go, and whether it is still computing a path.  Any navigation backend
//! can sit behind the trait; [`KinematicMover`] is the in-crate reference
//! used by the driver tests and the demo:
//!
//! 1. `set_destination` while idle, or to a target more than the replan
//!    distance away from the current one, starts path planning, which takes
//!    `1 + rand(0..=max_extra_planning_ticks)` driver steps.  Smaller
//!    retargets redirect the mover in place.
//! 2. While planning, `path_pending()` is `true` and the mover stays put.
//! 3. Afterwards each `step(dt)` moves it `speed * dt` toward the target.

pub mod error;
pub mod kinematic;
pub mod loader;
pub mod mover;
pub mod route;


pub use error::{MobilityError, MobilityResult};
pub use kinematic::{DEFAULT_REPLAN_DISTANCE, KinematicMover};
pub use loader::{load_routes_csv, load_routes_reader};
pub use mover::Mover;
pub use route::Route;
