//! `bt-core` - foundational types for the `rust_bt` behaviour-tree engine.
//!
//! This crate is a dependency of every other `bt-*` crate.  It has no `bt-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`status`]  | `Status` - the one-tick result of processing a node      |
//! | [`time`]    | `Tick`, `TickContext`, `SimClock`, `SimConfig`           |
//! | [`geo`]     | `Position`, euclidean distance                           |
//! | [`ids`]     | `AgentId`, `RouteId`                                     |
//! | [`rng`]     | `AgentRng` (per-agent, deterministic)                    |
//! | [`error`]   | `BtError`, `BtResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod status;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{BtError, BtResult};
pub use geo::Position;
pub use ids::{AgentId, RouteId};
pub use rng::AgentRng;
pub use status::Status;
pub use time::{SimClock, SimConfig, Tick, TickContext};
