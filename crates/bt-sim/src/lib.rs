//! `bt-sim` - tick loop driver for the rust_bt engine.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Decide - process every agent's tree against its own world
//!              (parallel with the `parallel` feature).
//!   ② Step   - advance every agent's world by one tick (movement etc.).
//!   ③ Report - statuses in ascending AgentId order to the observer;
//!              snapshots every `output_interval_ticks`.
//! ```
//!
//! Agents never see each other: each owns its [`BehaviourTree`] and world
//! `W` exclusively.  Shared state between agents, if any, belongs to the
//! application.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs phases ① and ② on Rayon's thread pool.            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bt_core::SimConfig;
//! use bt_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default())
//!     .agent("courier", tree, world)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```
//!
//! [`BehaviourTree`]: bt_tree::BehaviourTree

pub mod agent;
pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use agent::{Agent, AgentSnapshot, AgentWorld};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
