//! `bt-tree` - the behaviour-tree execution engine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`strategy`]  | `Strategy` trait - the unit of leaf work                        |
//! | [`leaf`]      | `Leaf` - a childless node delegating to one strategy            |
//! | [`composite`] | `Composite` cursor state and the composition rules              |
//! | [`node`]      | `Node`, `NodeKind` - the closed set of node variants            |
//! | [`tree`]      | `BehaviourTree` - the root driven once per tick                 |
//! | [`builder`]   | `TreeBuilder` - fluent, validating tree assembly                |
//! | [`error`]     | `TreeError`, `TreeResult<T>`                                    |
//!
//! # Processing model
//!
//! Each tick the driver calls [`BehaviourTree::process`] with a
//! [`TickContext`][bt_core::TickContext] and the agent's mutable world
//! state `W`.  The root delegates to its children according to its
//! composition rule, bottoming out at leaves that call their strategy.
//! Results propagate back up and decide whether composites advance, retry,
//! or reset their cursor.
//!
//! Every `process` call is bounded and non-blocking: `Running` is how a node
//! says "not done yet".  Cancelling in-progress work is a [`Node::reset`].

pub mod builder;
pub mod composite;
pub mod error;
pub mod leaf;
pub mod node;
pub mod strategy;
pub mod tree;


pub use builder::TreeBuilder;
pub use composite::{Composite, PrioritySelector};
pub use error::{TreeError, TreeResult};
pub use leaf::Leaf;
pub use node::{Node, NodeKind};
pub use strategy::Strategy;
pub use tree::BehaviourTree;
