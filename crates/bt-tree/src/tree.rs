//! `BehaviourTree` - the root an agent drives once per tick.

use bt_core::{Status, TickContext};
use tracing::debug;

use crate::{Node, TreeResult};

/// The distinguished root of an agent's behaviour tree.
///
/// Every tick the root re-walks its children from the first one.  The first
/// child that does not report `Success` makes the whole tree report
/// `Running`, and later siblings are not processed that tick.  When every
/// child succeeds the tree reports `Success`.  The root never reports
/// `Failure`.
///
/// The structure is frozen by the first `process` call: later
/// [`add_child`][Self::add_child] calls are rejected, on the root and on
/// every node below it.
pub struct BehaviourTree<W> {
    root:  Node<W>,
    ticks: u64,
}

impl<W> BehaviourTree<W> {
    /// An empty tree.  Until children are added it reports `Success`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { root: Node::gate(name, Vec::new()), ticks: 0 }
    }

    pub fn with_children(name: impl Into<String>, children: Vec<Node<W>>) -> Self {
        Self { root: Node::gate(name, children), ticks: 0 }
    }

    /// Append a top-level child.  Fails once the tree has been processed.
    pub fn add_child(&mut self, child: Node<W>) -> TreeResult<()> {
        self.root.add_child(child)
    }

    /// Process the tree for one tick.
    pub fn process(&mut self, ctx: &TickContext, world: &mut W) -> Status {
        if self.ticks == 0 {
            self.root.freeze();
        }
        self.ticks += 1;
        self.root.process(ctx, world)
    }

    /// Discard all in-progress state in the tree without rebuilding it.
    pub fn reset(&mut self) {
        debug!(tree = %self.root.name(), ticks = self.ticks, "resetting behaviour tree");
        self.root.reset();
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.root.name()
    }

    /// Status from the most recent `process`, `None` before the first tick
    /// or after a reset.
    #[inline]
    pub fn status(&self) -> Option<Status> {
        self.root.status()
    }

    /// Number of `process` calls so far.  Not cleared by `reset`.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[inline]
    pub fn root(&self) -> &Node<W> {
        &self.root
    }

    /// Mutable access to a top-level child for priority tweaks and
    /// inspection.  After the first `process` the child rejects
    /// `add_child` like the root does.
    #[inline]
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Node<W>> {
        self.root.child_mut(index)
    }
}

impl<W> std::fmt::Debug for BehaviourTree<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BehaviourTree")
            .field("root", &self.root)
            .field("ticks", &self.ticks)
            .finish()
    }
}
