//! Fluent builder for assembling a [`BehaviourTree`].
//!
//! Composites are opened with [`sequence`](TreeBuilder::sequence),
//! [`selector`](TreeBuilder::selector), … and closed with
//! [`end`](TreeBuilder::end).  Leaves and prebuilt nodes are appended to the
//! innermost open composite, or to the root when none is open.  Structural
//! mistakes are remembered and reported once by [`build`](TreeBuilder::build).
//!
//! # Example
//!
//! ```rust,ignore
//! let tree = TreeBuilder::new("cargo ship")
//!     .priority_selector("choose")
//!         .sequence("flee").priority(20)
//!             .leaf("hull low?", Condition::new(|s: &Ship| s.hull < 0.25))
//!             .leaf("run home", MoveToTarget::new(HOME))
//!         .end()
//!         .leaf_with_priority("patrol", 5, Patrol::new(route))
//!     .end()
//!     .build()?;
//! ```

use crate::{BehaviourTree, Node, Strategy, TreeError, TreeResult};

/// Which composite an open builder frame will become.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FrameKind {
    Plain,
    Sequence,
    Selector,
    PrioritySelector,
    UntilSuccess,
    Gate,
}

/// A composite that has been opened but not yet closed.
struct Frame<W> {
    kind:     FrameKind,
    name:     String,
    priority: i32,
    children: Vec<Node<W>>,
}

/// Fluent builder for [`BehaviourTree<W>`].
pub struct TreeBuilder<W> {
    tree:  BehaviourTree<W>,
    stack: Vec<Frame<W>>,
    error: Option<TreeError>,
}

impl<W> TreeBuilder<W> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            tree:  BehaviourTree::new(name),
            stack: Vec::new(),
            error: None,
        }
    }

    // ── Opening composites ────────────────────────────────────────────────

    fn open(mut self, kind: FrameKind, name: impl Into<String>) -> Self {
        self.stack.push(Frame { kind, name: name.into(), priority: 0, children: Vec::new() });
        self
    }

    pub fn plain(self, name: impl Into<String>) -> Self {
        self.open(FrameKind::Plain, name)
    }

    pub fn sequence(self, name: impl Into<String>) -> Self {
        self.open(FrameKind::Sequence, name)
    }

    pub fn selector(self, name: impl Into<String>) -> Self {
        self.open(FrameKind::Selector, name)
    }

    pub fn priority_selector(self, name: impl Into<String>) -> Self {
        self.open(FrameKind::PrioritySelector, name)
    }

    pub fn until_success(self, name: impl Into<String>) -> Self {
        self.open(FrameKind::UntilSuccess, name)
    }

    pub fn gate(self, name: impl Into<String>) -> Self {
        self.open(FrameKind::Gate, name)
    }

    /// Set the priority of the innermost open composite.
    ///
    /// With no open composite this is a no-op; the root has no parent to
    /// order it.
    pub fn priority(mut self, priority: i32) -> Self {
        if let Some(frame) = self.stack.last_mut() {
            frame.priority = priority;
        }
        self
    }

    // ── Appending nodes ───────────────────────────────────────────────────

    pub fn leaf<S>(self, name: impl Into<String>, strategy: S) -> Self
    where
        S: Strategy<W> + 'static,
    {
        self.node(Node::leaf(name, strategy))
    }

    pub fn leaf_with_priority<S>(self, name: impl Into<String>, priority: i32, strategy: S) -> Self
    where
        S: Strategy<W> + 'static,
    {
        self.node(Node::leaf(name, strategy).with_priority(priority))
    }

    /// Append a prebuilt node (or whole subtree).
    pub fn node(mut self, node: Node<W>) -> Self {
        self.append(node);
        self
    }

    /// Close the innermost open composite.
    pub fn end(mut self) -> Self {
        let Some(frame) = self.stack.pop() else {
            self.record(TreeError::UnbalancedEnd);
            return self;
        };

        match close(frame) {
            Ok(node) => self.append(node),
            Err(e)   => self.record(e),
        }
        self
    }

    /// Validate and return the finished tree.
    pub fn build(mut self) -> TreeResult<BehaviourTree<W>> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        if let Some(frame) = self.stack.pop() {
            return Err(TreeError::UnclosedComposite(frame.name));
        }
        Ok(self.tree)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn append(&mut self, node: Node<W>) {
        match self.stack.last_mut() {
            Some(frame) => frame.children.push(node),
            None => {
                if let Err(e) = self.tree.add_child(node) {
                    self.record(e);
                }
            }
        }
    }

    /// Keep only the first error.
    fn record(&mut self, error: TreeError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

fn close<W>(frame: Frame<W>) -> TreeResult<Node<W>> {
    let Frame { kind, name, priority, children } = frame;
    let node = match kind {
        FrameKind::Plain            => Node::plain(name, children)?,
        FrameKind::Sequence         => Node::sequence(name, children),
        FrameKind::Selector         => Node::selector(name, children),
        FrameKind::PrioritySelector => Node::priority_selector(name, children),
        FrameKind::UntilSuccess     => Node::until_success(name, children),
        FrameKind::Gate             => Node::gate(name, children),
    };
    Ok(node.with_priority(priority))
}
