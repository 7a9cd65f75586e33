//! `Node` - the closed set of behaviour-tree node variants.

use bt_core::{Status, TickContext};
use tracing::trace;

use crate::{Composite, Leaf, PrioritySelector, Strategy, TreeError, TreeResult};

/// The variant-specific part of a [`Node`].
///
/// Dispatch is a plain `match`; new leaf behaviour is added by implementing
/// [`Strategy`], not by adding variants.
pub enum NodeKind<W> {
    /// Delegates to one [`Strategy`].
    Leaf(Leaf<W>),
    /// Delegates to the child under its cursor.
    Plain(Composite<W>),
    /// AND with a persistent cursor.
    Sequence(Composite<W>),
    /// OR with a persistent cursor.
    Selector(Composite<W>),
    /// OR over children in descending priority order.
    PrioritySelector(PrioritySelector<W>),
    /// Retries its children from the start until they all succeed.
    UntilSuccess(Composite<W>),
    /// Root composition rule: Success only when every child succeeds in the
    /// same tick, Running otherwise.
    Gate(Composite<W>),
}

impl<W> NodeKind<W> {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Leaf(_)             => "leaf",
            NodeKind::Plain(_)            => "plain",
            NodeKind::Sequence(_)         => "sequence",
            NodeKind::Selector(_)         => "selector",
            NodeKind::PrioritySelector(_) => "priority_selector",
            NodeKind::UntilSuccess(_)     => "until_success",
            NodeKind::Gate(_)             => "gate",
        }
    }
}

/// A behaviour-tree node.
///
/// The `name` is diagnostic only and need not be unique.  The `priority` is
/// read only by a parent [`PrioritySelector`].  Children are owned
/// exclusively, so a tree can never share or cycle nodes.
pub struct Node<W> {
    name:     String,
    priority: i32,
    kind:     NodeKind<W>,
    /// Status from the most recent `process`; `None` before the first tick
    /// and after a reset.
    status:   Option<Status>,
    /// Set once the owning tree has been processed.  Survives reset.
    frozen:   bool,
}

impl<W> Node<W> {
    fn with_kind(name: impl Into<String>, kind: NodeKind<W>) -> Self {
        Self { name: name.into(), priority: 0, kind, status: None, frozen: false }
    }

    // ── Constructors ──────────────────────────────────────────────────────

    pub fn leaf<S>(name: impl Into<String>, strategy: S) -> Self
    where
        S: Strategy<W> + 'static,
    {
        Self::with_kind(name, NodeKind::Leaf(Leaf::new(strategy)))
    }

    /// A plain composite.  Rejects an empty child list because there would
    /// be no child to delegate to.
    pub fn plain(name: impl Into<String>, children: Vec<Node<W>>) -> TreeResult<Self> {
        let name = name.into();
        if children.is_empty() {
            return Err(TreeError::EmptyComposite { name, kind: "plain" });
        }
        Ok(Self::with_kind(name, NodeKind::Plain(Composite::new(children))))
    }

    /// A sequence.  An empty sequence is allowed and reports `Success`.
    pub fn sequence(name: impl Into<String>, children: Vec<Node<W>>) -> Self {
        Self::with_kind(name, NodeKind::Sequence(Composite::new(children)))
    }

    /// A selector.  An empty selector is allowed and reports `Failure`.
    pub fn selector(name: impl Into<String>, children: Vec<Node<W>>) -> Self {
        Self::with_kind(name, NodeKind::Selector(Composite::new(children)))
    }

    pub fn priority_selector(name: impl Into<String>, children: Vec<Node<W>>) -> Self {
        Self::with_kind(name, NodeKind::PrioritySelector(PrioritySelector::new(children)))
    }

    pub fn until_success(name: impl Into<String>, children: Vec<Node<W>>) -> Self {
        Self::with_kind(name, NodeKind::UntilSuccess(Composite::new(children)))
    }

    /// A node with the root composition rule, usable as a nested subtree.
    pub fn gate(name: impl Into<String>, children: Vec<Node<W>>) -> Self {
        Self::with_kind(name, NodeKind::Gate(Composite::new(children)))
    }

    /// Builder-style priority setter.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Change the priority.  A parent priority selector picks the new value
    /// up after its next reset.
    #[inline]
    pub fn set_priority(&mut self, priority: i32) {
        self.priority = priority;
    }

    #[inline]
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    #[inline]
    pub fn kind(&self) -> &NodeKind<W> {
        &self.kind
    }

    #[inline]
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    pub fn children(&self) -> &[Node<W>] {
        match &self.kind {
            NodeKind::Leaf(_) => &[],
            NodeKind::PrioritySelector(p) => p.children(),
            NodeKind::Plain(c)
            | NodeKind::Sequence(c)
            | NodeKind::Selector(c)
            | NodeKind::UntilSuccess(c)
            | NodeKind::Gate(c) => c.children(),
        }
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Node<W>> {
        match &mut self.kind {
            NodeKind::Leaf(_) => None,
            NodeKind::PrioritySelector(p) => p.base.children.get_mut(index),
            NodeKind::Plain(c)
            | NodeKind::Sequence(c)
            | NodeKind::Selector(c)
            | NodeKind::UntilSuccess(c)
            | NodeKind::Gate(c) => c.children.get_mut(index),
        }
    }

    /// The cursor of a cursor-based composite.  `None` for leaves and
    /// priority selectors.
    pub fn cursor(&self) -> Option<usize> {
        match &self.kind {
            NodeKind::Leaf(_) | NodeKind::PrioritySelector(_) => None,
            NodeKind::Plain(c)
            | NodeKind::Sequence(c)
            | NodeKind::Selector(c)
            | NodeKind::UntilSuccess(c)
            | NodeKind::Gate(c) => Some(c.cursor()),
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children().iter().map(Node::subtree_len).sum::<usize>()
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Append a child.  Only valid while the tree is being assembled: once
    /// the owning [`BehaviourTree`][crate::BehaviourTree] has been processed
    /// every node in it rejects new children.
    pub fn add_child(&mut self, child: Node<W>) -> TreeResult<()> {
        if self.frozen {
            return Err(TreeError::TreeStarted(self.name.clone()));
        }
        match &mut self.kind {
            NodeKind::Leaf(_) => return Err(TreeError::LeafHasChildren(self.name.clone())),
            NodeKind::PrioritySelector(p) => p.push(child),
            NodeKind::Plain(c)
            | NodeKind::Sequence(c)
            | NodeKind::Selector(c)
            | NodeKind::UntilSuccess(c)
            | NodeKind::Gate(c) => c.push(child),
        }
        Ok(())
    }

    /// Freeze the structure of this subtree.
    pub(crate) fn freeze(&mut self) {
        self.frozen = true;
        let count = self.children().len();
        for i in 0..count {
            if let Some(child) = self.child_mut(i) {
                child.freeze();
            }
        }
    }

    // ── Processing ────────────────────────────────────────────────────────

    /// Advance this node by one tick.
    pub fn process(&mut self, ctx: &TickContext, world: &mut W) -> Status {
        let status = match &mut self.kind {
            NodeKind::Leaf(leaf)          => leaf.process(ctx, world),
            NodeKind::Plain(c)            => c.process_plain(ctx, world),
            NodeKind::Sequence(c)         => c.process_sequence(ctx, world),
            NodeKind::Selector(c)         => c.process_selector(ctx, world),
            NodeKind::PrioritySelector(p) => p.process(ctx, world),
            NodeKind::UntilSuccess(c)     => c.process_until_success(ctx, world),
            NodeKind::Gate(c)             => c.process_gate(ctx, world),
        };

        if self.status != Some(status) {
            trace!(
                node = %self.name,
                kind = self.kind.name(),
                tick = %ctx.tick,
                %status,
                "node status changed"
            );
        }
        self.status = Some(status);
        status
    }

    /// Rewind this subtree: cursors to 0, every descendant reset, cached
    /// priority order dropped.  Idempotent.
    pub fn reset(&mut self) {
        match &mut self.kind {
            NodeKind::Leaf(leaf)          => leaf.reset(),
            NodeKind::PrioritySelector(p) => p.reset(),
            NodeKind::Plain(c)
            | NodeKind::Sequence(c)
            | NodeKind::Selector(c)
            | NodeKind::UntilSuccess(c)
            | NodeKind::Gate(c) => c.reset(),
        }
        self.status = None;
    }
}

impl<W> std::fmt::Debug for Node<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("kind", &self.kind.name())
            .field("priority", &self.priority)
            .field("status", &self.status)
            .field("children", &self.children())
            .finish()
    }
}
