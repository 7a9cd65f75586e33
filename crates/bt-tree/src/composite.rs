//! Composite nodes: cursor state and composition rules.
//!
//! Every composite owns its children exclusively and keeps a cursor in
//! `[0, children.len()]`.  A cursor equal to `children.len()` means the
//! composite has exhausted its children for this pass.
//!
//! | Rule              | Child Running | Child Success                 | Child Failure              |
//! |-------------------|---------------|-------------------------------|----------------------------|
//! | plain             | Running       | Success                       | Failure                    |
//! | sequence          | Running       | advance; Success when done    | reset, Failure             |
//! | selector          | Running       | reset, Success                | try next; Failure at end   |
//! | until-success     | Running       | advance; Success when done    | reset, Running             |
//! | gate (tree root)  | Running       | next child; Success when done | Running                    |
//!
//! Sequence and until-success process at most one child per tick.  The
//! selector keeps going past failed children in the same tick.  The gate
//! re-walks from child 0 every tick and stops at the first child that is
//! not `Success`.  [`PrioritySelector`] has no cursor; it
//! walks a cached priority order every tick.

use std::cmp::Reverse;

use bt_core::{Status, TickContext};

use crate::Node;

// ── Composite ────────────────────────────────────────────────────────────────

/// Ordered children plus the cursor shared by all cursor-based composites.
pub struct Composite<W> {
    pub(crate) children: Vec<Node<W>>,
    pub(crate) cursor:   usize,
}

impl<W> Composite<W> {
    pub fn new(children: Vec<Node<W>>) -> Self {
        Self { children, cursor: 0 }
    }

    #[inline]
    pub fn children(&self) -> &[Node<W>] {
        &self.children
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// `true` once the cursor has run past the last child.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.children.len()
    }

    pub(crate) fn push(&mut self, child: Node<W>) {
        self.children.push(child);
    }

    /// Rewind the cursor and reset every child.
    pub fn reset(&mut self) {
        self.cursor = 0;
        for child in self.children.iter_mut() {
            child.reset();
        }
    }

    // ── Composition rules ─────────────────────────────────────────────────

    /// Delegate to the child under the cursor.
    ///
    /// Plain composites never move their cursor themselves, so this always
    /// reaches the first child until something external resets it.
    pub(crate) fn process_plain(&mut self, ctx: &TickContext, world: &mut W) -> Status {
        match self.children.get_mut(self.cursor) {
            Some(child) => child.process(ctx, world),
            // Construction rejects empty plain composites.
            None => Status::Failure,
        }
    }

    /// AND with a persistent cursor.
    pub(crate) fn process_sequence(&mut self, ctx: &TickContext, world: &mut W) -> Status {
        if self.is_exhausted() {
            // Only reachable with zero children: vacuously satisfied.
            self.reset();
            return Status::Success;
        }

        match self.children[self.cursor].process(ctx, world) {
            Status::Running => Status::Running,
            Status::Failure => {
                self.reset();
                Status::Failure
            }
            Status::Success => {
                self.cursor += 1;
                if self.is_exhausted() {
                    // Completed pass: rewind so the next call starts at child 0.
                    self.reset();
                    Status::Success
                } else {
                    Status::Running
                }
            }
        }
    }

    /// OR with a persistent cursor.  Failed children are skipped within the
    /// same call; a `Running` child is resumed on the next one.
    pub(crate) fn process_selector(&mut self, ctx: &TickContext, world: &mut W) -> Status {
        while !self.is_exhausted() {
            match self.children[self.cursor].process(ctx, world) {
                Status::Running => return Status::Running,
                Status::Success => {
                    self.reset();
                    return Status::Success;
                }
                Status::Failure => self.cursor += 1,
            }
        }
        self.reset();
        Status::Failure
    }

    /// Sequence that retries from the start instead of failing.
    pub(crate) fn process_until_success(&mut self, ctx: &TickContext, world: &mut W) -> Status {
        if self.is_exhausted() {
            self.reset();
            return Status::Success;
        }

        match self.children[self.cursor].process(ctx, world) {
            Status::Running => Status::Running,
            Status::Failure => {
                self.reset();
                Status::Running
            }
            Status::Success => {
                self.cursor += 1;
                if self.is_exhausted() {
                    self.reset();
                    Status::Success
                } else {
                    Status::Running
                }
            }
        }
    }

    /// Root gate: every child must report `Success` in the same tick.
    pub(crate) fn process_gate(&mut self, ctx: &TickContext, world: &mut W) -> Status {
        for child in self.children.iter_mut() {
            if child.process(ctx, world) != Status::Success {
                return Status::Running;
            }
        }
        Status::Success
    }
}

// ── PrioritySelector ─────────────────────────────────────────────────────────

/// OR over children ordered by descending priority.
///
/// The order is computed lazily on the first `process` after construction
/// or reset and cached until the next reset, so priority changes take effect
/// only after a reset.  Equal priorities keep insertion order.
pub struct PrioritySelector<W> {
    pub(crate) base: Composite<W>,
    order:           Option<Vec<usize>>,
}

impl<W> PrioritySelector<W> {
    pub fn new(children: Vec<Node<W>>) -> Self {
        Self { base: Composite::new(children), order: None }
    }

    #[inline]
    pub fn children(&self) -> &[Node<W>] {
        self.base.children()
    }

    /// The cached evaluation order as child indices, if computed.
    #[inline]
    pub fn cached_order(&self) -> Option<&[usize]> {
        self.order.as_deref()
    }

    pub(crate) fn push(&mut self, child: Node<W>) {
        self.base.push(child);
        self.order = None;
    }

    pub fn reset(&mut self) {
        self.order = None;
        self.base.reset();
    }

    pub(crate) fn process(&mut self, ctx: &TickContext, world: &mut W) -> Status {
        let children = &mut self.base.children;
        let order = self.order.get_or_insert_with(|| priority_order(children.as_slice()));

        for &i in order.iter() {
            let status = children[i].process(ctx, world);
            if status != Status::Failure {
                return status;
            }
        }
        Status::Failure
    }
}

/// Child indices sorted by descending priority.  `sort_by_key` is stable, so
/// ties keep insertion order.
fn priority_order<W>(children: &[Node<W>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..children.len()).collect();
    order.sort_by_key(|&i| Reverse(children[i].priority()));
    order
}
