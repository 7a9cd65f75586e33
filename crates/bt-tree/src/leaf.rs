//! Leaf nodes.

use bt_core::{Status, TickContext};

use crate::Strategy;

/// A childless node that owns exactly one [`Strategy`] and delegates
/// processing and reset to it verbatim.
pub struct Leaf<W> {
    strategy: Box<dyn Strategy<W>>,
}

impl<W> Leaf<W> {
    pub fn new<S>(strategy: S) -> Self
    where
        S: Strategy<W> + 'static,
    {
        Self { strategy: Box::new(strategy) }
    }

    #[inline]
    pub fn process(&mut self, ctx: &TickContext, world: &mut W) -> Status {
        self.strategy.process(ctx, world)
    }

    #[inline]
    pub fn reset(&mut self) {
        self.strategy.reset();
    }
}
