//! The `Strategy` trait - the extension point for leaf-level work.

use bt_core::{Status, TickContext};

/// A unit of leaf work owned by a [`Leaf`][crate::Leaf].
///
/// `W` is the agent's mutable world state.  Strategies read and write it
/// through the `&mut W` handed to every call; they keep only their own
/// progress (a waypoint cursor, an elapsed-time accumulator, a captured
/// closure) in `self`.
///
/// `Send` lets a driver process different agents' trees on different
/// threads.  A single tree is never processed concurrently.
///
/// # Example
///
/// ```rust
/// use bt_core::{Status, TickContext};
/// use bt_tree::Strategy;
///
/// struct CountDown(u32);
///
/// impl Strategy<()> for CountDown {
///     fn process(&mut self, _ctx: &TickContext, _world: &mut ()) -> Status {
///         if self.0 == 0 {
///             return Status::Success;
///         }
///         self.0 -= 1;
///         Status::Running
///     }
/// }
/// ```
pub trait Strategy<W>: Send {
    /// Do one tick of work and report how it went.
    fn process(&mut self, ctx: &TickContext, world: &mut W) -> Status;

    /// Discard any in-progress state.
    ///
    /// Default: no-op, for stateless strategies.
    fn reset(&mut self) {}
}

impl<W> Strategy<W> for Box<dyn Strategy<W>> {
    #[inline]
    fn process(&mut self, ctx: &TickContext, world: &mut W) -> Status {
        (**self).process(ctx, world)
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }
}
