use bt_core::{Status, TickContext};
use bt_tree::Strategy;

/// Runs its effect exactly once per call and reports `Success`.
pub struct Action<F> {
    effect: F,
}

impl<F> Action<F> {
    pub fn new(effect: F) -> Self {
        Self { effect }
    }
}

impl<W, F> Strategy<W> for Action<F>
where
    F: FnMut(&mut W) + Send,
{
    #[inline]
    fn process(&mut self, _ctx: &TickContext, world: &mut W) -> Status {
        (self.effect)(world);
        Status::Success
    }
}
