use bt_core::{Status, TickContext};
use bt_tree::Strategy;

/// Reports `Success` when the predicate holds for the world, `Failure`
/// otherwise.  Never `Running`.
pub struct Condition<F> {
    predicate: F,
}

impl<F> Condition<F> {
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<W, F> Strategy<W> for Condition<F>
where
    F: Fn(&W) -> bool + Send,
{
    #[inline]
    fn process(&mut self, _ctx: &TickContext, world: &mut W) -> Status {
        Status::from((self.predicate)(world))
    }
}
