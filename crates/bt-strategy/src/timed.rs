//! Time-gated actions.

use bt_core::{Status, TickContext};
use bt_tree::Strategy;

/// Accumulates `ctx.dt_secs` across calls and runs its effect once the
/// total reaches `duration_secs`.
///
/// Reports `Running` while waiting and `Success` on the call that fires the
/// effect.  Firing clears the accumulator, so the next call starts a fresh
/// wait.  A non-positive duration fires on the first call.
pub struct TimedAction<F> {
    duration_secs: f32,
    elapsed_secs:  f32,
    effect:        F,
}

impl<F> TimedAction<F> {
    pub fn new(duration_secs: f32, effect: F) -> Self {
        Self { duration_secs, elapsed_secs: 0.0, effect }
    }

    #[inline]
    pub fn duration_secs(&self) -> f32 {
        self.duration_secs
    }

    /// Seconds accumulated toward the current wait.
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed_secs
    }
}

impl<W> TimedAction<fn(&mut W)> {
    /// A plain delay with no effect.
    pub fn wait(duration_secs: f32) -> Self {
        fn nothing<W>(_: &mut W) {}
        Self::new(duration_secs, nothing::<W>)
    }
}

impl<W, F> Strategy<W> for TimedAction<F>
where
    F: FnMut(&mut W) + Send,
{
    fn process(&mut self, ctx: &TickContext, world: &mut W) -> Status {
        self.elapsed_secs += ctx.dt_secs;
        if self.elapsed_secs < self.duration_secs {
            return Status::Running;
        }
        self.elapsed_secs = 0.0;
        (self.effect)(world);
        Status::Success
    }

    fn reset(&mut self) {
        self.elapsed_secs = 0.0;
    }
}
