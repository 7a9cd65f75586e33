//! Unit tests for bt-strategy.

use bt_core::{AgentId, AgentRng, Position, Status, Tick, TickContext};
use bt_mobility::{KinematicMover, Mover};
use bt_tree::Strategy;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn ctx(dt_secs: f32) -> TickContext {
    TickContext::new(Tick(0), dt_secs)
}

/// A mover whose readings are set directly by the test between calls.
#[derive(Default)]
struct MockMover {
    pending:      bool,
    remaining:    f32,
    destinations: Vec<Position>,
    resets:       usize,
}

impl MockMover {
    fn reading(&mut self, pending: bool, remaining: f32) {
        self.pending = pending;
        self.remaining = remaining;
    }

    fn last_destination(&self) -> Option<Position> {
        self.destinations.last().copied()
    }
}

impl Mover for MockMover {
    fn set_destination(&mut self, target: Position) {
        self.destinations.push(target);
    }

    fn remaining_distance(&self) -> f32 {
        self.remaining
    }

    fn path_pending(&self) -> bool {
        self.pending
    }

    fn reset_path(&mut self) {
        self.resets += 1;
    }
}

const A: Position = Position { x: 10.0, y: 0.0, z: 0.0 };
const B: Position = Position { x: 10.0, y: 0.0, z: 10.0 };

// ── Condition / Action ────────────────────────────────────────────────────────

#[cfg(test)]
mod condition_tests {
    use super::*;
    use crate::Condition;

    #[test]
    fn maps_predicate_to_status() {
        let mut cond = Condition::new(|w: &i32| *w > 3);
        let (mut high, mut low) = (5_i32, 1_i32);
        assert_eq!(cond.process(&ctx(0.1), &mut high), Status::Success);
        assert_eq!(cond.process(&ctx(0.1), &mut low), Status::Failure);
    }

    #[test]
    fn reset_is_harmless() {
        let mut cond = Condition::new(|_: &()| true);
        Strategy::<()>::reset(&mut cond);
        assert_eq!(cond.process(&ctx(0.1), &mut ()), Status::Success);
    }
}

#[cfg(test)]
mod action_tests {
    use super::*;
    use crate::Action;

    #[test]
    fn runs_effect_once_per_call_and_succeeds() {
        let mut action = Action::new(|w: &mut u32| *w += 1);
        let mut world = 0;
        for _ in 0..3 {
            assert_eq!(action.process(&ctx(0.1), &mut world), Status::Success);
        }
        assert_eq!(world, 3);
    }
}

// ── TimedAction ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod timed_tests {
    use super::*;
    use crate::TimedAction;

    #[test]
    fn fires_once_duration_accumulates() {
        let mut timed = TimedAction::new(1.0, |w: &mut u32| *w += 1);
        let mut world = 0;
        assert_eq!(timed.process(&ctx(0.4), &mut world), Status::Running);
        assert_eq!(timed.process(&ctx(0.4), &mut world), Status::Running);
        assert_eq!(world, 0);
        assert_eq!(timed.process(&ctx(0.4), &mut world), Status::Success);
        assert_eq!(world, 1);
    }

    #[test]
    fn completion_rearms_the_timer() {
        let mut timed = TimedAction::new(0.5, |w: &mut u32| *w += 1);
        let mut world = 0;
        assert_eq!(timed.process(&ctx(0.5), &mut world), Status::Success);
        assert_eq!(timed.elapsed_secs(), 0.0);
        assert_eq!(timed.process(&ctx(0.25), &mut world), Status::Running);
        assert_eq!(timed.process(&ctx(0.25), &mut world), Status::Success);
        assert_eq!(world, 2);
    }

    #[test]
    fn reset_clears_accumulator() {
        let mut timed = TimedAction::new(1.0, |_: &mut ()| {});
        timed.process(&ctx(0.9), &mut ());
        Strategy::<()>::reset(&mut timed);
        assert_eq!(timed.elapsed_secs(), 0.0);
        assert_eq!(timed.process(&ctx(0.9), &mut ()), Status::Running);
    }

    #[test]
    fn zero_duration_fires_immediately() {
        let mut wait = TimedAction::<fn(&mut ())>::wait(0.0);
        assert_eq!(wait.process(&ctx(0.0), &mut ()), Status::Success);
    }
}

// ── Approach ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod approach_tests {
    use super::*;
    use crate::Approach;

    #[test]
    fn stale_distance_before_latch_is_ignored() {
        let mut approach = Approach::default();
        let mut mover = MockMover::default();
        // Reading left over from an earlier order.
        mover.reading(false, 0.0);
        assert!(!approach.advance(&mut mover, A));
        assert!(!approach.is_latched());
    }

    #[test]
    fn never_arrives_while_pending() {
        let mut approach = Approach::default();
        let mut mover = MockMover::default();
        mover.reading(true, 0.0);
        assert!(!approach.advance(&mut mover, A));
        assert!(!approach.advance(&mut mover, A));
        assert!(approach.is_latched());

        mover.reading(false, 0.05);
        assert!(approach.advance(&mut mover, A));
        assert!(!approach.is_latched());
        assert_eq!(mover.resets, 1, "mover stopped on arrival");
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut approach = Approach::default();
        let mut mover = MockMover::default();
        mover.reading(true, 5.0);
        approach.advance(&mut mover, A);
        mover.reading(false, 0.1);
        assert!(!approach.advance(&mut mover, A));
        mover.reading(false, 0.099);
        assert!(approach.advance(&mut mover, A));
    }

    #[test]
    fn reset_cancels_on_next_advance() {
        let mut approach = Approach::default();
        let mut mover = MockMover::default();
        mover.reading(true, 5.0);
        approach.advance(&mut mover, A);

        approach.reset();
        assert!(approach.cancel_pending());
        assert_eq!(mover.resets, 0);

        approach.advance(&mut mover, B);
        assert_eq!(mover.resets, 1);
        assert!(!approach.cancel_pending());
        assert_eq!(mover.last_destination(), Some(B));
    }
}

// ── MoveToTarget ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod move_to_tests {
    use super::*;
    use crate::{MoveToTarget, Tracked};

    #[test]
    fn running_en_route_then_success() {
        let mut mv = MoveToTarget::new(A);
        let mut mover = MockMover::default();

        mover.reading(true, 10.0);
        assert_eq!(mv.process(&ctx(0.1), &mut mover), Status::Running);
        mover.reading(false, 4.0);
        assert_eq!(mv.process(&ctx(0.1), &mut mover), Status::Running);
        mover.reading(false, 0.02);
        assert_eq!(mv.process(&ctx(0.1), &mut mover), Status::Success);
        assert!(mv.has_arrived());
        assert!(mover.destinations.iter().all(|&d| d == A));
    }

    #[test]
    fn no_orders_after_arrival_until_reset() {
        let mut mv = MoveToTarget::new(A);
        let mut mover = MockMover::default();
        mover.reading(true, 1.0);
        mv.process(&ctx(0.1), &mut mover);
        mover.reading(false, 0.0);
        assert_eq!(mv.process(&ctx(0.1), &mut mover), Status::Success);

        let issued = mover.destinations.len();
        assert_eq!(mv.process(&ctx(0.1), &mut mover), Status::Success);
        assert_eq!(mover.destinations.len(), issued);

        Strategy::<MockMover>::reset(&mut mv);
        assert!(!mv.has_arrived());
        assert_eq!(mv.process(&ctx(0.1), &mut mover), Status::Running, "latch cleared");
    }

    struct Chase {
        mover:  MockMover,
        target: Option<Position>,
    }

    impl Mover for Chase {
        fn set_destination(&mut self, target: Position) {
            self.mover.set_destination(target)
        }
        fn remaining_distance(&self) -> f32 {
            self.mover.remaining_distance()
        }
        fn path_pending(&self) -> bool {
            self.mover.path_pending()
        }
        fn reset_path(&mut self) {
            self.mover.reset_path()
        }
    }

    #[test]
    fn tracked_target_follows_world() {
        let mut mv = MoveToTarget::new(Tracked(|w: &Chase| w.target));
        let mut world = Chase { mover: MockMover::default(), target: Some(A) };

        world.mover.reading(true, 10.0);
        assert_eq!(mv.process(&ctx(0.1), &mut world), Status::Running);
        world.target = Some(B);
        world.mover.reading(false, 8.0);
        assert_eq!(mv.process(&ctx(0.1), &mut world), Status::Running);
        assert_eq!(world.mover.destinations, vec![A, B]);
    }

    #[test]
    fn vanished_target_fails_and_stops() {
        let mut mv = MoveToTarget::new(Tracked(|w: &Chase| w.target));
        let mut world = Chase { mover: MockMover::default(), target: Some(A) };
        world.mover.reading(true, 10.0);
        mv.process(&ctx(0.1), &mut world);

        world.target = None;
        assert_eq!(mv.process(&ctx(0.1), &mut world), Status::Failure);
        assert_eq!(world.mover.resets, 1);
        assert!(!mv.approach().is_latched());
    }
}

// ── Patrol ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod patrol_tests {
    use super::*;
    use crate::Patrol;

    #[test]
    fn visits_waypoints_in_order() {
        let mut patrol = Patrol::new(vec![A, B]);
        let mut mover = MockMover::default();

        mover.reading(true, 10.0);
        assert_eq!(patrol.process(&ctx(0.1), &mut mover), Status::Running);
        assert_eq!(mover.last_destination(), Some(A));

        mover.reading(false, 0.05);
        assert_eq!(patrol.process(&ctx(0.1), &mut mover), Status::Running);
        assert_eq!(patrol.cursor(), 1);

        mover.reading(true, 10.0);
        assert_eq!(patrol.process(&ctx(0.1), &mut mover), Status::Running);
        assert_eq!(mover.last_destination(), Some(B));

        mover.reading(false, 0.05);
        assert_eq!(patrol.process(&ctx(0.1), &mut mover), Status::Success);
        assert!(patrol.is_complete());
    }

    #[test]
    fn stays_successful_until_reset() {
        let mut patrol = Patrol::new(vec![A]);
        let mut mover = MockMover::default();
        mover.reading(true, 1.0);
        patrol.process(&ctx(0.1), &mut mover);
        mover.reading(false, 0.0);
        assert_eq!(patrol.process(&ctx(0.1), &mut mover), Status::Success);

        let issued = mover.destinations.len();
        assert_eq!(patrol.process(&ctx(0.1), &mut mover), Status::Success);
        assert_eq!(mover.destinations.len(), issued);
    }

    #[test]
    fn reset_rewinds_and_cancels_order() {
        let mut patrol = Patrol::new(vec![A, B]);
        let mut mover = MockMover::default();
        mover.reading(true, 10.0);
        patrol.process(&ctx(0.1), &mut mover);
        mover.reading(false, 0.0);
        patrol.process(&ctx(0.1), &mut mover);
        assert_eq!(patrol.cursor(), 1);
        let resets = mover.resets;

        Strategy::<MockMover>::reset(&mut patrol);
        assert_eq!(patrol.cursor(), 0);

        mover.reading(true, 10.0);
        assert_eq!(patrol.process(&ctx(0.1), &mut mover), Status::Running);
        assert_eq!(mover.resets, resets + 1);
        assert_eq!(mover.last_destination(), Some(A));
    }

    #[test]
    fn empty_patrol_succeeds_without_orders() {
        let mut patrol = Patrol::new(vec![]);
        let mut mover = MockMover::default();
        assert_eq!(patrol.process(&ctx(0.1), &mut mover), Status::Success);
        assert!(mover.destinations.is_empty());
    }
}

// ── Against the kinematic mover ───────────────────────────────────────────────

#[cfg(test)]
mod kinematic_tests {
    use super::*;
    use crate::{MoveToTarget, Patrol};

    fn ship() -> KinematicMover {
        KinematicMover::new(Position::ORIGIN, 5.0, AgentRng::new(7, AgentId(1)))
            .with_planning_latency(2)
    }

    fn drive<S: Strategy<KinematicMover>>(
        strategy: &mut S,
        mover: &mut KinematicMover,
        max_ticks: u32,
    ) -> Option<u32> {
        let ctx = ctx(0.1);
        for tick in 1..=max_ticks {
            if strategy.process(&ctx, mover) == Status::Success {
                return Some(tick);
            }
            mover.step(ctx.dt_secs);
        }
        None
    }

    #[test]
    fn move_to_target_arrives() {
        let mut mover = ship();
        let mut mv = MoveToTarget::new(A);
        let ticks = drive(&mut mv, &mut mover, 100).expect("should arrive");
        // 10 units at 0.5 units per tick plus planning.
        assert!(ticks >= 20, "arrived too early: {ticks}");
        assert!(mover.position().distance(A) < 0.1);
        assert_eq!(mover.destination(), None, "stopped on arrival");
    }

    #[test]
    fn patrol_completes_route() {
        let mut mover = ship();
        let mut patrol = Patrol::new(vec![A, B, A]);
        assert!(drive(&mut patrol, &mut mover, 200).is_some());
        assert!(mover.position().distance(A) < 0.1);
    }
}
