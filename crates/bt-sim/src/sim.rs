//! The `Sim` struct and its tick loop.

use bt_core::{AgentId, SimClock, SimConfig, Status, Tick};
use tracing::{debug, info};

use crate::{Agent, AgentSnapshot, AgentWorld, SimError, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim<W>` owns every agent and drives the tick loop:
///
/// 1. **Decide**: process each agent's [`BehaviourTree`] once against its
///    own world (optionally parallel with the `parallel` feature).
/// 2. **Step**: advance each agent's world with [`AgentWorld::step`].
/// 3. **Report**: root statuses, in ascending `AgentId` order, go to the
///    observer.
///
/// Agents are independent, so the order in which they are processed has no
/// effect on the results.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
///
/// [`BehaviourTree`]: bt_tree::BehaviourTree
pub struct Sim<W: AgentWorld> {
    /// Global configuration (total ticks, seed, tick duration, …).
    pub config: SimConfig,

    /// Simulation clock - tracks the current tick and maps to simulated time.
    pub clock: SimClock,

    /// All agents, indexed by `AgentId`.
    pub(crate) agents: Vec<Agent<W>>,

    /// Dedicated pool when `config.num_threads` is set.
    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl<W: AgentWorld> Sim<W> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            agents = self.agents.len(),
            from = %self.clock.current_tick,
            to = %self.config.end_tick(),
            "simulation started"
        );
        while self.clock.current_tick < self.config.end_tick() {
            self.step_once(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
        self.log_summary();
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step_once(observer);
        }
        Ok(())
    }

    /// Reset one agent's tree, discarding all in-progress behaviour.  The
    /// world is left as it is.
    pub fn reset_agent(&mut self, id: AgentId) -> SimResult<()> {
        let agent = self
            .agents
            .get_mut(id.index())
            .ok_or(SimError::UnknownAgent(id))?;
        agent.tree.reset();
        agent.last_status = None;
        debug!(agent = %id, name = %agent.name, "agent reset");
        Ok(())
    }

    /// The tick the next call to `run_ticks` will process.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    #[inline]
    pub fn agents(&self) -> &[Agent<W>] {
        &self.agents
    }

    #[inline]
    pub fn agent(&self, id: AgentId) -> Option<&Agent<W>> {
        self.agents.get(id.index())
    }

    #[inline]
    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent<W>> {
        self.agents.get_mut(id.index())
    }

    /// Snapshot every agent, in `AgentId` order.
    pub fn snapshots(&self) -> Vec<AgentSnapshot<'_>> {
        self.agents.iter().map(Agent::snapshot).collect()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step_once<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let statuses = self.process_tick();
        observer.on_tick_end(now, &statuses);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.snapshots());
        }
        self.clock.advance();
    }

    /// Decide and step every agent for the current tick.  Returns root
    /// statuses indexed by `AgentId`.
    fn process_tick(&mut self) -> Vec<Status> {
        let ctx = self.clock.context();

        #[cfg(not(feature = "parallel"))]
        {
            self.agents.iter_mut().map(|agent| agent.tick(&ctx)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // Indexed collect keeps AgentId order.
            let agents = &mut self.agents;
            let mut work = move || -> Vec<Status> {
                agents.par_iter_mut().map(|agent| agent.tick(&ctx)).collect()
            };
            match &self.pool {
                Some(pool) => pool.install(work),
                None => work(),
            }
        }
    }

    fn log_summary(&self) {
        let count = |want: Status| {
            self.agents
                .iter()
                .filter(|a| a.last_status == Some(want))
                .count()
        };
        info!(
            tick = %self.clock.current_tick,
            elapsed_secs = self.clock.elapsed_secs(),
            success = count(Status::Success),
            running = count(Status::Running),
            failure = count(Status::Failure),
            "simulation finished"
        );
    }
}
