//! Fluent builder for constructing a [`Sim`].

use bt_core::{AgentId, SimConfig};
use bt_tree::BehaviourTree;

use crate::{Agent, AgentWorld, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<W>`].
///
/// Agents get consecutive [`AgentId`]s in the order they are added.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .agent("cargo-0", cargo_tree(&route), ship_world(0))
///     .agent("cargo-1", cargo_tree(&route), ship_world(1))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<W: AgentWorld> {
    config: SimConfig,
    agents: Vec<(String, BehaviourTree<W>, W)>,
}

impl<W: AgentWorld> SimBuilder<W> {
    pub fn new(config: SimConfig) -> Self {
        Self { config, agents: Vec::new() }
    }

    /// Add an agent with its tree and initial world state.
    pub fn agent(mut self, name: impl Into<String>, tree: BehaviourTree<W>, world: W) -> Self {
        self.agents.push((name.into(), tree, world));
        self
    }

    /// Validate the configuration and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<W>> {
        self.config.validate()?;

        let agents = self
            .agents
            .into_iter()
            .enumerate()
            .map(|(i, (name, tree, world))| {
                let id = AgentId::try_from(i).map_err(|_| SimError::TooManyAgents)?;
                Ok(Agent::new(id, name, tree, world))
            })
            .collect::<SimResult<Vec<_>>>()?;

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            None => None,
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SimError::ThreadPool(e.to_string()))?,
            ),
        };

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            agents,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
