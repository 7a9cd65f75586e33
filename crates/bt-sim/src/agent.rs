//! Agents: one behaviour tree plus the world state it acts on.

use bt_core::{AgentId, Position, Status, TickContext};
use bt_tree::BehaviourTree;

/// Per-agent world state driven by the simulation.
///
/// Strategies read and write it during the decide phase; the driver calls
/// [`step`][Self::step] once per tick afterwards.
pub trait AgentWorld: Send + 'static {
    /// Advance the world by one tick.  Default: nothing happens.
    fn step(&mut self, _ctx: &TickContext) {}

    /// Where the agent is, for snapshots.  Default: not reported.
    fn position(&self) -> Option<Position> {
        None
    }
}

impl AgentWorld for () {}

pub struct Agent<W> {
    pub id:          AgentId,
    pub name:        String,
    pub tree:        BehaviourTree<W>,
    pub world:       W,
    /// Root status from the most recent tick; `None` before the first tick
    /// and after a reset.
    pub last_status: Option<Status>,
}

impl<W: AgentWorld> Agent<W> {
    pub fn new(id: AgentId, name: impl Into<String>, tree: BehaviourTree<W>, world: W) -> Self {
        Self { id, name: name.into(), tree, world, last_status: None }
    }

    /// Decide, then step.
    pub(crate) fn tick(&mut self, ctx: &TickContext) -> Status {
        let status = self.tree.process(ctx, &mut self.world);
        self.world.step(ctx);
        self.last_status = Some(status);
        status
    }

    pub fn snapshot(&self) -> AgentSnapshot<'_> {
        AgentSnapshot {
            agent:    self.id,
            name:     &self.name,
            status:   self.last_status,
            position: self.world.position(),
        }
    }
}

/// Read-only view of one agent handed to observers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentSnapshot<'a> {
    pub agent:    AgentId,
    pub name:     &'a str,
    pub status:   Option<Status>,
    pub position: Option<Position>,
}
