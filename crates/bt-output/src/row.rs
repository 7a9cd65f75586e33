//! Plain data row types written by output backends.

use bt_core::{Position, Status};

/// One agent's root status at a snapshot tick.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentStatusRow {
    pub agent_id: u32,
    pub name:     String,
    pub tick:     u64,
    /// `None` if the agent's tree has not been processed since its last
    /// reset.
    pub status:   Option<Status>,
    /// `None` if the agent's world does not report a position.
    pub position: Option<Position>,
}

/// Status counts over all agents for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    pub elapsed_secs: f64,
    pub success:      u64,
    pub running:      u64,
    pub failure:      u64,
}
