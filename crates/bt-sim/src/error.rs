use bt_core::{AgentId, BtError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] BtError),

    #[error("failed to build worker thread pool: {0}")]
    ThreadPool(String),

    #[error("no agent with id {0}")]
    UnknownAgent(AgentId),

    #[error("agent count exceeds the AgentId range")]
    TooManyAgents,
}

pub type SimResult<T> = Result<T, SimError>;
