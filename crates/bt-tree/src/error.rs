use thiserror::Error;

/// Malformed-tree errors.  All of these are programmer errors caught while
/// the tree is being assembled, never while it is being processed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("{kind} node {name:?} needs at least one child")]
    EmptyComposite {
        name: String,
        kind: &'static str,
    },

    #[error("leaf {0:?} cannot have children")]
    LeafHasChildren(String),

    #[error("node {0:?} belongs to a tree that has already been processed; its structure is frozen")]
    TreeStarted(String),

    #[error("end() called with no open composite")]
    UnbalancedEnd,

    #[error("composite {0:?} was never closed with end()")]
    UnclosedComposite(String),
}

pub type TreeResult<T> = Result<T, TreeError>;
