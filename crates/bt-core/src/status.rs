//! Status returned by behaviour-tree nodes and strategies.

use std::fmt;

/// The result of processing a node for one tick.
///
/// A status is terminal per tick, not per task: `Running` means "call me
/// again next tick", it never means the call itself is suspended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The node finished its work (or its condition held).
    Success,

    /// The node has more work to do on a later tick.
    Running,

    /// The node could not do its work (or its condition did not hold).
    ///
    /// Failure is a first-class outcome, not an error.
    Failure,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Lower-case label used in logs and trace files.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Running => "running",
            Status::Failure => "failure",
        }
    }
}

impl From<bool> for Status {
    /// `true` → `Success`, `false` → `Failure`.
    #[inline]
    fn from(ok: bool) -> Self {
        if ok { Status::Success } else { Status::Failure }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
