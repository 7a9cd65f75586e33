use bt_core::RouteId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("route parse error: {0}")]
    Parse(String),

    #[error("{route} has two waypoints with seq {seq}")]
    DuplicateWaypoint {
        route: RouteId,
        seq:   u32,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
