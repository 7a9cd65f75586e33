//! Waypoint routes.

use bt_core::{Position, RouteId};
use serde::{Deserialize, Serialize};

/// An ordered list of waypoints, visited first to last.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id:        RouteId,
    pub waypoints: Vec<Position>,
}

impl Route {
    pub fn new(id: RouteId, waypoints: Vec<Position>) -> Self {
        Self { id, waypoints }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Total straight-line length from the first to the last waypoint.
    pub fn length(&self) -> f32 {
        self.waypoints
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }
}
