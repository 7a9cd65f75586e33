//! CSV route loader.
//!
//! # CSV format
//!
//! One row per waypoint.  Rows of a route may appear in any order; `seq`
//! decides the visiting order and must be unique within a route.
//!
//! ```csv
//! route_id,seq,x,y,z
//! 0,0,0.0,0.0,0.0
//! 0,1,40.0,0.0,10.0
//! 1,0,-20.0,0.0,5.0
//! ```
//!
//! Route data is plain waypoint lists.  Tree topology is always wired in
//! code, never loaded.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use bt_core::{Position, RouteId};

use crate::{MobilityError, Route};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RouteRecord {
    route_id: u32,
    seq:      u32,
    x:        f32,
    y:        f32,
    z:        f32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load all routes from a CSV file, sorted by `RouteId`.
pub fn load_routes_csv(path: &Path) -> Result<Vec<Route>, MobilityError> {
    let file = std::fs::File::open(path)?;
    load_routes_reader(file)
}

/// Like [`load_routes_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for route tables
/// embedded in a binary.
pub fn load_routes_reader<R: Read>(reader: R) -> Result<Vec<Route>, MobilityError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_route: BTreeMap<u32, BTreeMap<u32, Position>> = BTreeMap::new();

    for result in csv_reader.deserialize::<RouteRecord>() {
        let row = result.map_err(|e| MobilityError::Parse(e.to_string()))?;
        let waypoints = by_route.entry(row.route_id).or_default();
        if waypoints.insert(row.seq, Position::new(row.x, row.y, row.z)).is_some() {
            return Err(MobilityError::DuplicateWaypoint {
                route: RouteId(row.route_id),
                seq:   row.seq,
            });
        }
    }

    let routes: Vec<Route> = by_route
        .into_iter()
        .map(|(id, waypoints)| Route::new(RouteId(id), waypoints.into_values().collect()))
        .collect();

    debug!(routes = routes.len(), "loaded waypoint routes");
    Ok(routes)
}
