//! Per-agent tree wiring.

use bt_core::Position;
use bt_mobility::Route;
use bt_strategy::{Action, Condition, MoveToTarget, Patrol, TimedAction, Tracked};
use bt_tree::{BehaviourTree, Node, TreeBuilder, TreeResult};
use tracing::{debug, info};

use crate::ship::Ship;

pub const STATION:  Position = Position { x: 0.0, y: 0.0, z: 0.0 };
pub const ASTEROID: Position = Position { x: 60.0, y: 0.0, z: 35.0 };

const FLEE_RADIUS:   f32 = 25.0;
const SAFE_DISTANCE: f32 = 40.0;
const DRILL_SECS:    f32 = 1.5;
const DRILL_YIELD:   u32 = 25;
const UNLOAD_SECS:   f32 = 1.0;

/// A cargo ship flies its route once.
pub fn cargo_tree(route: &Route) -> BehaviourTree<Ship> {
    BehaviourTree::with_children("Cargo Ship", vec![
        Node::leaf("Patrol", Patrol::from_route(route)),
    ])
}

/// A miner fills its hold at the asteroid and hauls it to the station,
/// breaking off to flee whenever a pirate comes close.
pub fn miner_tree() -> TreeResult<BehaviourTree<Ship>> {
    TreeBuilder::new("Miner")
        .priority_selector("decide")
            .sequence("flee").priority(100)
                .leaf("pirate near?", Condition::new(|s: &Ship| s.threatened(FLEE_RADIUS)))
                .leaf("run", MoveToTarget::new(Tracked(|s: &Ship| s.escape_point(SAFE_DISTANCE))))
            .end()
            .sequence("mine").priority(50)
                .leaf("hold has room?", Condition::new(|s: &Ship| !s.hold_full()))
                .until_success("dig")
                    .leaf("fly to asteroid", MoveToTarget::new(ASTEROID))
                    .leaf("drill", TimedAction::new(DRILL_SECS, |s: &mut Ship| {
                        s.cargo = (s.cargo + DRILL_YIELD).min(s.capacity);
                    }))
                    .leaf("hold full?", Condition::new(Ship::hold_full))
                .end()
            .end()
            .sequence("unload").priority(10)
                .leaf("fly to station", MoveToTarget::new(STATION))
                .leaf("dock", Action::new(|s: &mut Ship| {
                    debug!(cargo = s.cargo, "miner docked");
                }))
                .leaf("unload", TimedAction::new(UNLOAD_SECS, |s: &mut Ship| {
                    s.cargo = 0;
                    s.unloads += 1;
                    info!(unloads = s.unloads, "miner delivered a load");
                }))
            .end()
        .end()
        .build()
}
