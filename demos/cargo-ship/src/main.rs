//! cargo-ship - behaviour-tree agents flying a small asteroid field.
//!
//! Two cargo ships fly waypoint routes loaded from an embedded CSV and
//! start over whenever they finish.  A miner shuttles ore between an
//! asteroid and the station and flees a pirate that raids the asteroid
//! part-way through the run.
//!
//! ```text
//! cargo-ship [CONFIG.json] [OUTPUT_DIR]
//! ```
//!
//! `CONFIG.json` is a serialized `SimConfig`; logging follows `RUST_LOG`.

mod ship;
mod trees;

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use bt_core::{AgentId, Position, SimConfig, Status, Tick};
use bt_mobility::load_routes_reader;
use bt_output::{CsvWriter, SimOutputObserver};
use bt_sim::{SimBuilder, SimObserver};

use ship::{PirateRaid, Ship};
use trees::{ASTEROID, STATION, cargo_tree, miner_tree};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:           u64 = 42;
const CARGO_SPEED:    f32 = 6.0;
const MINER_SPEED:    f32 = 8.0;
const MINER_HOLD:     u32 = 100;
const DEFAULT_OUTPUT: &str = "output/cargo-ship";

// ── Route CSV ─────────────────────────────────────────────────────────────────

// Route 0 circles the station; route 1 runs out past the asteroid.
const ROUTES_CSV: &str = "\
route_id,seq,x,y,z\n\
0,0,10.0,0.0,10.0\n\
0,1,-30.0,0.0,10.0\n\
0,2,-30.0,0.0,-30.0\n\
0,3,10.0,0.0,-30.0\n\
1,0,-5.0,0.0,0.0\n\
1,1,45.0,0.0,20.0\n\
1,2,90.0,0.0,60.0\n\
";

fn default_config() -> SimConfig {
    SimConfig {
        tick_duration_secs:    0.1,
        total_ticks:           3_000,
        seed:                  SEED,
        num_threads:           None,
        output_interval_ticks: 10,
    }
}

fn load_config(path: &Path) -> Result<SimConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => load_config(Path::new(&path))?,
        None => default_config(),
    };
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    // 1. Routes.
    let routes = load_routes_reader(Cursor::new(ROUTES_CSV))?;
    info!(routes = routes.len(), "loaded cargo routes");

    // 2. Agents: one cargo ship per route, then the miner.
    let mut builder = SimBuilder::new(config.clone());
    for (i, route) in routes.iter().enumerate() {
        let id = AgentId::try_from(i)?;
        let start = route.waypoints.first().copied().unwrap_or(STATION);
        builder = builder.agent(
            format!("cargo-{}", route.id.0),
            cargo_tree(route),
            Ship::new(start, CARGO_SPEED, config.seed, id),
        );
    }

    let miner_id = AgentId::try_from(routes.len())?;
    let raid = PirateRaid {
        position: Position::new(ASTEROID.x + 5.0, ASTEROID.y, ASTEROID.z - 5.0),
        from:     Tick(config.total_ticks / 3),
        until:    Tick(config.total_ticks / 2),
    };
    let miner = Ship::new(STATION, MINER_SPEED, config.seed, miner_id)
        .with_hold(MINER_HOLD)
        .with_raid(raid);
    let mut sim = builder.agent("miner", miner_tree()?, miner).build()?;

    // 3. Output.
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    let writer = CsvWriter::new(&out_dir)?;
    let mut obs = SimOutputObserver::new(writer, &config);

    // 4. Run tick by tick; cargo ships that finished their route go again.
    info!(agents = sim.agents().len(), ticks = config.total_ticks, "simulation started");
    let t0 = Instant::now();
    let mut laps = vec![0_u32; routes.len()];
    while sim.current_tick() < config.end_tick() {
        sim.run_ticks(1, &mut obs)?;
        for (i, lap) in laps.iter_mut().enumerate() {
            let id = AgentId::try_from(i)?;
            if sim.agent(id).is_some_and(|a| a.last_status == Some(Status::Success)) {
                *lap += 1;
                info!(agent = %id, lap = *lap, "route complete");
                sim.reset_agent(id)?;
            }
        }
    }
    obs.on_sim_end(sim.current_tick());
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  output written to {}", out_dir.display());
    println!();
    println!("{:<10} {:<8} {:<26} {:<6}", "Agent", "Status", "Position", "Laps");
    println!("{}", "-".repeat(52));
    for agent in sim.agents() {
        let status = agent.last_status.map(|s| s.as_str()).unwrap_or("-");
        let laps = match laps.get(agent.id.index()) {
            Some(n) => n.to_string(),
            None => format!("{} loads", agent.world.unloads),
        };
        println!(
            "{:<10} {:<8} {:<26} {:<6}",
            agent.name,
            status,
            agent.world.position().to_string(),
            laps,
        );
    }

    Ok(())
}
