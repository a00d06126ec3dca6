//! headless — smallest example for the swarm sandbox.
//!
//! Spawns a line of robots, scatters random targets, and steps the world at
//! a fixed 16 ms timestep (≈60 fps) until every robot has parked.  Useful
//! for sanity-checking steering behavior without a window.

use anyhow::Result;

use swarm_core::Vec2;
use swarm_sim::robot::AVOID_RADIUS_PARKED;
use swarm_sim::{Command, World, WorldBuilder, WorldConfig, WorldObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const ROBOT_COUNT: usize = 8;
const SEED: u64 = 42;
const DT_MS: f32 = 16.0; // fixed timestep, ≈60 fps
const MAX_STEPS: u64 = 10_000;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints a progress line once per simulated second.
struct ProgressPrinter;

impl WorldObserver for ProgressPrinter {
    fn on_step_end(&mut self, step: u64, robot_count: usize) {
        if step % 600 == 0 {
            println!("step {step:>5}: {robot_count} robots");
        }
    }
}

/// A robot whose avoidance radius has shrunk to the parked value has
/// arrived; treat targetless robots as parked too.
fn all_parked(world: &World) -> bool {
    world.robots().iter().all(|r| match r.target {
        Some(_) => r.avoid_radius == AVOID_RADIUS_PARKED,
        None => true,
    })
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== headless — swarm sandbox ===");
    println!("Robots: {ROBOT_COUNT}  |  Seed: {SEED}  |  dt: {DT_MS} ms");
    println!();

    let mut world = WorldBuilder::new(WorldConfig {
        bounds: Vec2::new(800.0, 600.0),
        seed: SEED,
    })
    .build()?;

    let mut obs = ProgressPrinter;

    // A horizontal line of robots through the middle of the area.
    for i in 0..ROBOT_COUNT {
        world.apply(
            Command::Spawn(Vec2::new(80.0 + i as f32 * 90.0, 300.0)),
            &mut obs,
        )?;
    }
    world.apply(Command::ScatterTargets, &mut obs)?;

    while world.step_count() < MAX_STEPS && !all_parked(&world) {
        world.step(DT_MS, &mut obs);
    }

    println!();
    println!(
        "Done after {} steps ({:.1} simulated seconds)",
        world.step_count(),
        world.step_count() as f32 * DT_MS / 1000.0
    );
    println!();

    // Final position table.
    println!("{:<12} {:<18} {:<18} {:<10}", "Robot", "Position", "Target", "Distance");
    println!("{}", "-".repeat(60));
    for robot in world.robots() {
        let (target, dist) = match robot.target {
            Some(t) => (t.to_string(), format!("{:.1}", robot.position.distance(t))),
            None => ("-".into(), "-".into()),
        };
        println!(
            "{:<12} {:<18} {:<18} {:<10}",
            robot.id.0,
            robot.position.to_string(),
            target,
            dist
        );
    }

    Ok(())
}
