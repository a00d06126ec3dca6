//! The `World` struct, its configuration, and the frame-step loop.

use swarm_core::{RobotId, SimRng, Vec2};

use crate::robot::{Robot, RobotView};
use crate::{Command, WorldError, WorldObserver, WorldResult};

// ── WorldConfig ───────────────────────────────────────────────────────────────

/// Top-level world configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig {
    /// Extent of the target-scatter area.  Random targets land in
    /// `[0, bounds.x) × [0, bounds.y)`.  Robots themselves are unconfined.
    pub bounds: Vec2,

    /// Master RNG seed.  The same seed and command sequence always produce
    /// identical scatter targets.
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { bounds: Vec2::new(800.0, 600.0), seed: 42 }
    }
}

// ── WorldBuilder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`World`].
///
/// Validates the configuration: scatter bounds must be finite and strictly
/// positive, otherwise `gen_range` would have an empty or degenerate range.
pub struct WorldBuilder {
    config: WorldConfig,
}

impl WorldBuilder {
    pub fn new(config: WorldConfig) -> Self {
        Self { config }
    }

    /// Validate the configuration and return a ready-to-run [`World`].
    pub fn build(self) -> WorldResult<World> {
        let b = self.config.bounds;
        if !(b.x.is_finite() && b.y.is_finite()) || b.x <= 0.0 || b.y <= 0.0 {
            return Err(WorldError::Config(format!(
                "scatter bounds must be finite and positive, got {b}"
            )));
        }

        let rng = SimRng::new(self.config.seed);
        Ok(World {
            config: self.config,
            robots: Vec::new(),
            rng,
            step: 0,
        })
    }
}

// ── World ─────────────────────────────────────────────────────────────────────

/// The robot collection and frame-step driver.
///
/// Robots are stored in creation order; `RobotId` is the creation index
/// (there is no despawn, so IDs double as `Vec` indices).  Each frame the
/// host calls [`apply`](World::apply) for any queued input commands, then
/// [`step`](World::step) exactly once with the elapsed time.
pub struct World {
    pub config: WorldConfig,

    /// All robots, creation order.  Iteration order is also render order.
    robots: Vec<Robot>,

    /// Deterministic RNG for target scattering.
    rng: SimRng,

    /// Frames stepped so far.
    step: u64,
}

impl World {
    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    pub fn robot(&self, id: RobotId) -> WorldResult<&Robot> {
        self.robots
            .get(id.index())
            .ok_or(WorldError::RobotNotFound(id))
    }

    #[inline]
    pub fn robot_count(&self) -> usize {
        self.robots.len()
    }

    #[inline]
    pub fn step_count(&self) -> u64 {
        self.step
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Apply one input command between frames.
    pub fn apply<O: WorldObserver>(&mut self, cmd: Command, observer: &mut O) -> WorldResult<()> {
        match cmd {
            Command::Spawn(position) => {
                self.spawn(position, observer);
            }
            Command::ScatterTargets => self.scatter_targets(),
            Command::ClearTargets => {
                for robot in &mut self.robots {
                    robot.set_target(None);
                }
            }
            Command::SetTarget { id, target } => {
                let robot = self
                    .robots
                    .get_mut(id.index())
                    .ok_or(WorldError::RobotNotFound(id))?;
                robot.set_target(target);
            }
        }
        Ok(())
    }

    /// Create a robot at `position` and return its ID.
    pub fn spawn<O: WorldObserver>(&mut self, position: Vec2, observer: &mut O) -> RobotId {
        let id = RobotId(self.robots.len() as u32);
        self.robots.push(Robot::new(id, position));
        observer.on_spawn(id, position);
        id
    }

    /// Assign every robot an independent uniform random target inside the
    /// configured bounds.
    pub fn scatter_targets(&mut self) {
        let bounds = self.config.bounds;
        for robot in &mut self.robots {
            let target = Vec2::new(
                self.rng.gen_range(0.0..bounds.x),
                self.rng.gen_range(0.0..bounds.y),
            );
            robot.set_target(Some(target));
        }
    }

    // ── Frame step ────────────────────────────────────────────────────────

    /// Capture the pre-tick state of every robot.
    pub fn snapshot(&self) -> Vec<RobotView> {
        self.robots.iter().map(Robot::view).collect()
    }

    /// Advance every robot by `dt_ms` milliseconds.
    ///
    /// Snapshot-then-apply: all robots tick against the same pre-tick
    /// snapshot, so updates within one frame are logically simultaneous —
    /// no robot observes a peer's post-tick position.
    pub fn step<O: WorldObserver>(&mut self, dt_ms: f32, observer: &mut O) {
        observer.on_step_start(self.step);

        let views = self.snapshot();
        for robot in &mut self.robots {
            robot.tick(dt_ms, &views);
        }

        self.step += 1;
        observer.on_step_end(self.step, self.robots.len());
    }
}
