//! `swarm-sim` — the robot entity and world loop for the swarm sandbox.
//!
//! # Per-frame update
//!
//! ```text
//! World::step(dt_ms):
//!   ① Snapshot — capture an immutable RobotView of every robot.
//!   ② Tick     — for each robot, in creation order:
//!                  target re-evaluation (arrive / re-aim),
//!                  local-frame collision scan of all peers,
//!                  repulsion fold over near peers,
//!                  position integration.
//! ```
//!
//! Every robot ticks against the *same* snapshot, so updates within one
//! frame are logically simultaneous: a robot never observes a peer's
//! already-updated position.  Commands ([`Command`]) mutate the robot set
//! and targets between frames.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use swarm_core::Vec2;
//! use swarm_sim::{Command, NoopObserver, WorldBuilder, WorldConfig};
//!
//! let mut world = WorldBuilder::new(WorldConfig::default()).build()?;
//! world.apply(Command::Spawn(Vec2::new(400.0, 300.0)), &mut NoopObserver)?;
//! world.apply(Command::ScatterTargets, &mut NoopObserver)?;
//! world.step(16.0, &mut NoopObserver);
//! ```

pub mod command;
pub mod error;
pub mod frame;
pub mod observer;
pub mod robot;
pub mod world;


pub use command::Command;
pub use error::{WorldError, WorldResult};
pub use frame::{CollisionZone, LocalFrame, LocalPeer};
pub use observer::{NoopObserver, WorldObserver};
pub use robot::{Robot, RobotView};
pub use world::{World, WorldBuilder, WorldConfig};
