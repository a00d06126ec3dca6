//! World commands — the actions the input layer can request.

use swarm_core::{RobotId, Vec2};

/// A state mutation requested between frames.
///
/// Commands are produced by the host input layer (mouse/keyboard) and
/// consumed by [`World::apply`][crate::World::apply].  Keeping the input
/// surface to a small enum means the frontend never reaches into world
/// state directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Create a new robot at `position` (primary mouse button).
    Spawn(Vec2),

    /// Give every robot an independent uniform random target inside the
    /// world bounds (secondary mouse button).
    ScatterTargets,

    /// Clear every robot's target.  Headings and speeds keep their last
    /// values; robots coast on repulsion alone.
    ClearTargets,

    /// Set or clear one robot's target.
    SetTarget {
        id: RobotId,
        target: Option<Vec2>,
    },
}
