//! The robot entity and its per-tick steering update.

use swarm_core::{Rgb, RobotId, Vec2};

use crate::frame::{CollisionZone, LocalFrame, LocalPeer};

// ── Steering constants ────────────────────────────────────────────────────────

/// Distance to the target below which a robot counts as arrived.
pub const ARRIVE_DISTANCE: f32 = 10.0;

/// Avoidance radius while moving (or idle with a live target).
pub const AVOID_RADIUS_DEFAULT: f32 = 50.0;

/// Shrunk avoidance radius while parked at the target, so arrived robots
/// can cluster instead of shoving each other off the destination.
pub const AVOID_RADIUS_PARKED: f32 = 20.0;

/// Cruise speed once a target has been assigned.
pub const GO_SPEED: f32 = 1.0;

/// Scale applied to each per-peer repulsion contribution.
pub const REPULSION_GAIN: f32 = 1e-4;

/// Scale applied to the integrated movement per millisecond.
pub const STEP_GAIN: f32 = 0.1;

// ── RobotView ─────────────────────────────────────────────────────────────────

/// Read-only snapshot of one robot, captured before the tick pass.
///
/// Ticking against views instead of live robots is what makes the frame
/// update simultaneous: every robot sees every peer's pre-tick state.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotView {
    pub id: RobotId,
    pub position: Vec2,
    pub avoid_radius: f32,
    pub color: Rgb,
}

// ── Robot ─────────────────────────────────────────────────────────────────────

/// A single simulated robot.
///
/// Robots have identity (`id`), not value semantics: peer exclusion and
/// debug selection compare IDs.  All fields besides `id` and `color` are
/// mutated in place by [`tick`](Robot::tick).
#[derive(Clone, Debug)]
pub struct Robot {
    pub id: RobotId,

    /// Current world position.  Integrated every tick.
    pub position: Vec2,

    /// Unit heading, or zero when the robot has no heading (fresh spawn,
    /// or parked at its target).
    pub direction: Vec2,

    /// 0 until the first target is assigned, then [`GO_SPEED`].
    pub speed: f32,

    /// Destination the robot steers toward.  `None` = drift on repulsion only.
    pub target: Option<Vec2>,

    /// Radius within which peers repel this robot.
    pub avoid_radius: f32,

    /// Folded repulsion direction from the last tick.  Rendering/debug only.
    pub mean_repulsion: Vec2,

    /// True when any peer fell inside the forward collision zone last tick.
    pub collision: bool,

    /// Every peer's position in this robot's local frame, from the last
    /// tick.  Feeds the debug overlay.
    pub local_peers: Vec<LocalPeer>,

    /// Assigned once at creation, deterministic in `id`.
    pub color: Rgb,
}

impl Robot {
    pub fn new(id: RobotId, position: Vec2) -> Self {
        Self {
            id,
            position,
            direction: Vec2::ZERO,
            speed: 0.0,
            target: None,
            avoid_radius: AVOID_RADIUS_DEFAULT,
            mean_repulsion: Vec2::ZERO,
            collision: false,
            local_peers: Vec::new(),
            color: Rgb::from_id(id),
        }
    }

    /// Set or clear the destination.
    ///
    /// Setting a target re-aims the heading at it immediately; clearing
    /// leaves `direction` and `speed` at their last values (the tick loop
    /// only touches them while a target is present).
    pub fn set_target(&mut self, target: Option<Vec2>) {
        self.target = target;
        if let Some(t) = target {
            self.direction = (t - self.position).normalized();
        }
    }

    /// The snapshot row other robots tick against.
    #[inline]
    pub fn view(&self) -> RobotView {
        RobotView {
            id: self.id,
            position: self.position,
            avoid_radius: self.avoid_radius,
            color: self.color,
        }
    }

    /// This robot's local coordinate frame (origin at its position, +y
    /// along its heading).
    #[inline]
    pub fn local_frame(&self) -> LocalFrame {
        LocalFrame::new(self.position, self.direction.angle_deg())
    }

    /// Advance this robot by `dt_ms` milliseconds against a snapshot of all
    /// robots (including itself; peers are excluded by ID).
    ///
    /// Mutates `position`, `direction`, `speed`, `avoid_radius`,
    /// `mean_repulsion`, `collision`, and `local_peers`.  Total over its
    /// domain: no target, no peers, and zero headings are all defined
    /// states, never faults.
    pub fn tick(&mut self, dt_ms: f32, peers: &[RobotView]) {
        // ── Target re-evaluation ──────────────────────────────────────────
        if let Some(target) = self.target {
            self.speed = GO_SPEED;
            if self.position.distance(target) < ARRIVE_DISTANCE {
                // Arrived: park until retargeted.
                self.avoid_radius = AVOID_RADIUS_PARKED;
                self.direction = Vec2::ZERO;
            } else {
                self.avoid_radius = AVOID_RADIUS_DEFAULT;
                self.direction = (target - self.position).normalized();
            }
        }

        // ── Local-frame collision scan ────────────────────────────────────
        let frame = self.local_frame();
        let zone = CollisionZone::DEFAULT;
        self.collision = false;
        self.local_peers.clear();
        for peer in peers.iter().filter(|p| p.id != self.id) {
            let local = LocalPeer {
                id: peer.id,
                position: frame.to_local(peer.position),
                color: peer.color,
            };
            if zone.contains(local.position) {
                self.collision = true;
            }
            self.local_peers.push(local);
        }

        // ── Repulsion fold over near peers ────────────────────────────────
        //
        // Contributions combine by repeated pairwise mean, not a true sum:
        // reduce(mean, [a, b, c]) weights later elements more.  That bias
        // is part of the observed steering behavior and is kept.
        let mut contributions = peers
            .iter()
            .filter(|p| p.id != self.id)
            .filter(|p| {
                self.position.distance(p.position) < self.avoid_radius.min(p.avoid_radius)
            })
            .map(|p| {
                let dist = self.position.distance(p.position);
                (self.position - p.position) * (dist * REPULSION_GAIN)
            });
        self.mean_repulsion = match contributions.next() {
            None => Vec2::ZERO,
            Some(first) => contributions.fold(first, Vec2::mean),
        };

        // ── Integration ───────────────────────────────────────────────────
        let movement = self.mean_repulsion + self.direction * self.speed;
        self.position += movement * (dt_ms * STEP_GAIN);
    }
}
