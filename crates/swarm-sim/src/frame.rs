//! Local-frame coordinate transform and the forward collision zone.
//!
//! Each robot carries a fixed rectangular detection box "ahead" of itself.
//! Rather than rotating the box into world space every frame, peers are
//! transformed *into the robot's local frame*: translate by the robot's
//! position, then rotate so the robot's heading aligns with the local +y
//! axis.  The box is then axis-aligned in local space regardless of the
//! actual heading, and containment is two range checks.

use swarm_core::{Rgb, RobotId, Vec2};

// ── LocalFrame ────────────────────────────────────────────────────────────────

/// A coordinate frame centered on a robot and rotated to its heading.
///
/// In local coordinates the robot sits at the origin and faces +y.
#[derive(Copy, Clone, Debug)]
pub struct LocalFrame {
    pub origin: Vec2,
    pub heading_deg: f32,
}

impl LocalFrame {
    #[inline]
    pub fn new(origin: Vec2, heading_deg: f32) -> Self {
        Self { origin, heading_deg }
    }

    /// Express a world-space point in this frame.
    ///
    /// Rotation is by −(heading − 90°): a robot heading along +x (0°) sees
    /// a point directly ahead of it at local (0, d).
    pub fn to_local(&self, p: Vec2) -> Vec2 {
        (p - self.origin).rotated_deg(-(self.heading_deg - 90.0))
    }

    /// Exact inverse of [`to_local`](Self::to_local) up to float rounding.
    pub fn to_world(&self, local: Vec2) -> Vec2 {
        local.rotated_deg(self.heading_deg - 90.0) + self.origin
    }
}

// ── LocalPeer ─────────────────────────────────────────────────────────────────

/// A peer robot expressed in another robot's local frame.
///
/// A transformed *copy*: carries the peer's identity and color with only
/// the position replaced.  The original peer is never mutated.
#[derive(Copy, Clone, Debug)]
pub struct LocalPeer {
    pub id: RobotId,
    /// Position in the observing robot's local frame.
    pub position: Vec2,
    pub color: Rgb,
}

// ── CollisionZone ─────────────────────────────────────────────────────────────

/// The fixed forward detection box, in local-frame coordinates.
///
/// Bounds are strict: x ∈ (−half_width, half_width), y ∈ (0, depth).
/// A peer exactly on an edge is outside.
#[derive(Copy, Clone, Debug)]
pub struct CollisionZone {
    pub half_width: f32,
    pub depth: f32,
}

impl CollisionZone {
    /// The zone every robot carries: 40 units wide, 120 units deep.
    pub const DEFAULT: CollisionZone = CollisionZone { half_width: 20.0, depth: 120.0 };

    /// Strict containment check for a local-frame point.
    #[inline]
    pub fn contains(&self, local: Vec2) -> bool {
        local.x > -self.half_width
            && local.x < self.half_width
            && local.y > 0.0
            && local.y < self.depth
    }

    /// Corner points in local space, counter-clockwise from the robot's
    /// near-left.  Project through [`LocalFrame::to_world`] to draw the
    /// outline in world space.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(-self.half_width, 0.0),
            Vec2::new(self.half_width, 0.0),
            Vec2::new(self.half_width, self.depth),
            Vec2::new(-self.half_width, self.depth),
        ]
    }
}

impl Default for CollisionZone {
    fn default() -> Self {
        Self::DEFAULT
    }
}
