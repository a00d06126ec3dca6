//! The 2D vector type underlying all positions, headings, and offsets.
//!
//! `Vec2` uses `f32` — the sandbox world is a few hundred units across, so
//! single precision leaves ample headroom while keeping the per-robot state
//! small.  All operations are total: normalizing the zero vector yields the
//! zero vector (an idle robot has no heading, and that must not be a fault),
//! and `angle_deg` of the zero vector is defined as 0.

/// A 2D vector / point stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Unit vector in the same direction.
    ///
    /// Returns `Vec2::ZERO` for the zero vector — this case is reachable
    /// whenever a robot has no heading, so it is a defined result rather
    /// than a fault.
    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        if len > 0.0 { Vec2::new(self.x / len, self.y / len) } else { Vec2::ZERO }
    }

    /// Angle of the vector in degrees, measured from the +x axis.
    ///
    /// `atan2`-based, so the result is in (−180, 180].  The zero vector
    /// maps to 0.
    #[inline]
    pub fn angle_deg(self) -> f32 {
        self.y.atan2(self.x).to_degrees()
    }

    /// Counter-clockwise rotation by `deg` degrees.
    ///
    /// The exact inverse of `rotated_deg(-deg)` up to float rounding; the
    /// local-frame transform relies on this round trip.
    pub fn rotated_deg(self, deg: f32) -> Vec2 {
        let (sin, cos) = deg.to_radians().sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Elementwise average of two vectors.
    ///
    /// This is the combining step of the repulsion fold in the robot update
    /// rule.  Folding a list two-at-a-time with `mean` is *not* a true
    /// average — later elements weigh more — and that bias is part of the
    /// observed steering behavior, so it stays.
    #[inline]
    pub fn mean(a: Vec2, b: Vec2) -> Vec2 {
        Vec2::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5)
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
