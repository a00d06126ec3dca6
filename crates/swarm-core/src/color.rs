//! Per-robot colors.
//!
//! Colors are a deterministic function of the robot's ID (its creation
//! index), not of any runtime identity value: the same spawn order always
//! yields the same palette, which keeps visual runs comparable and tests
//! exact.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::RobotId;
use crate::rng::MIXING_CONSTANT;

/// An 8-bit-per-channel RGB color.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Deterministic color for a robot ID.
    ///
    /// Seeds a throwaway `SmallRng` from the ID via golden-ratio mixing and
    /// draws three channels.  Channels are drawn from 32..=224 so robots
    /// stay visible against both the white canvas and the black body
    /// outline.
    pub fn from_id(id: RobotId) -> Rgb {
        let seed = (id.0 as u64).wrapping_mul(MIXING_CONSTANT);
        let mut rng = SmallRng::seed_from_u64(seed);
        Rgb {
            r: rng.gen_range(32..=224),
            g: rng.gen_range(32..=224),
            b: rng.gen_range(32..=224),
        }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
