//! `swarm-core` — foundational value types for the swarm sandbox.
//!
//! This crate is a dependency of every other `swarm-*` crate.  It
//! intentionally has no `swarm-*` dependencies and minimal external ones
//! (only `rand`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                        |
//! |------------|-------------------------------------------------|
//! | [`vec2`]   | `Vec2` — the 2D vector everything is built on   |
//! | [`ids`]    | `RobotId`                                       |
//! | [`color`]  | `Rgb`, deterministic per-robot colors           |
//! | [`rng`]    | `SimRng` (world-level deterministic RNG)        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod color;
pub mod ids;
pub mod rng;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::Rgb;
pub use ids::RobotId;
pub use rng::SimRng;
pub use vec2::Vec2;
