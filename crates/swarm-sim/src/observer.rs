//! World observer trait for progress reporting and instrumentation.

use swarm_core::{RobotId, Vec2};

/// Callbacks invoked by [`World::step`][crate::World::step] at frame
/// boundaries and by [`World::spawn`][crate::World::spawn] on robot
/// creation.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — step printer
///
/// ```rust,ignore
/// struct StepPrinter;
///
/// impl WorldObserver for StepPrinter {
///     fn on_step_end(&mut self, step: u64, robots: usize) {
///         if step % 60 == 0 {
///             println!("step {step}: {robots} robots");
///         }
///     }
/// }
/// ```
pub trait WorldObserver {
    /// Called at the start of each frame step, before any robot ticks.
    fn on_step_start(&mut self, _step: u64) {}

    /// Called after all robots have ticked this frame.
    fn on_step_end(&mut self, _step: u64, _robot_count: usize) {}

    /// Called when a robot is created.
    fn on_spawn(&mut self, _id: RobotId, _position: Vec2) {}
}

/// A [`WorldObserver`] that does nothing.  Use when you need to call `step`
/// but don't want callbacks.
pub struct NoopObserver;

impl WorldObserver for NoopObserver {}
