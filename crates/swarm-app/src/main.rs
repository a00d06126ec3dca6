//! swarm — interactive robot swarm sandbox.
//!
//! Controls:
//!
//! | Input        | Effect                                         |
//! |--------------|------------------------------------------------|
//! | Left click   | Spawn a robot at the pointer                   |
//! | Right click  | Scatter a random target to every robot         |
//! | `X`          | Clear all targets                              |
//! | `C`          | Toggle the collision-zone overlay              |
//! | `D`          | Cycle the debug-selected robot                 |
//! | `Q` / `Esc`  | Quit                                           |
//!
//! The window title shows a smoothed frames-per-second readout.

mod render;

use nannou::prelude::*;
use swarm_core::RobotId;
use swarm_sim::{Command, NoopObserver, World, WorldBuilder, WorldConfig};

const TITLE: &str = "swarm";

struct Model {
    world: World,
    /// Draw collision zones and the local-frame inset.
    show_zones: bool,
    /// Which robot's local frame the inset visualizes.  `None` = no inset.
    debug_selection: Option<RobotId>,
    /// Exponentially smoothed frames per second, for the title bar.
    fps: f32,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Host window setup is the one fallible startup step: fail loudly and
    // exit non-zero, nothing more elaborate.
    let window = app
        .new_window()
        .size(render::WIN_W as u32, render::WIN_H as u32)
        .title(TITLE)
        .resizable(false)
        .mouse_pressed(mouse_pressed)
        .key_pressed(key_pressed)
        .view(view)
        .build();
    if let Err(e) = window {
        eprintln!("fatal: window initialization failed: {e}");
        std::process::exit(1);
    }

    let world = match WorldBuilder::new(WorldConfig::default()).build() {
        Ok(w) => w,
        Err(e) => {
            eprintln!("fatal: {e}");
            std::process::exit(1);
        }
    };

    Model { world, show_zones: false, debug_selection: None, fps: 0.0 }
}

fn update(app: &App, model: &mut Model, update: Update) {
    let dt_secs = update.since_last.as_secs_f32();
    model.world.step(dt_secs * 1000.0, &mut NoopObserver);

    if dt_secs > 0.0 {
        let instant = 1.0 / dt_secs;
        model.fps = if model.fps == 0.0 {
            instant
        } else {
            model.fps * 0.95 + instant * 0.05
        };
    }
    app.main_window()
        .set_title(&format!("{TITLE} - {:02.0} fps", model.fps));
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    let cmd = match button {
        MouseButton::Left => {
            Command::Spawn(render::to_world(pt2(app.mouse.x, app.mouse.y)))
        }
        MouseButton::Right => Command::ScatterTargets,
        _ => return,
    };
    // Spawn and scatter are infallible; keep the message for future commands.
    if let Err(e) = model.world.apply(cmd, &mut NoopObserver) {
        eprintln!("command failed: {e}");
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Q | Key::Escape => app.quit(),
        Key::X => {
            let _ = model.world.apply(Command::ClearTargets, &mut NoopObserver);
        }
        Key::C => model.show_zones = !model.show_zones,
        Key::D => cycle_selection(model),
        _ => {}
    }
}

/// Cycle the debug selection: none → first robot → … → last robot → none.
fn cycle_selection(model: &mut Model) {
    let count = model.world.robot_count() as u32;
    model.debug_selection = match model.debug_selection {
        None if count > 0 => Some(RobotId(0)),
        Some(RobotId(i)) if i + 1 < count => Some(RobotId(i + 1)),
        _ => None,
    };
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(WHITE);

    render::draw_world(&draw, &model.world, model.show_zones, model.debug_selection);

    draw.to_frame(app, &frame).unwrap();
}
