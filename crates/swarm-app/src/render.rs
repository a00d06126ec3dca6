//! Drawing — projects world state into nannou's centered coordinate system.
//!
//! The simulation uses screen-style coordinates (origin top-left, y down,
//! 800×600); nannou draws with the origin at the window center and y up.
//! `to_screen`/`to_world` convert between the two.

use nannou::prelude::*;
use swarm_core::{Rgb, RobotId, Vec2 as WorldVec};
use swarm_sim::{CollisionZone, Robot, World};

pub const WIN_W: f32 = 800.0;
pub const WIN_H: f32 = 600.0;

const BODY_RADIUS: f32 = 10.0;
const TARGET_RADIUS: f32 = 5.0;
/// Length multiplier for the heading and repulsion debug segments.
const VECTOR_SCALE: f32 = 30.0;

// ── Coordinate conversion ─────────────────────────────────────────────────────

/// World (y-down, top-left origin) → nannou (y-up, centered).
#[inline]
pub fn to_screen(p: WorldVec) -> Point2 {
    pt2(p.x - WIN_W / 2.0, WIN_H / 2.0 - p.y)
}

/// Nannou (y-up, centered) → world (y-down, top-left origin).
#[inline]
pub fn to_world(p: Point2) -> WorldVec {
    WorldVec::new(p.x + WIN_W / 2.0, WIN_H / 2.0 - p.y)
}

#[inline]
fn body_color(c: Rgb) -> Srgb<u8> {
    rgb8(c.r, c.g, c.b)
}

// ── Scene ─────────────────────────────────────────────────────────────────────

/// Draw every robot, plus the debug overlays when enabled.
pub fn draw_world(draw: &Draw, world: &World, show_zones: bool, selection: Option<RobotId>) {
    for robot in world.robots() {
        draw_robot(draw, robot);
        if show_zones {
            draw_zone_outline(draw, robot);
        }
    }

    // The inset is part of the zone overlay; selection alone doesn't show it.
    if show_zones
        && let Some(id) = selection
        && let Ok(robot) = world.robot(id)
    {
        draw_local_frame_inset(draw, robot);
    }
}

fn draw_robot(draw: &Draw, robot: &Robot) {
    let pos = to_screen(robot.position);

    // Body and avoidance ring.
    draw.ellipse()
        .xy(pos)
        .radius(BODY_RADIUS)
        .color(body_color(robot.color));
    draw.ellipse()
        .xy(pos)
        .radius(robot.avoid_radius)
        .no_fill()
        .stroke(BLACK)
        .stroke_weight(2.0);

    // Heading (blue) and mean repulsion (green, drawn opposed as in the
    // push direction).
    let heading_tip = to_screen(robot.position + robot.direction * VECTOR_SCALE);
    if heading_tip != pos {
        draw.line().start(pos).end(heading_tip).weight(1.5).color(BLUE);
    }
    let repulsion_tip = to_screen(robot.position - robot.mean_repulsion * VECTOR_SCALE);
    if repulsion_tip != pos {
        draw.line().start(pos).end(repulsion_tip).weight(1.5).color(GREEN);
    }

    // Target marker.
    if let Some(target) = robot.target {
        draw.ellipse()
            .xy(to_screen(target))
            .radius(TARGET_RADIUS)
            .color(RED);
    }
}

/// Rotated collision-zone outline in world space, red when tripped.
fn draw_zone_outline(draw: &Draw, robot: &Robot) {
    let frame = robot.local_frame();
    let [a, b, c, d] = CollisionZone::DEFAULT.corners().map(|p| to_screen(frame.to_world(p)));
    let color = if robot.collision { RED } else { GRAY };
    draw.quad()
        .points(a, b, c, d)
        .no_fill()
        .stroke_color(color)
        .stroke_weight(1.0);
}

/// Axis-aligned local-frame view anchored at the robot: the zone rectangle
/// points straight up (local +y = "ahead of me") with a dot per peer at its
/// local-frame position.
fn draw_local_frame_inset(draw: &Draw, robot: &Robot) {
    let anchor = to_screen(robot.position);
    let zone = CollisionZone::DEFAULT;

    draw.rect()
        .x_y(anchor.x, anchor.y + zone.depth / 2.0)
        .w_h(zone.half_width * 2.0, zone.depth)
        .no_fill()
        .stroke(if robot.collision { RED } else { DARKGRAY })
        .stroke_weight(1.5);

    for peer in &robot.local_peers {
        draw.ellipse()
            .x_y(anchor.x + peer.position.x, anchor.y + peer.position.y)
            .radius(3.0)
            .color(body_color(peer.color));
    }
}
