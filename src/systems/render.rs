//! Rendering with Raylib.
//!
//! [`render_system`] opens a frame, draws every [`MeshShape`] in 3D camera
//! space from its [`GlobalTransform3D`], then draws the registry overlay in
//! screen space while [`DebugMode`] is present.
//!
//! The Raylib handle and thread live in the `World` as non-send resources.
//! They are taken out for the duration of the frame so the passes can keep
//! querying the `World` while the draw handle is alive.
use bevy_ecs::prelude::*;
use glam::Vec3;
use raylib::prelude::*;

use crate::components::globaltransform3d::GlobalTransform3D;
use crate::components::meshshape::MeshShape;
use crate::components::tint::Tint;
use crate::resources::camera3d::Camera3DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::debugregistry::EntityDebugRegistry;
use crate::resources::selection::Selection;

const CYLINDER_SIDES: i32 = 16;
const SPHERE_RINGS: i32 = 12;
const SPHERE_SLICES: i32 = 16;
const OUTLINE_SHADE: f32 = 0.6;

const OVERLAY_X: i32 = 12;
const OVERLAY_Y: i32 = 12;
const LINE_HEIGHT: i32 = 18;
const FONT_SIZE: i32 = 16;

fn to_rl_color(t: Tint) -> Color {
    Color::new(t.r, t.g, t.b, t.a)
}

fn to_rl(v: Vec3) -> Vector3 {
    Vector3 {
        x: v.x,
        y: v.y,
        z: v.z,
    }
}

/// Draw one frame: the scene, then the overlay.
pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };
    let camera = world
        .get_resource::<Camera3DRes>()
        .map(|c| c.0)
        .unwrap_or_else(|| Camera3DRes::default().0);

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::RAYWHITE);
        {
            let mut d3 = d.begin_mode3D(camera);
            d3.draw_grid(10, 0.25);
            render_pass(world, &mut d3);
        }
        if world.contains_resource::<DebugMode>() {
            render_registry_overlay(world, &mut d);
        }
        render_help(&mut d);
    }

    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(rl);
}

/// Draw every shape in world space.
///
/// Cylinders and cones follow the entity's up axis; cubes are drawn
/// axis-aligned.
pub fn render_pass(world: &mut World, d3: &mut RaylibMode3D<RaylibDrawHandle>) {
    let to_draw: Vec<(MeshShape, GlobalTransform3D, Tint)> = {
        let mut q = world.query::<(&MeshShape, &GlobalTransform3D, Option<&Tint>)>();
        q.iter(world)
            .map(|(shape, gt, tint)| (*shape, *gt, tint.copied().unwrap_or_default()))
            .collect()
    };

    for (shape, gt, tint) in to_draw.iter() {
        let fill = to_rl_color(*tint);
        let outline = to_rl_color(tint.darken(OUTLINE_SHADE));
        let center = to_rl(gt.position);
        match *shape {
            MeshShape::Cylinder { height, radius } | MeshShape::Cone { height, radius } => {
                let half = gt.up() * (height * gt.scale.y * 0.5);
                let start = to_rl(gt.position - half);
                let end = to_rl(gt.position + half);
                let r = radius * gt.scale.x;
                let end_r = if matches!(shape, MeshShape::Cone { .. }) {
                    0.0
                } else {
                    r
                };
                d3.draw_cylinder_ex(start, end, r, end_r, CYLINDER_SIDES, fill);
                d3.draw_cylinder_wires_ex(start, end, r, end_r, CYLINDER_SIDES, outline);
            }
            MeshShape::Cube { size } => {
                let s = gt.scale * size;
                d3.draw_cube(center, s.x, s.y, s.z, fill);
                d3.draw_cube_wires(center, s.x, s.y, s.z, outline);
            }
            MeshShape::Sphere { radius } => {
                let r = radius * gt.scale.max_element();
                d3.draw_sphere(center, r, fill);
                d3.draw_sphere_wires(center, r, SPHERE_RINGS, SPHERE_SLICES, outline);
            }
        }
    }
}

/// Draw the registry table and the selected entity's details.
pub fn render_registry_overlay(world: &World, d: &mut RaylibDrawHandle) {
    let selected = world.get_resource::<Selection>().and_then(|s| s.selected);
    let Some(registry) = world.get_resource::<EntityDebugRegistry>() else {
        d.draw_text("registry not initialized", OVERLAY_X, OVERLAY_Y, FONT_SIZE, Color::GRAY);
        return;
    };

    let mut y = OVERLAY_Y;
    d.draw_text(
        &format!(
            "Registered entities: {} (rev {})",
            registry.len(),
            registry.revision()
        ),
        OVERLAY_X,
        y,
        FONT_SIZE,
        Color::DARKGRAY,
    );
    y += LINE_HEIGHT;

    for (i, snapshot) in registry.entries().iter().enumerate() {
        let p = snapshot.position();
        let is_selected = selected == Some(snapshot.entity());
        let line = format!(
            "{}{:>2} {:<14} ({:.2}, {:.2}, {:.2})",
            if is_selected { ">" } else { " " },
            i,
            snapshot.name(),
            p.x,
            p.y,
            p.z
        );
        let color = if is_selected {
            Color::BLUE
        } else {
            Color::BLACK
        };
        d.draw_text(&line, OVERLAY_X, y, FONT_SIZE, color);
        y += LINE_HEIGHT;
    }

    let Some(snapshot) = selected.and_then(|e| registry.get(e)) else {
        return;
    };
    y += LINE_HEIGHT;
    let p = snapshot.position();
    let s = snapshot.scale();
    let details = [
        format!("Name: {}", snapshot.name()),
        format!("Entity: {}", snapshot.entity()),
        format!("Position: ({:.3}, {:.3}, {:.3})", p.x, p.y, p.z),
        format!("Scale: ({:.3}, {:.3}, {:.3})", s.x, s.y, s.z),
        format!("Components: {}", snapshot.components().join(", ")),
    ];
    for line in details.iter() {
        d.draw_text(line, OVERLAY_X, y, FONT_SIZE, Color::DARKBLUE);
        y += LINE_HEIGHT;
    }
}

fn render_help(d: &mut RaylibDrawHandle) {
    let (w, h) = (d.get_screen_width(), d.get_screen_height());
    d.draw_text(
        "LEFT/RIGHT select  BACKSPACE deselect  R refresh  C clear  F11 overlay",
        OVERLAY_X,
        h - LINE_HEIGHT - OVERLAY_Y,
        FONT_SIZE,
        Color::GRAY,
    );
    d.draw_fps(w - 90, OVERLAY_Y);
}
