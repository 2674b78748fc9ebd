//! Integration tests for the 3D parent-child transform hierarchy.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test hierarchy_integration
//! ```

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use glam::{Quat, Vec3};

use entitydebugger::components::globaltransform3d::GlobalTransform3D;
use entitydebugger::components::transform3d::Transform3D;
use entitydebugger::systems::propagate_transforms::propagate_transforms;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

fn tick_propagate(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(propagate_transforms);
    schedule.run(world);
}

#[test]
fn globaltransform3d_default_is_identity() {
    let gt = GlobalTransform3D::default();
    assert!(approx_vec(gt.position, Vec3::ZERO));
    assert!(approx_vec(gt.scale, Vec3::ONE));
    assert!(approx_vec(gt.up(), Vec3::Y));
}

#[test]
fn propagate_root_without_children_mirrors_local() {
    let mut world = World::new();
    let root = world
        .spawn((
            Transform3D::from_xyz(1.0, 2.0, 3.0).with_scale(Vec3::splat(2.0)),
            GlobalTransform3D::default(),
        ))
        .id();

    tick_propagate(&mut world);

    let gt = world.get::<GlobalTransform3D>(root).unwrap();
    assert!(approx_vec(gt.position, Vec3::new(1.0, 2.0, 3.0)));
    assert!(approx_vec(gt.scale, Vec3::splat(2.0)));
}

#[test]
fn propagate_single_child_position_only() {
    let mut world = World::new();
    let parent = world
        .spawn((Transform3D::from_xyz(1.0, 0.0, -1.0), GlobalTransform3D::default()))
        .id();
    let child = world
        .spawn((
            Transform3D::from_xyz(0.0, 0.4, 0.0),
            GlobalTransform3D::default(),
            ChildOf(parent),
        ))
        .id();

    tick_propagate(&mut world);

    let gt = world.get::<GlobalTransform3D>(child).unwrap();
    assert!(approx_vec(gt.position, Vec3::new(1.0, 0.4, -1.0)));
}

#[test]
fn propagate_child_offset_is_scaled_and_rotated_by_parent() {
    let mut world = World::new();
    let parent = world
        .spawn((
            Transform3D::from_xyz(0.0, 1.0, 0.0)
                .with_scale(Vec3::splat(2.0))
                .with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2)),
            GlobalTransform3D::default(),
        ))
        .id();
    let child = world
        .spawn((
            Transform3D::from_xyz(1.0, 0.0, 0.0),
            GlobalTransform3D::default(),
            ChildOf(parent),
        ))
        .id();

    tick_propagate(&mut world);

    // (1, 0, 0) scaled to (2, 0, 0), rotated 90 degrees about Z to (0, 2, 0).
    let gt = world.get::<GlobalTransform3D>(child).unwrap();
    assert!(approx_vec(gt.position, Vec3::new(0.0, 3.0, 0.0)));
    assert!(approx_vec(gt.scale, Vec3::splat(2.0)));
    assert!(approx_vec(gt.up(), Vec3::new(-1.0, 0.0, 0.0)));
}

#[test]
fn propagate_grandchild_through_flipped_parent() {
    let mut world = World::new();
    let root = world
        .spawn((Transform3D::default(), GlobalTransform3D::default()))
        .id();
    let flipped = world
        .spawn((
            Transform3D::from_xyz(0.0, 0.4, 0.0)
                .with_rotation(Quat::from_rotation_x(std::f32::consts::PI)),
            GlobalTransform3D::default(),
            ChildOf(root),
        ))
        .id();
    let grandchild = world
        .spawn((
            Transform3D::from_xyz(0.0, 0.1, 0.0),
            GlobalTransform3D::default(),
            ChildOf(flipped),
        ))
        .id();

    tick_propagate(&mut world);

    // Flipped about X, local +Y points down.
    let gt = world.get::<GlobalTransform3D>(grandchild).unwrap();
    assert!(approx_vec(gt.position, Vec3::new(0.0, 0.3, 0.0)));
    assert!(approx_vec(gt.up(), Vec3::NEG_Y));
}

#[test]
fn propagate_inserts_missing_global_transform() {
    let mut world = World::new();
    let parent = world.spawn(Transform3D::from_xyz(0.0, 1.0, 0.0)).id();
    let child = world
        .spawn((Transform3D::from_xyz(0.5, 0.0, 0.0), ChildOf(parent)))
        .id();

    tick_propagate(&mut world);

    let gt = world.get::<GlobalTransform3D>(child).unwrap();
    assert!(approx_vec(gt.position, Vec3::new(0.5, 1.0, 0.0)));
    assert!(world.get::<GlobalTransform3D>(parent).is_some());
}

#[test]
fn propagate_follows_parent_movement_across_ticks() {
    let mut world = World::new();
    let parent = world
        .spawn((Transform3D::default(), GlobalTransform3D::default()))
        .id();
    let child = world
        .spawn((
            Transform3D::from_xyz(0.0, 0.5, 0.0),
            GlobalTransform3D::default(),
            ChildOf(parent),
        ))
        .id();

    tick_propagate(&mut world);
    world.get_mut::<Transform3D>(parent).unwrap().position.x = 2.0;
    tick_propagate(&mut world);

    let gt = world.get::<GlobalTransform3D>(child).unwrap();
    assert!(approx_vec(gt.position, Vec3::new(2.0, 0.5, 0.0)));
}
