//! Vehicle domain: the flat arena the two vehicles drive in.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::vehicle::GameLayer;

pub(crate) const FLOOR_SIZE: Vec2 = Vec2::new(32.0, 1.0);
pub(crate) const FLOOR_Y: f32 = -6.0;
pub(crate) const WALL_SIZE: Vec2 = Vec2::new(1.0, 20.0);
pub(crate) const WALL_Y: f32 = 3.5;
const WALL_X: f32 = 16.5;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

pub(crate) fn spawn_arena(mut commands: Commands) {
    let ground_color = Color::srgb(0.35, 0.4, 0.35);
    let wall_color = Color::srgb(0.3, 0.3, 0.4);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Vehicle]);

    // Floor
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(FLOOR_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, FLOOR_Y, 0.0),
        RigidBody::Static,
        Collider::rectangle(FLOOR_SIZE.x, FLOOR_SIZE.y),
        ground_layers,
    ));

    // Side walls count as ground so a car resting on its nose can still jump
    for x in [-WALL_X, WALL_X] {
        commands.spawn((
            Ground,
            Sprite {
                color: wall_color,
                custom_size: Some(WALL_SIZE),
                ..default()
            },
            Transform::from_xyz(x, WALL_Y, 0.0),
            RigidBody::Static,
            Collider::rectangle(WALL_SIZE.x, WALL_SIZE.y),
            ground_layers,
        ));
    }
}
