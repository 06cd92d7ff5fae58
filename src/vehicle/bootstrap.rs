//! Vehicle domain: spawning the two player vehicles.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::vehicle::{
    GameLayer, GroundContact, GroundProbe, InputBindings, PlayerSlot, ScriptedInput, Vehicle,
    VehicleControl, VehicleIntent, VehiclePresentation, VehicleTuning,
};

pub(crate) const VEHICLE_SIZE: Vec2 = Vec2::new(3.0, 1.2);
/// Probe sits just under the chassis center, in body space.
pub(crate) const GROUND_PROBE_OFFSET: Vec2 = Vec2::new(0.0, -0.3);
const SPAWN_HEIGHT: f32 = -3.0;
const SPAWN_DISTANCE: f32 = 8.0;

pub(crate) fn spawn_vehicles(mut commands: Commands, tuning: Res<VehicleTuning>) {
    for slot in [PlayerSlot::Left, PlayerSlot::Right] {
        let entity = spawn_vehicle(&mut commands, slot, &tuning);
        info!("Spawned {:?} vehicle {:?}", slot, entity);
    }
}

pub(crate) fn spawn_vehicle(
    commands: &mut Commands,
    slot: PlayerSlot,
    tuning: &VehicleTuning,
) -> Entity {
    let (bindings, color, x) = match slot {
        PlayerSlot::Left => (
            InputBindings::left_player(),
            Color::srgb(0.9, 0.35, 0.3),
            -SPAWN_DISTANCE,
        ),
        PlayerSlot::Right => (
            InputBindings::right_player(),
            Color::srgb(0.3, 0.5, 0.95),
            SPAWN_DISTANCE,
        ),
    };

    let mut control = VehicleControl::new(tuning);
    let mut sprite = Sprite {
        color,
        custom_size: Some(VEHICLE_SIZE),
        ..default()
    };
    if bindings.is_left_player {
        control.flip_facing();
        sprite.flip_x = true;
    }

    commands
        .spawn((
            // Identity & Control
            (
                Vehicle,
                slot,
                bindings,
                ScriptedInput::default(),
                VehicleIntent::default(),
                control,
                GroundProbe::new(GROUND_PROBE_OFFSET, tuning.ground_probe_radius),
                GroundContact::default(),
                VehiclePresentation::default(),
            ),
            // Rendering
            sprite,
            Transform::from_xyz(x, SPAWN_HEIGHT, 0.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(VEHICLE_SIZE.x, VEHICLE_SIZE.y),
                vehicle_dynamics(tuning),
                CollisionLayers::new(GameLayer::Vehicle, [GameLayer::Ground, GameLayer::Vehicle]),
            ),
        ))
        .id()
}

/// Mass properties, damping and gravity scale for a vehicle body.
pub(crate) fn vehicle_dynamics(
    tuning: &VehicleTuning,
) -> (Mass, AngularInertia, GravityScale, LinearDamping, AngularDamping) {
    (
        Mass(tuning.mass),
        AngularInertia(tuning.angular_inertia),
        GravityScale(tuning.gravity_scale),
        LinearDamping(tuning.linear_damping),
        AngularDamping(tuning.angular_damping),
    )
}

/// A vehicle without its probe or body cannot be driven. Checked for every
/// newly added vehicle, so late spawns stop the app instead of being skipped.
pub(crate) fn verify_vehicles(
    query: Query<
        (Entity, Has<GroundProbe>, Has<RigidBody>, Has<VehicleControl>),
        Added<Vehicle>,
    >,
    mut exit: MessageWriter<AppExit>,
) {
    for (entity, has_probe, has_body, has_control) in &query {
        if has_probe && has_body && has_control {
            continue;
        }
        error!(
            "Vehicle {:?} is incomplete: ground_probe={}, rigid_body={}, control={}",
            entity, has_probe, has_body, has_control
        );
        exit.write(AppExit::error());
    }
}
