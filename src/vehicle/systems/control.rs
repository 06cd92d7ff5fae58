//! Vehicle domain: frame-phase and fixed-phase control systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::vehicle::{
    BoostRefillEvent, GroundContact, Vehicle, VehicleControl, VehicleIntent, VehiclePresentation,
    VehicleTuning,
};

pub(crate) fn update_vehicle_control(
    time: Res<Time<Virtual>>,
    tuning: Res<VehicleTuning>,
    mut query: Query<
        (
            &VehicleIntent,
            &GroundContact,
            &Rotation,
            &mut VehicleControl,
            Forces,
        ),
        With<Vehicle>,
    >,
) {
    let now = time.elapsed_secs();

    for (intent, contact, rotation, mut control, mut forces) in &mut query {
        control.frame_update(
            &mut forces,
            &intent.0,
            contact.grounded,
            rotation.as_radians(),
            now,
            &tuning,
        );
    }
}

pub(crate) fn run_vehicle_tick(
    time: Res<Time<Fixed>>,
    clock: Res<Time<Virtual>>,
    tuning: Res<VehicleTuning>,
    mut query: Query<(Entity, &GroundContact, &Rotation, &mut VehicleControl, Forces), With<Vehicle>>,
) {
    let dt = time.delta_secs();
    let now = clock.elapsed_secs();

    for (entity, contact, rotation, mut control, mut forces) in &mut query {
        let outcome = control.fixed_tick(
            &mut forces,
            contact.grounded,
            rotation.as_radians(),
            dt,
            now,
            &tuning,
        );

        if outcome.jumped {
            debug!("Vehicle {:?} jump impulse applied", entity);
        }
        if outcome.boost_force.is_some() && control.boost.is_empty() {
            debug!("Vehicle {:?} ran out of boost", entity);
        }
    }
}

pub(crate) fn update_presentation(
    mut query: Query<
        (&VehicleIntent, &GroundContact, &VehicleControl, &mut VehiclePresentation),
        With<Vehicle>,
    >,
) {
    for (intent, contact, control, mut presentation) in &mut query {
        let is_boosting = intent.0.boost_held && !control.boost.is_empty();
        *presentation = VehiclePresentation {
            is_moving: intent.0.steering || is_boosting,
            is_boosting,
            is_grounded: contact.grounded,
        };
    }
}

pub(crate) fn handle_boost_refill(
    mut events: MessageReader<BoostRefillEvent>,
    mut query: Query<(Entity, &mut VehicleControl), With<Vehicle>>,
) {
    for event in events.read() {
        for (entity, mut control) in &mut query {
            if event.target.is_some_and(|target| target != entity) {
                continue;
            }
            control.boost.reset();
            info!(
                "Vehicle {:?} boost refilled to {}",
                entity,
                control.remaining_boost()
            );
        }
    }
}
