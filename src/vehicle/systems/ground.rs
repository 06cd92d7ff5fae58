//! Vehicle domain: ground detection system.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::vehicle::{GroundContact, GroundProbe, Vehicle, is_grounded};

/// Refresh the cached ground contact. Runs ahead of both the frame update and
/// the fixed tick so each phase sees one consistent answer.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(Entity, &Transform, &GroundProbe, &mut GroundContact), With<Vehicle>>,
) {
    for (entity, transform, probe, mut contact) in &mut query {
        let was_grounded = contact.grounded;
        contact.grounded = is_grounded(&spatial_query, probe, transform);

        if contact.grounded && !was_grounded {
            debug!("Vehicle {:?} landed", entity);
        } else if !contact.grounded && was_grounded {
            debug!("Vehicle {:?} left the ground", entity);
        }
    }
}
