//! Vehicle domain: ground classification through an overlap query.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::vehicle::GroundProbe;

/// Overlap test against a set of physics layers.
pub trait GroundQuery {
    fn overlap(&self, point: Vec2, radius: f32, layers: LayerMask) -> bool;
}

/// Only colliders that are members of `layers` count as ground; the
/// vehicle's own collider sits on another layer and is skipped.
pub fn ground_filter(layers: LayerMask) -> SpatialQueryFilter {
    SpatialQueryFilter::from_mask(layers)
}

impl GroundQuery for SpatialQuery<'_, '_> {
    fn overlap(&self, point: Vec2, radius: f32, layers: LayerMask) -> bool {
        let filter = ground_filter(layers);
        !self
            .shape_intersections(&Collider::circle(radius), point, 0.0, &filter)
            .is_empty()
    }
}

/// World position of the probe; the offset rotates with the body.
pub fn probe_position(probe: &GroundProbe, transform: &Transform) -> Vec2 {
    transform
        .transform_point(probe.offset.extend(0.0))
        .truncate()
}

pub fn is_grounded(query: &impl GroundQuery, probe: &GroundProbe, transform: &Transform) -> bool {
    query.overlap(probe_position(probe, transform), probe.radius, probe.layers)
}
