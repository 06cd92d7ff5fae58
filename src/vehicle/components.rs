//! Vehicle domain: components and physics layers for controlled vehicles.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::vehicle::intent::ControlAction;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Surfaces the ground probe reports as contact
    Ground,
    /// Vehicle bodies
    Vehicle,
}

/// Marks an entity driven by the vehicle controller
#[derive(Component, Debug)]
pub struct Vehicle;

/// Which side of the arena a vehicle starts on
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSlot {
    Left,
    Right,
}

/// Per-vehicle key bindings for the live keyboard source
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct InputBindings {
    pub left: KeyCode,
    pub right: KeyCode,
    pub jump: KeyCode,
    pub boost: KeyCode,
    /// The left player is mirrored once at spawn.
    pub is_left_player: bool,
}

impl InputBindings {
    pub fn left_player() -> Self {
        Self {
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            jump: KeyCode::KeyW,
            boost: KeyCode::ShiftLeft,
            is_left_player: true,
        }
    }

    pub fn right_player() -> Self {
        Self {
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
            jump: KeyCode::ArrowUp,
            boost: KeyCode::ShiftRight,
            is_left_player: false,
        }
    }

    pub fn key_for(&self, action: ControlAction) -> KeyCode {
        match action {
            ControlAction::Left => self.left,
            ControlAction::Right => self.right,
            ControlAction::Jump => self.jump,
            ControlAction::Boost => self.boost,
        }
    }
}

/// Overlap probe used to decide whether the vehicle touches the ground.
/// `offset` is actor-local, so the probe follows the body's rotation.
#[derive(Component, Debug, Clone, Copy)]
pub struct GroundProbe {
    pub offset: Vec2,
    pub radius: f32,
    pub layers: LayerMask,
}

impl GroundProbe {
    pub fn new(offset: Vec2, radius: f32) -> Self {
        Self {
            offset,
            radius,
            layers: GameLayer::Ground.into(),
        }
    }
}

/// Last ground probe result, refreshed at the start of each frame and each tick
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct GroundContact {
    pub grounded: bool,
}

/// Flags read by the HUD and sprite layer once per frame
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VehiclePresentation {
    pub is_moving: bool,
    pub is_boosting: bool,
    pub is_grounded: bool,
}
