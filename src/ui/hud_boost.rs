//! UI domain: per-vehicle boost meter.

use bevy::prelude::*;

use crate::vehicle::{PlayerSlot, Vehicle, VehicleControl, VehiclePresentation};

pub(crate) const BOOST_BAR_WIDTH: f32 = 200.0;
pub(crate) const BOOST_BAR_HEIGHT: f32 = 16.0;
pub(crate) const BOOST_BAR_PADDING: f32 = 16.0;

const IDLE_COLOR: Color = Color::srgb(0.95, 0.6, 0.15);
const BOOSTING_COLOR: Color = Color::srgb(1.0, 0.9, 0.3);

/// Marker for a boost meter container
#[derive(Component)]
pub struct BoostBarUI;

/// Fill element of the boost meter owned by `vehicle`
#[derive(Component)]
pub struct BoostBarFill {
    pub vehicle: Entity,
}

/// Numeric readout next to the meter
#[derive(Component)]
pub struct BoostAmountText {
    pub vehicle: Entity,
}

pub(crate) fn spawn_boost_bars(
    mut commands: Commands,
    vehicles: Query<(Entity, &PlayerSlot), Added<Vehicle>>,
) {
    for (vehicle, slot) in &vehicles {
        // Each player's meter sits in their own top corner
        let (left, right) = match slot {
            PlayerSlot::Left => (Val::Px(BOOST_BAR_PADDING), Val::Auto),
            PlayerSlot::Right => (Val::Auto, Val::Px(BOOST_BAR_PADDING)),
        };

        commands
            .spawn((
                BoostBarUI,
                Node {
                    position_type: PositionType::Absolute,
                    left,
                    right,
                    top: Val::Px(BOOST_BAR_PADDING),
                    flex_direction: FlexDirection::Row,
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(8.0),
                    ..default()
                },
            ))
            .with_children(|parent| {
                parent
                    .spawn((
                        Node {
                            width: Val::Px(BOOST_BAR_WIDTH),
                            height: Val::Px(BOOST_BAR_HEIGHT),
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
                        BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
                    ))
                    .with_children(|bar| {
                        bar.spawn((
                            BoostBarFill { vehicle },
                            Node {
                                width: Val::Percent(0.0),
                                height: Val::Percent(100.0),
                                ..default()
                            },
                            BackgroundColor(IDLE_COLOR),
                        ));
                    });

                parent.spawn((
                    BoostAmountText { vehicle },
                    Text::new("0"),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.85, 0.5)),
                ));
            });
    }
}

pub(crate) fn update_boost_bars(
    vehicles: Query<(&VehicleControl, &VehiclePresentation), With<Vehicle>>,
    mut fills: Query<(&BoostBarFill, &mut Node, &mut BackgroundColor)>,
    mut texts: Query<(&BoostAmountText, &mut Text)>,
) {
    for (fill, mut node, mut bg_color) in &mut fills {
        let Ok((control, presentation)) = vehicles.get(fill.vehicle) else {
            continue;
        };
        node.width = Val::Percent(control.boost.fraction() * 100.0);
        bg_color.0 = if presentation.is_boosting {
            BOOSTING_COLOR
        } else {
            IDLE_COLOR
        };
    }

    for (amount, mut text) in &mut texts {
        let Ok((control, _)) = vehicles.get(amount.vehicle) else {
            continue;
        };
        **text = format!("{:.0}", control.remaining_boost());
    }
}
