// parcours_sim/src/simulation/plugins/hud.rs

//! Heads-up display: the current zone banner plus the racing readouts
//! (speed and gear). The readouts are derived display values, not physical
//! quantities.

use crate::prelude::*;
use crate::simulation::core::events::{SectionChanged, VehicleTelemetry};
use crate::simulation::plugins::track::TrackMap;
use crate::simulation::plugins::vehicle::PlayerVehicle;
use avian3d::prelude::LinearVelocity;
use parcours_core::telemetry::{display_gear, display_speed};

#[derive(Component, Debug)]
pub struct HudRoot;

/// The racing readout block, hidden while in free mode.
#[derive(Component, Debug)]
pub struct DriveReadouts;

#[derive(Component, Debug)]
pub struct ZoneText;

#[derive(Component, Debug)]
pub struct SpeedText;

#[derive(Component, Debug)]
pub struct GearText;

#[derive(Component, Debug)]
pub struct ModeHintText;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(AppState::SceneBuilding),
            spawn_hud.in_set(SceneBuildSet::Finalize),
        )
        .add_systems(
            Update,
            (
                emit_vehicle_telemetry
                    .run_if(in_state(AppState::Running).and(in_state(InteractionMode::Drive))),
                update_zone_banner,
                update_drive_readouts,
            )
                .run_if(in_state(AppState::Running)),
        )
        .add_systems(OnEnter(InteractionMode::Free), hide_drive_readouts)
        .add_systems(OnExit(InteractionMode::Free), show_drive_readouts);
    }
}

fn spawn_hud(mut commands: Commands, mode: Res<State<InteractionMode>>) {
    // The HUD spawns after the initial mode's OnEnter already ran, so the
    // readout visibility has to be seeded here.
    let readout_visibility = match mode.get() {
        InteractionMode::Drive => Visibility::Inherited,
        InteractionMode::Free => Visibility::Hidden,
    };

    commands
        .spawn((
            Name::new("Hud"),
            HudRoot,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::SpaceBetween,
                padding: UiRect::all(Val::Px(16.0)),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Name::new("Hud_Zone"),
                ZoneText,
                Text::new("START LINE"),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::srgb(0.392, 1.0, 0.855)),
                Node {
                    align_self: AlignSelf::Center,
                    ..default()
                },
            ));

            parent
                .spawn((
                    Name::new("Hud_Readouts"),
                    DriveReadouts,
                    readout_visibility,
                    Node {
                        flex_direction: FlexDirection::Row,
                        column_gap: Val::Px(24.0),
                        align_self: AlignSelf::FlexEnd,
                        ..default()
                    },
                ))
                .with_children(|readouts| {
                    readouts.spawn((
                        Name::new("Hud_Speed"),
                        SpeedText,
                        Text::new("0 km/h"),
                        TextFont {
                            font_size: 24.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                    readouts.spawn((
                        Name::new("Hud_Gear"),
                        GearText,
                        Text::new("GEAR 1"),
                        TextFont {
                            font_size: 24.0,
                            ..default()
                        },
                        TextColor(Color::srgb(1.0, 0.843, 0.0)),
                    ));
                    readouts.spawn((
                        Name::new("Hud_ModeHint"),
                        ModeHintText,
                        Text::new("WASD drive | ESC free look"),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.6)),
                    ));
                });
        });
}

/// Broadcasts the vehicle pose once per render tick while driving.
fn emit_vehicle_telemetry(
    mut events: EventWriter<VehicleTelemetry>,
    query: Query<(&Transform, &LinearVelocity), With<PlayerVehicle>>,
) {
    let Ok((transform, velocity)) = query.single() else {
        return;
    };
    events.write(VehicleTelemetry {
        position: transform.translation,
        speed: velocity.length(),
    });
}

/// The start checkpoint reads "START LINE"; every other section reads as a
/// zone, e.g. "PROJECTS ZONE".
fn update_zone_banner(
    map: Option<Res<TrackMap>>,
    mut events: EventReader<SectionChanged>,
    mut query: Query<(&mut Text, &mut TextColor), With<ZoneText>>,
) {
    let Some(map) = map else {
        return;
    };
    let Ok((mut text, mut color)) = query.single_mut() else {
        return;
    };

    for event in events.read() {
        let Some(checkpoint) = map.0.get(event.section) else {
            continue;
        };
        text.0 = if event.section == 0 {
            "START LINE".to_string()
        } else {
            format!("{} ZONE", checkpoint.label)
        };
        let [r, g, b] = checkpoint.color;
        color.0 = Color::srgb(r, g, b);
    }
}

fn update_drive_readouts(
    mut events: EventReader<VehicleTelemetry>,
    mut speed_query: Query<&mut Text, (With<SpeedText>, Without<GearText>)>,
    mut gear_query: Query<&mut Text, (With<GearText>, Without<SpeedText>)>,
) {
    let Some(telemetry) = events.read().last() else {
        return;
    };

    if let Ok(mut text) = speed_query.single_mut() {
        let speed = display_speed(f64::from(telemetry.speed));
        text.0 = format!("{speed:.0} km/h");
    }
    if let Ok(mut text) = gear_query.single_mut() {
        let gear = display_gear(f64::from(telemetry.speed));
        text.0 = format!("GEAR {gear}");
    }
}

fn hide_drive_readouts(mut query: Query<&mut Visibility, With<DriveReadouts>>) {
    if let Ok(mut visibility) = query.single_mut() {
        *visibility = Visibility::Hidden;
    }
}

fn show_drive_readouts(mut query: Query<&mut Visibility, With<DriveReadouts>>) {
    if let Ok(mut visibility) = query.single_mut() {
        *visibility = Visibility::Visible;
    }
}
