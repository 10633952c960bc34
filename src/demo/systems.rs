use bevy::prelude::*;

use crate::demo::components::{Lamp, LampBulb};
use crate::demo::resources::{DemoConfig, EMERGENCY_BLACKOUT_SECS, LAMP_HEIGHT};
use crate::flicker::{
    BlackoutEnded, BlackoutStarted, FlickerController, FlickerPattern, FlickerSettings,
    FlickerTarget, SetFlickerPattern, TriggerBlackout,
};

fn bulb_light(settings: &FlickerSettings) -> PointLight {
    PointLight {
        color: settings.base_color,
        intensity: settings.base_intensity,
        range: 20.0,
        shadows_enabled: true,
        ..default()
    }
}

/// Spawns the camera, the floor and a row of flickering lamps.
/// The first lamp carries its light directly; the rest drive a child bulb through a
/// `FlickerTarget`.
pub fn setup_demo_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<DemoConfig>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 8.0, 16.0).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
    ));

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(60.0, 60.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.33, 0.3),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::default(),
    ));

    let settings = config.settings;
    for index in 0..config.lamps {
        let position = Vec3::new(config.lamp_x(index), LAMP_HEIGHT, 0.0);

        if index == 0 {
            commands.spawn((
                Lamp,
                bulb_light(&settings),
                Transform::from_translation(position),
                FlickerController::new(settings),
            ));
            continue;
        }

        let bulb = commands
            .spawn((LampBulb, bulb_light(&settings), Transform::default()))
            .id();
        commands
            .spawn((
                Lamp,
                Transform::from_translation(position),
                Visibility::default(),
                FlickerController::new(settings),
                FlickerTarget(bulb),
            ))
            .add_child(bulb);
    }
}

/// Keyboard controls: `B` emergency blackout, `Space` blackout, `1`-`3` flicker presets,
/// `Escape` quits
pub fn demo_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    lamps: Query<Entity, With<Lamp>>,
    mut blackouts: MessageWriter<TriggerBlackout>,
    mut patterns: MessageWriter<SetFlickerPattern>,
    mut app_exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        app_exit.write(AppExit::Success);
        return;
    }

    let blackout = if keyboard.just_pressed(KeyCode::KeyB) {
        Some(Some(EMERGENCY_BLACKOUT_SECS))
    } else if keyboard.just_pressed(KeyCode::Space) {
        Some(None)
    } else {
        None
    };

    let pattern = if keyboard.just_pressed(KeyCode::Digit1) {
        Some(FlickerPattern::STEADY)
    } else if keyboard.just_pressed(KeyCode::Digit2) {
        Some(FlickerPattern::FLUORESCENT)
    } else if keyboard.just_pressed(KeyCode::Digit3) {
        Some(FlickerPattern::DYING)
    } else {
        None
    };

    for entity in lamps.iter() {
        if let Some(duration) = blackout {
            blackouts.write(TriggerBlackout { entity, duration });
        }
        if let Some(pattern) = pattern {
            patterns.write(SetFlickerPattern { entity, pattern });
        }
    }
}

/// Logs blackout transitions
pub fn log_blackouts(
    mut started: MessageReader<BlackoutStarted>,
    mut ended: MessageReader<BlackoutEnded>,
) {
    for message in started.read() {
        let cause = if message.manual { "manual" } else { "random" };
        info!("Lamp {:?} blacked out ({}) until {:.2}s", message.entity, cause, message.ends_at);
    }
    for message in ended.read() {
        info!("Lamp {:?} is back", message.entity);
    }
}
