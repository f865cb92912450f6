//! Lighting plugin (Firefly) (render-only).
//!
//! A point light rides on the shooter and shows the stream's state:
//! - armed: warm, range = `MAX_TRAVEL`, so the lit circle is the bullets' reach
//! - safe (`Q`): cool and shrunk to the shooter's immediate surroundings

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::projectiles::components::Shooter;
use crate::plugins::projectiles::stream::{BulletStream, MAX_TRAVEL};

const ARMED_COLOR: Color = Color::srgb(1.0, 0.9, 0.75);
const SAFE_COLOR: Color = Color::srgb(0.55, 0.7, 1.0);
const SAFE_RANGE: f32 = MAX_TRAVEL * 0.25;
const LIGHT_Z: f32 = 10.0;

#[derive(Component)]
pub struct ShooterLight;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(GameState::InGame), spawn_shooter_light)
        .add_systems(Update, track_shooter_light);
}

/// Colour and range for a stream in its current state.
fn light_for(stream: &BulletStream) -> (Color, f32) {
    if stream.is_active() {
        (ARMED_COLOR, MAX_TRAVEL)
    } else {
        (SAFE_COLOR, SAFE_RANGE)
    }
}

fn spawn_shooter_light(mut commands: Commands) {
    commands.spawn((
        Name::new("ShooterLight"),
        ShooterLight,
        PointLight2d {
            color: ARMED_COLOR,
            radius: MAX_TRAVEL,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, LIGHT_Z),
        DespawnOnExit(GameState::InGame),
    ));
}

fn track_shooter_light(
    q_shooter: Query<(&Transform, &BulletStream), (With<Shooter>, Without<ShooterLight>)>,
    mut q_light: Query<(&mut Transform, &mut PointLight2d), (With<ShooterLight>, Without<Shooter>)>,
) {
    let Ok((tf_shooter, stream)) = q_shooter.single() else {
        return;
    };
    let Ok((mut tf_light, mut light)) = q_light.single_mut() else {
        return;
    };

    tf_light.translation = tf_shooter.translation.truncate().extend(LIGHT_Z);

    let (color, range) = light_for(stream);
    if light.color != color || light.radius != range {
        debug!("shooter light -> armed={} range={range}", stream.is_active());
        light.color = color;
        light.radius = range;
    }
}
