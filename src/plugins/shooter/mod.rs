//! Shooter plugin.
//!
//! Pipeline:
//! - OnEnter(InGame): spawn the shooter with an armed bullet stream, cache its entity
//! - Update: sample WASD, write ShooterInput resource
//! - FixedUpdate: write velocity to the dynamic body; the solver stops it at grounds
//!
//! The stream itself is driven by the projectiles plugin; this module only owns
//! the body that carries it.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::projectiles::components::{FireTimer, Shooter, ShooterEntity};
use crate::plugins::projectiles::messages::HitChannel;
use crate::plugins::projectiles::stream::BulletStream;

const SHOOTER_RADIUS: f32 = 13.0;

#[derive(Resource, Default, Debug)]
struct ShooterInput {
    move_axis: Vec2,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(ShooterInput::default())
        .init_resource::<ShooterEntity>()
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(Update, gather_input)
        .add_systems(FixedUpdate, apply_movement);
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>, channel: Res<HitChannel>) {
    let layers = CollisionLayers::new(Layer::Shooter, [Layer::Ground]);

    let origin = Vec2::ZERO;
    let mut stream = BulletStream::default();
    stream.activate(
        origin,
        origin + Vec2::X,
        tunables.spray_width,
        tunables.bullet_speed,
        channel.callback(),
    );

    let e = commands
        .spawn((
            Name::new("Shooter"),
            Shooter,
            stream,
            FireTimer::from_interval(tunables.fire_interval),
            Sprite {
                color: Color::srgb(0.2, 0.75, 0.9),
                custom_size: Some(Vec2::splat(SHOOTER_RADIUS * 2.0)),
                ..default()
            },
            Transform::from_translation(origin.extend(1.0)),
            // Dynamic so static grounds push back; nothing should spin it.
            RigidBody::Dynamic,
            LockedAxes::ROTATION_LOCKED,
            Collider::circle(SHOOTER_RADIUS),
            Friction::ZERO,
            layers,
            LinearVelocity::ZERO,
            TranslationInterpolation,
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    commands.insert_resource(ShooterEntity(Some(e)));
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<ShooterInput>) {
    let Some(keys) = keys else { return; };
    let mut axis = Vec2::ZERO;

    if keys.pressed(KeyCode::KeyW) {
        axis.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        axis.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }

    input.move_axis = axis.normalize_or_zero();
}

fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<ShooterInput>,
    mut q_shooter: Query<&mut LinearVelocity, With<Shooter>>,
) {
    let Ok(mut vel) = q_shooter.single_mut() else {
        return;
    };
    vel.0 = input.move_axis * tunables.shooter_speed;
}
