//! Camera plugin (render-only).
//!
//! A single `MainCamera` follows the shooter with exponential smoothing. Entity
//! handles for both are cached in resources once, so the follow system does a
//! direct `get` instead of scanning.
//!
//! `Query<&Transform>` and `Query<&mut Transform>` in one system must be provably
//! disjoint (B0001); the `Without<...>` filters below encode that.
//!
//! ```text
//! OnEnter(InGame): spawn MainCamera -> write MainCameraEntity resource
//! PostUpdate:      follow_shooter uses stored handles + disjoint queries
//! ```

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::projectiles::components::{MainCameraEntity, Shooter, ShooterEntity};

#[derive(Component)]
pub struct MainCamera {
    pub responsiveness: f32,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<MainCameraEntity>()
        .add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(
            PostUpdate,
            follow_shooter
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn_camera(mut commands: Commands) {
    let e = commands
        .spawn((
            Name::new("MainCamera"),
            Camera2d,
            MainCamera { responsiveness: 5.0 },
            FireflyConfig::default(),
            Transform::from_xyz(0.0, 0.0, 999.0),
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    commands.insert_resource(MainCameraEntity(Some(e)));
}

fn follow_shooter(
    time: Res<Time>,
    shooter_e: Res<ShooterEntity>,
    cam_e: Res<MainCameraEntity>,
    q_shooter: Query<&Transform, (With<Shooter>, Without<MainCamera>)>,
    mut q_cam: Query<(&mut Transform, &MainCamera), Without<Shooter>>,
) {
    // Both are written on OnEnter(InGame), which runs before the first PostUpdate.
    let shooter = shooter_e.0.expect("ShooterEntity not set");
    let cam = cam_e.0.expect("MainCameraEntity not set");

    let tf_shooter = q_shooter.get(shooter).expect("ShooterEntity invalid");
    let (mut tf_cam, main_cam) = q_cam.get_mut(cam).expect("MainCameraEntity invalid");

    let dt = time.delta_secs();
    let alpha = 1.0 - (-main_cam.responsiveness * dt).exp();

    let target = tf_shooter.translation.truncate();
    let current = tf_cam.translation.truncate();
    let next = current + (target - current) * alpha;
    tf_cam.translation.x = next.x;
    tf_cam.translation.y = next.y;
}
