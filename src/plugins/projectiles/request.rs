//! Input side of the stream pipeline: aim, steer, safety toggle, trigger.
//!
//! None of these systems touch bullets that are already in flight; they only
//! reconfigure streams or append new bullets.

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::common::tunables::Tunables;
use crate::plugins::camera::MainCamera;

use super::components::{Aim, FireTimer, Shooter};
use super::messages::HitChannel;
use super::stream::BulletStream;

/// Spread source shared by every stream.
#[derive(Resource)]
pub struct SpreadRng(pub SmallRng);

impl Default for SpreadRng {
    fn default() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

impl SpreadRng {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

/// Cursor → world space. Leaves `Aim` empty when any link in the chain is missing.
pub fn update_aim_from_cursor(
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut aim: ResMut<Aim>,
) {
    aim.world_cursor = None;

    let window = match windows.single() {
        Ok(w) => w,
        Err(e) => { debug!("No single Window: {e:?}"); return; }
    };

    let Some(cursor) = window.cursor_position() else { return; };

    let (camera, camera_tf) = match q_camera.single() {
        Ok(v) => v,
        Err(e) => { debug!("No single MainCamera: {e:?}"); return; }
    };

    match camera.viewport_to_world_2d(camera_tf, cursor) {
        Ok(p) => aim.world_cursor = Some(p),
        Err(e) => debug!("viewport_to_world_2d failed: {e:?}"),
    }
}

/// Keep each shooter's stream anchored to the shooter and pointed at the cursor.
pub fn steer_streams(
    aim: Res<Aim>,
    tunables: Res<Tunables>,
    mut q: Query<(&Transform, &mut BulletStream), With<Shooter>>,
) {
    for (tf, mut stream) in &mut q {
        stream.set_origin(tf.translation.truncate());
        if let Some(target) = aim.world_cursor {
            stream.set_target(target);
        }
        stream.set_width(tunables.spray_width);
    }
}

/// `Q` flips the safety: deactivate a live stream, or re-arm it with its current settings.
pub fn toggle_streams(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    channel: Res<HitChannel>,
    mut q: Query<(Entity, &mut BulletStream), With<Shooter>>,
) {
    let Some(keys) = keys else { return; };
    if !keys.just_pressed(KeyCode::KeyQ) { return; }

    for (e, mut stream) in &mut q {
        if stream.is_active() {
            stream.deactivate();
            info!("stream {e} safety on");
        } else {
            let (origin, target, width, velocity) =
                (stream.origin(), stream.target(), stream.width(), stream.velocity());
            stream.activate(origin, target, width, velocity, channel.callback());
            info!("stream {e} safety off");
        }
    }
}

/// Left button: one bullet on press, then one per elapsed fire interval while held.
pub fn fire_streams(
    time: Res<Time>,
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    mut rng: ResMut<SpreadRng>,
    mut q: Query<(&mut BulletStream, &mut FireTimer), With<Shooter>>,
) {
    let Some(buttons) = buttons else { return; };
    if !buttons.pressed(MouseButton::Left) { return; }
    let first_shot = buttons.just_pressed(MouseButton::Left);

    for (mut stream, mut timer) in &mut q {
        if first_shot {
            timer.reset();
            stream.spawn(&mut rng.0);
            continue;
        }
        timer.tick(time.delta());
        for _ in 0..timer.times_finished_this_tick() {
            stream.spawn(&mut rng.0);
        }
    }
}
