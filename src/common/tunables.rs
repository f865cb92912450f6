//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub shooter_speed: f32,
    /// Bullet speed in units per second.
    pub bullet_speed: f32,
    /// Full width of the spawn region, perpendicular to the shoot direction.
    pub spray_width: f32,
    /// Seconds between spawns while the trigger is held.
    pub fire_interval: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            shooter_speed: 420.0,
            bullet_speed: 900.0,
            spray_width: 24.0,
            fire_interval: 0.05,
        }
    }
}
