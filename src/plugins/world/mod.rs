//! World plugin: spawns the ground rectangles bullets collide with.
//!
//! Every ground is both a bullet obstacle (`Ground`) and a static Avian collider,
//! so the shooter's dynamic body is blocked by the same rectangles that stop bullets.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState};
use crate::plugins::projectiles::components::{Ground, GroundHits};

const TILE: f32 = 64.0;
const HALF_W: f32 = TILE * 8.0;
const HALF_H: f32 = TILE * 5.0;
const THICKNESS: f32 = 30.0;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_grounds);
}

/// Arena border first, then platforms. Bullets test grounds in query order.
fn ground_layout() -> Vec<(&'static str, Vec2, Vec2)> {
    let span_x = HALF_W * 2.0 + THICKNESS * 2.0;
    vec![
        ("GroundFloor", Vec2::new(0.0, -HALF_H - THICKNESS * 0.5), Vec2::new(span_x, THICKNESS)),
        ("GroundCeiling", Vec2::new(0.0, HALF_H + THICKNESS * 0.5), Vec2::new(span_x, THICKNESS)),
        ("GroundLeft", Vec2::new(-HALF_W - THICKNESS * 0.5, 0.0), Vec2::new(THICKNESS, HALF_H * 2.0)),
        ("GroundRight", Vec2::new(HALF_W + THICKNESS * 0.5, 0.0), Vec2::new(THICKNESS, HALF_H * 2.0)),
        ("GroundLedgeLow", Vec2::new(-TILE * 4.0, -TILE * 2.5), Vec2::new(TILE * 3.0, TILE * 0.5)),
        ("GroundLedgeHigh", Vec2::new(TILE * 4.0, TILE * 1.5), Vec2::new(TILE * 3.0, TILE * 0.5)),
        ("GroundPillar", Vec2::new(TILE * 1.5, -TILE * 2.0), Vec2::new(TILE * 0.5, TILE * 2.0)),
    ]
}

fn spawn_grounds(mut commands: Commands) {
    let ground_color = Color::srgb(0.25, 0.27, 0.33);
    let ground_layers = CollisionLayers::new(Layer::Ground, [Layer::Shooter]);

    for (name, center, size) in ground_layout() {
        commands.spawn((
            Name::new(name),
            Ground { size },
            GroundHits::default(),
            Sprite {
                color: ground_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
            DespawnOnExit(GameState::InGame),
        ));
    }
}
