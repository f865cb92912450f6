//! Projectiles plugin: bullet streams.
//!
//! A `BulletStream` owns a list of bare bullet positions. It does not spawn entities
//! per bullet and never enters the physics world. Bullets are advanced, collided
//! against ground rectangles, expired and drawn by the stream itself, once per frame.
//!
//! # Data flow
//! ```text
//!   Update schedule (variable dt), chained, InGame only
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (A) update_aim_from_cursor                                                │
//!│      - reads: Window cursor, MainCamera                                    │
//!│      - writes: Aim { world_cursor: Option<Vec2> }                          │
//!│                                                                            │
//!│  (B) steer_streams                                                         │
//!│      - reads: Aim, Tunables, Shooter Transform                             │
//!│      - mutates: BulletStream origin / target / width                       │
//!│                                                                            │
//!│  (C) toggle_streams (Q)                                                    │
//!│      - mutates: BulletStream active flag, hit callback                     │
//!│                                                                            │
//!│  (D) fire_streams (left mouse)                                             │
//!│      - reads: Time, ButtonInput<MouseButton>                               │
//!│      - mutates: FireTimer, SpreadRng, BulletStream bullets (append)        │
//!│                                                                            │
//!│  (E) advance_bullet_streams                                                │
//!│      - reads: Time, (Entity, Transform, Ground)                            │
//!│      - mutates: BulletStream bullets (move / remove), BulletTraces         │
//!│      - writes: HitChannel (through each stream's callback)                 │
//!│                                                                            │
//!│  (F) forward_hits: HitChannel -> BulletHit messages                        │
//!│  (G) tally_ground_hits: BulletHit -> GroundHits                            │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   PostUpdate (render-only): draw_bullet_traces reads BulletTraces -> gizmos
//! ```
//!
//! # Where do we still branch?
//! - Real-world input: cursor can be missing (outside window) → Aim becomes None and
//!   streams keep their previous target.
//! - Inactive streams: spawn and advance are silent no-ops.

pub mod advance;
pub mod collision;
pub mod components;
pub mod messages;
pub mod request;
pub mod sink;
pub mod stream;

use bevy::prelude::*;

use crate::common::state::GameState;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<components::Aim>()
            .init_resource::<sink::BulletTraces>()
            .init_resource::<messages::HitChannel>()
            .init_resource::<request::SpreadRng>()
            .add_message::<messages::BulletHit>();

        app.add_systems(
            Update,
            (
                request::update_aim_from_cursor,
                request::steer_streams,
                request::toggle_streams,
                request::fire_streams,
                advance::advance_bullet_streams,
                advance::forward_hits,
                advance::tally_ground_hits,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        );
    }
}

/// Render-only half: needs the gizmo infrastructure from `DefaultPlugins`.
pub fn register_render(app: &mut App) {
    app.add_systems(
        PostUpdate,
        sink::draw_bullet_traces.run_if(in_state(GameState::InGame)),
    );
}

#[cfg(test)]
mod tests;
