//! Render seam for bullet streams.
//!
//! The stream never talks to a graphics backend. It hands every surviving bullet
//! to a `BulletSink`; the ECS host buffers those into `BulletTraces`, and a
//! render-only system turns the buffer into gizmo lines.

use bevy::prelude::*;

/// Bullet colour (same warm yellow for every stream).
pub const BULLET_COLOR: Color = Color::srgb(1.0, 0.85, 0.3);

pub trait BulletSink {
    /// Called once per surviving bullet per update, with the unit shoot direction.
    fn draw_bullet(&mut self, _pos: Vec2, _dir: Vec2) {}
}

/// Discards every bullet.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl BulletSink for NoopSink {}

/// A short line segment centred on a bullet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BulletTrace {
    pub tail: Vec2,
    pub head: Vec2,
}

/// Half-length of a drawn bullet trace along the shoot direction.
pub const TRACE_HALF_LEN: f32 = 5.0;

/// Per-frame trace buffer.
///
/// Written by `advance_bullet_streams`, read by `draw_bullet_traces`.
#[derive(Resource, Debug, Default)]
pub struct BulletTraces {
    pub traces: Vec<BulletTrace>,
}

impl BulletTraces {
    #[inline]
    pub fn clear(&mut self) {
        self.traces.clear();
    }
}

impl BulletSink for BulletTraces {
    fn draw_bullet(&mut self, pos: Vec2, dir: Vec2) {
        self.traces.push(BulletTrace {
            tail: pos - dir * TRACE_HALF_LEN,
            head: pos + dir * TRACE_HALF_LEN,
        });
    }
}

/// Render-only: draw buffered traces.
pub fn draw_bullet_traces(traces: Res<BulletTraces>, mut gizmos: Gizmos) {
    for t in &traces.traces {
        gizmos.line_2d(t.tail, t.head, BULLET_COLOR);
    }
}
