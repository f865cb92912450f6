//! Per-frame advance and hit bookkeeping.
//!
//! # Ordering
//! - `advance_bullet_streams` runs every stream once against a single snapshot of
//!   the grounds. Hits go out through each stream's callback (the `HitChannel`).
//! - `forward_hits` turns queued hits into `BulletHit` messages in the same frame.
//! - `tally_ground_hits` is the only writer of `GroundHits`.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use super::collision::GroundRect;
use super::components::{Ground, GroundHits};
use super::messages::{BulletHit, HitChannel};
use super::sink::BulletTraces;
use super::stream::BulletStream;

pub fn advance_bullet_streams(
    time: Res<Time>,
    q_grounds: Query<(Entity, &Transform, &Ground)>,
    mut traces: ResMut<BulletTraces>,
    mut q_streams: Query<(Entity, &mut BulletStream)>,
    mut grounds: Local<Vec<GroundRect>>,
) {
    grounds.clear();
    grounds.extend(
        q_grounds
            .iter()
            .map(|(e, tf, g)| GroundRect::new(e, tf.translation.truncate(), g.size)),
    );

    traces.clear();
    let dt = time.delta_secs();

    for (e, mut stream) in &mut q_streams {
        let tick = stream.update(dt, &*grounds, &mut *traces);
        if !tick.is_quiet() {
            debug!(
                "stream {e}: {} hit, {} expired, {} live",
                tick.hits, tick.expired, tick.live
            );
        }
    }
}

pub fn forward_hits(channel: Res<HitChannel>, mut writer: MessageWriter<BulletHit>) {
    writer.write_batch(channel.drain());
}

pub fn tally_ground_hits(
    mut reader: MessageReader<BulletHit>,
    mut q_hits: Query<&mut GroundHits>,
) {
    for hit in reader.read() {
        let Ok(mut count) = q_hits.get_mut(hit.entity) else {
            // Ground despawned between the hit and now.
            continue;
        };
        count.0 += 1;
        trace!("ground {} hit at {} ({} total)", hit.entity, hit.point, count.0);
    }
}
