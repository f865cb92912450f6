//! Hit delivery.
//!
//! A stream reports hits through a synchronous callback that it owns. Inside the
//! ECS that callback cannot borrow a `MessageWriter`, so the host hands every
//! stream a callback that pushes into an mpsc channel, and `forward_hits` drains
//! the channel into `BulletHit` messages once per frame.
//!
//! ```text
//!   BulletStream::update ──callback──> HitChannel.tx
//!                                         │
//!   forward_hits: HitChannel.rx ──> MessageWriter<BulletHit> ──> tally_ground_hits
//! ```

use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};

use bevy::prelude::*;

/// A bullet touched a ground. `point` is the bullet position after the move.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct BulletHit {
    pub entity: Entity,
    pub point: Vec2,
}

/// Boxed hit callback owned by a stream.
pub type HitCallback = Box<dyn FnMut(&BulletHit) + Send + Sync>;

#[derive(Resource)]
pub struct HitChannel {
    tx: Sender<BulletHit>,
    rx: Mutex<Receiver<BulletHit>>,
}

impl Default for HitChannel {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx: Mutex::new(rx) }
    }
}

impl HitChannel {
    /// A callback that queues hits for `forward_hits`.
    pub fn callback(&self) -> impl FnMut(&BulletHit) + Send + Sync + 'static {
        let tx = self.tx.clone();
        move |hit: &BulletHit| {
            // The receiver lives as long as the resource; a send only fails during teardown.
            let _ = tx.send(*hit);
        }
    }

    /// Take every queued hit.
    pub fn drain(&self) -> Vec<BulletHit> {
        match self.rx.lock() {
            Ok(rx) => rx.try_iter().collect(),
            Err(poisoned) => poisoned.into_inner().try_iter().collect(),
        }
    }
}
