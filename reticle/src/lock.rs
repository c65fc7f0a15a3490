//! Target lock: nearest-object search and persistent angular offsets.
//!
//! Lifecycle: `Unlocked -> Searching -> Locked -> Unlocked`, driven by a
//! single toggle. A search picks the candidate nearest the current device
//! facing, gives the operator a re-aim window, and only then commits the
//! offsets. The pending commit carries a generation token; any toggle
//! invalidates it, so a stale search can never lock late.

use std::sync::{Arc, Mutex};

use almanac::{CatalogStore, Target};
use serde::{Deserialize, Serialize};
use sky_math::ra_dec_to_alt_az;
use time::OffsetDateTime;

use crate::callback::{AbortReason, CallbackId, CallbackRegistry, TrackerEvent};
use crate::config::TrackerConfig;
use crate::error::TrackerError;
use crate::observer::{Attitude, GeoLocation, SharedObserver};

/// Persistent angular correction applied to the device facing once locked.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LockOffset {
    pub yaw_deg: f64,
    pub pitch_deg: f64,
}

/// Tracker state. Target and offsets live and die together.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LockPhase {
    #[default]
    Unlocked,
    Searching,
    Locked {
        target: Target,
        offset: LockOffset,
    },
}

/// Synchronous result of a toggle.
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    /// An active lock was cleared.
    LockCleared,
    /// A pending search was revoked before it could commit.
    SearchCancelled,
    /// A candidate was found; the re-aim window is running.
    SearchStarted { target: String },
}

#[derive(Debug, Default)]
struct TrackerInner {
    phase: LockPhase,
    generation: u64,
}

/// The target lock state machine.
///
/// Cheap to clone; clones share state. The re-aim wait runs as a spawned
/// tokio task, so [`TargetTracker::toggle`] must be called from within a
/// runtime, and the wait never blocks attitude delivery or frame
/// projection.
#[derive(Clone)]
pub struct TargetTracker {
    observer: SharedObserver,
    callbacks: CallbackRegistry,
    config: TrackerConfig,
    inner: Arc<Mutex<TrackerInner>>,
}

impl TargetTracker {
    pub fn new(config: TrackerConfig, observer: SharedObserver) -> Self {
        Self {
            observer,
            callbacks: CallbackRegistry::new(),
            config,
            inner: Arc::new(Mutex::new(TrackerInner::default())),
        }
    }

    /// Register a callback for tracker events.
    pub fn register_callback<F>(&self, callback: F) -> CallbackId
    where
        F: Fn(&TrackerEvent) + Send + Sync + 'static,
    {
        self.callbacks.register(callback)
    }

    /// Deregister a callback.
    pub fn deregister_callback(&self, callback_id: CallbackId) -> bool {
        self.callbacks.deregister(callback_id)
    }

    /// The single lock control surface.
    ///
    /// Locked: clears target and offsets atomically. Searching: revokes the
    /// pending commit. Unlocked: runs the nearest-candidate search against
    /// `catalog` and starts the re-aim window.
    pub fn toggle(&self, catalog: &CatalogStore) -> Result<ToggleOutcome, TrackerError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.phase {
            LockPhase::Locked { .. } => {
                inner.phase = LockPhase::Unlocked;
                inner.generation += 1;
                drop(inner);
                log::info!("target lock cleared");
                self.callbacks.emit(&TrackerEvent::LockCleared);
                Ok(ToggleOutcome::LockCleared)
            }
            LockPhase::Searching => {
                inner.phase = LockPhase::Unlocked;
                inner.generation += 1;
                drop(inner);
                log::info!("pending search cancelled");
                self.callbacks.emit(&TrackerEvent::SearchCancelled);
                Ok(ToggleOutcome::SearchCancelled)
            }
            LockPhase::Unlocked => {
                let (attitude, location) = self.observer.sample();
                let (Some(attitude), Some(location)) = (attitude, location) else {
                    return Err(TrackerError::SensorNotReady);
                };

                let candidates = catalog.targets();
                if candidates.is_empty() {
                    return Err(TrackerError::NoCandidates);
                }

                let target = nearest_candidate(
                    candidates,
                    attitude,
                    location,
                    OffsetDateTime::now_utc(),
                )
                .ok_or(TrackerError::NoNearestTarget)?;

                inner.generation += 1;
                let token = inner.generation;
                inner.phase = LockPhase::Searching;
                drop(inner);

                log::info!(
                    "search candidate {:?}, re-aim window {:?}",
                    target.name,
                    self.config.realign_wait
                );

                let name = target.name.clone();
                let tracker = self.clone();
                let wait = self.config.realign_wait;
                tokio::spawn(async move {
                    tokio::time::sleep(wait).await;
                    tracker.commit_pending(token, target);
                });

                self.callbacks
                    .emit(&TrackerEvent::SearchStarted { target: name.clone() });
                Ok(ToggleOutcome::SearchStarted { target: name })
            }
        }
    }

    /// Commit the offsets for a search started with `token`, unless the
    /// search has been superseded in the meantime.
    fn commit_pending(&self, token: u64, target: Target) {
        let (attitude, location) = self.observer.sample();
        let now = OffsetDateTime::now_utc();

        let mut inner = self.inner.lock().unwrap();
        if inner.generation != token || inner.phase != LockPhase::Searching {
            // Revoked or replaced while waiting; the toggle that did so
            // already reported it.
            log::debug!("stale search for {:?} discarded", target.name);
            return;
        }

        let (Some(attitude), Some(location)) = (attitude, location) else {
            inner.phase = LockPhase::Unlocked;
            inner.generation += 1;
            drop(inner);
            log::warn!("motion data lost during re-aim window");
            self.callbacks.emit(&TrackerEvent::SearchAborted {
                reason: AbortReason::MotionDataLost,
            });
            return;
        };

        let horizontal = ra_dec_to_alt_az(
            target.position.ra_deg,
            target.position.dec_deg,
            location.latitude_deg,
            location.longitude_deg,
            now,
        );
        let offset = LockOffset {
            yaw_deg: horizontal.az_deg - attitude.yaw_deg,
            pitch_deg: horizontal.alt_deg - attitude.pitch_deg,
        };

        let name = target.name.clone();
        inner.phase = LockPhase::Locked { target, offset };
        inner.generation += 1;
        drop(inner);

        log::info!("locked onto {name:?} with offset {offset:?}");
        self.callbacks.emit(&TrackerEvent::Locked { target: name });
    }

    /// Current phase snapshot.
    pub fn phase(&self) -> LockPhase {
        self.inner.lock().unwrap().phase.clone()
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.inner.lock().unwrap().phase, LockPhase::Locked { .. })
    }

    /// The offset to fold into frame snapshots while locked.
    pub fn active_offset(&self) -> Option<LockOffset> {
        match &self.inner.lock().unwrap().phase {
            LockPhase::Locked { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// The locked target, if any.
    pub fn locked_target(&self) -> Option<Target> {
        match &self.inner.lock().unwrap().phase {
            LockPhase::Locked { target, .. } => Some(target.clone()),
            _ => None,
        }
    }
}

/// Pick the candidate minimizing squared angular distance from the device
/// facing.
///
/// The distance is planar in (azimuth, altitude) space, not great-circle:
/// accurate near the center of view, increasingly distorted toward the
/// horizon wrap.
fn nearest_candidate(
    candidates: Vec<Target>,
    attitude: Attitude,
    location: GeoLocation,
    now: OffsetDateTime,
) -> Option<Target> {
    let mut nearest: Option<(Target, f64)> = None;
    for candidate in candidates {
        let horizontal = ra_dec_to_alt_az(
            candidate.position.ra_deg,
            candidate.position.dec_deg,
            location.latitude_deg,
            location.longitude_deg,
            now,
        );
        let delta_az = horizontal.az_deg - attitude.yaw_deg;
        let delta_alt = horizontal.alt_deg - attitude.pitch_deg;
        let distance = delta_az * delta_az + delta_alt * delta_alt;

        if distance.is_finite() && nearest.as_ref().map_or(true, |(_, best)| distance < *best) {
            nearest = Some((candidate, distance));
        }
    }
    nearest.map(|(target, _)| target)
}
