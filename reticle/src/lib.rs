//! Real-time celestial overlay engine.
//!
//! All per-session state lives in one owned context: the ephemeris
//! provider, catalog sources, observer fixes, the current catalog store,
//! and the target lock. The presentation layer holds one [`SkySession`],
//! feeds it attitude and location updates, asks it for a
//! [`FrameComposition`] every frame, and toggles the lock.

use std::sync::{Arc, RwLock};

use almanac::{CatalogSources, CatalogStore, NameFilter};
use ephemeris::{EphemerisProvider, KernelSet};
use time::OffsetDateTime;

pub mod callback;
pub mod config;
pub mod error;
pub mod frame;
pub mod lock;
pub mod observer;
pub mod projector;

pub use crate::callback::{AbortReason, CallbackId, TrackerEvent};
pub use crate::config::TrackerConfig;
pub use crate::error::TrackerError;
pub use crate::frame::{compose_frame, FrameComposition, PlacedObject, PlacedPlanet, Segment};
pub use crate::lock::{LockOffset, LockPhase, TargetTracker, ToggleOutcome};
pub use crate::observer::{Attitude, FrameSnapshot, GeoLocation, SharedObserver};
pub use crate::projector::{
    in_field_of_view, project, Projection, ScreenPoint, Viewport, FOV_HORIZONTAL_DEG,
    FOV_VERTICAL_DEG,
};

/// One observing session: provider, sources, observer state, the published
/// catalog, and the target tracker.
pub struct SkySession<P: EphemerisProvider> {
    provider: P,
    sources: CatalogSources,
    observer: SharedObserver,
    catalog: RwLock<Arc<CatalogStore>>,
    tracker: TargetTracker,
}

impl<P: EphemerisProvider> SkySession<P> {
    /// Create a session, registering the kernel set with the provider.
    ///
    /// The catalog starts empty; call [`SkySession::reload_sky`] to
    /// populate it.
    pub fn new(
        mut provider: P,
        kernels: &KernelSet,
        sources: CatalogSources,
        config: TrackerConfig,
    ) -> ephemeris::Result<Self> {
        for kernel in kernels.paths() {
            provider.load_kernel(kernel)?;
        }
        let observer = SharedObserver::new();
        let tracker = TargetTracker::new(config, observer.clone());
        Ok(Self {
            provider,
            sources,
            observer,
            catalog: RwLock::new(Arc::new(CatalogStore::default())),
            tracker,
        })
    }

    /// Rebuild the catalog for `timestamp` and `filter_text` and publish it
    /// atomically. The only catalog mutation surface; idempotent for
    /// identical inputs and sources.
    pub fn reload_sky(&self, timestamp: OffsetDateTime, filter_text: &str) {
        let filter = NameFilter::new(filter_text);
        let store = CatalogStore::load(&self.provider, timestamp, &filter, &self.sources);
        *self.catalog.write().unwrap() = Arc::new(store);
    }

    /// Handle on the currently published catalog.
    pub fn catalog(&self) -> Arc<CatalogStore> {
        self.catalog.read().unwrap().clone()
    }

    /// Handle for the attitude and location producers.
    pub fn observer(&self) -> &SharedObserver {
        &self.observer
    }

    /// The target tracker, for callbacks and state queries.
    pub fn tracker(&self) -> &TargetTracker {
        &self.tracker
    }

    /// Toggle the target lock against the current catalog.
    pub fn toggle_lock(&self) -> Result<ToggleOutcome, TrackerError> {
        self.tracker.toggle(&self.catalog())
    }

    /// One consistent per-frame snapshot at the given instant.
    pub fn snapshot_at(&self, utc: OffsetDateTime) -> FrameSnapshot {
        let (attitude, location) = self.observer.sample();
        FrameSnapshot {
            attitude,
            location,
            lock_offset: self.tracker.active_offset(),
            utc,
        }
    }

    /// Compose the overlay for one frame at the given instant.
    pub fn frame_at(&self, viewport: Viewport, utc: OffsetDateTime) -> FrameComposition {
        let snapshot = self.snapshot_at(utc);
        compose_frame(&self.catalog(), &snapshot, viewport)
    }

    /// Compose the overlay for one frame at the current time.
    pub fn frame(&self, viewport: Viewport) -> FrameComposition {
        self.frame_at(viewport, OffsetDateTime::now_utc())
    }
}
