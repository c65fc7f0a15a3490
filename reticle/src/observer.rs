//! Shared observer state fed by the attitude and location producers.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::lock::LockOffset;

/// Device attitude from the orientation sensor, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attitude {
    pub yaw_deg: f64,
    pub pitch_deg: f64,
}

/// Observer position on Earth, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

/// Everything one frame needs, read as a single consistent snapshot.
///
/// `attitude` and `location` are `None` until their producer has delivered
/// a first fix; projection is disabled until both exist. Staleness is
/// tolerated, absence is not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    pub attitude: Option<Attitude>,
    pub location: Option<GeoLocation>,
    pub lock_offset: Option<LockOffset>,
    pub utc: OffsetDateTime,
}

#[derive(Debug, Default)]
struct ObserverInner {
    attitude: Option<Attitude>,
    location: Option<GeoLocation>,
}

/// Handle to the observer state shared between the two producers and the
/// frame consumer. Cheap to clone; all clones see the same state.
#[derive(Debug, Clone, Default)]
pub struct SharedObserver {
    inner: Arc<Mutex<ObserverInner>>,
}

impl SharedObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called by the orientation stream, nominally at 60 Hz.
    pub fn update_attitude(&self, attitude: Attitude) {
        self.inner.lock().unwrap().attitude = Some(attitude);
    }

    /// Drop the attitude fix, as when the motion sensor stops delivering.
    pub fn clear_attitude(&self) {
        self.inner.lock().unwrap().attitude = None;
    }

    /// Called whenever a location fix arrives; the latest fix wins.
    pub fn update_location(&self, location: GeoLocation) {
        self.inner.lock().unwrap().location = Some(location);
    }

    /// Read both fixes under one lock acquisition.
    pub fn sample(&self) -> (Option<Attitude>, Option<GeoLocation>) {
        let inner = self.inner.lock().unwrap();
        (inner.attitude, inner.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixes_start_absent() {
        let observer = SharedObserver::new();
        assert_eq!(observer.sample(), (None, None));
    }

    #[test]
    fn latest_fix_wins_across_clones() {
        let observer = SharedObserver::new();
        let producer = observer.clone();

        producer.update_location(GeoLocation {
            latitude_deg: 40.0,
            longitude_deg: -74.0,
        });
        producer.update_location(GeoLocation {
            latitude_deg: 51.5,
            longitude_deg: -0.1,
        });
        producer.update_attitude(Attitude {
            yaw_deg: 10.0,
            pitch_deg: 20.0,
        });

        let (attitude, location) = observer.sample();
        assert_eq!(location.unwrap().latitude_deg, 51.5);
        assert_eq!(attitude.unwrap().yaw_deg, 10.0);

        producer.clear_attitude();
        assert!(observer.sample().0.is_none());
        assert!(observer.sample().1.is_some());
    }
}
