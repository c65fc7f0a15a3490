use thiserror::Error;

/// Errors reported by the target tracker's control surface.
///
/// None of these are fatal; each maps to an operator advisory.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TrackerError {
    /// Attitude or location data has not arrived yet.
    #[error("sensor data not ready")]
    SensorNotReady,

    /// The catalog holds no objects to lock onto.
    #[error("no objects available to lock onto")]
    NoCandidates,

    /// No candidate produced a usable angular distance.
    #[error("could not determine the nearest object")]
    NoNearestTarget,
}
