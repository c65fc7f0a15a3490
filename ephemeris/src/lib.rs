//! Ephemeris provider contract for solar-system body positions.
//!
//! The native ephemeris toolkit (kernel loading, UTC-to-ET conversion, state
//! vector queries) is consumed through the [`EphemerisProvider`] trait rather
//! than reimplemented. [`FixedEphemeris`] is a deterministic in-memory
//! provider for tests and offline tooling.

use std::path::PathBuf;

use thiserror::Error;
use time::{Month, OffsetDateTime};

pub mod bodies;
pub mod mock;
pub mod provider;

pub use bodies::Body;
pub use mock::FixedEphemeris;
pub use provider::{
    AberrationCorrection, EphemerisProvider, Frame, Spherical, StateVector, OBSERVER_EARTH,
};

/// Error types for ephemeris queries
#[derive(Debug, Error)]
pub enum EphemerisError {
    #[error("invalid time string: {0}")]
    InvalidTime(String),

    #[error("no ephemeris data for body: {0}")]
    BodyUnavailable(String),

    #[error("failed to load kernel: {0}")]
    KernelLoad(PathBuf),

    #[error("ephemeris calculation error: {0}")]
    CalculationError(String),
}

pub type Result<T> = std::result::Result<T, EphemerisError>;

/// Set of ephemeris kernels to register with a provider before querying.
///
/// A typical set is a leap-second kernel plus a planetary ephemeris
/// (e.g. `naif0012.tls` and `de430.bsp`).
#[derive(Debug, Clone, Default)]
pub struct KernelSet {
    paths: Vec<PathBuf>,
}

impl KernelSet {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.paths.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Format a UTC instant the way the native `str2et` routine expects it,
/// e.g. `2024 Jun 21 12:00:00`.
pub fn format_spice_utc(utc: OffsetDateTime) -> String {
    format!(
        "{} {} {:02} {:02}:{:02}:{:02}",
        utc.year(),
        month_abbreviation(utc.month()),
        utc.day(),
        utc.hour(),
        utc.minute(),
        utc.second()
    )
}

pub(crate) fn month_abbreviation(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
