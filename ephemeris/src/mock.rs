//! Deterministic in-memory provider for tests and offline tooling.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use nalgebra::Vector3;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time};

use crate::provider::{AberrationCorrection, EphemerisProvider, Frame, StateVector};
use crate::{EphemerisError, Result};

/// A provider that places each configured body at a fixed RA/Dec/range,
/// independent of query time.
///
/// Useful wherever the native toolkit is unavailable: unit tests, the
/// catalog stats CLI, and simulator runs.
#[derive(Debug, Clone, Default)]
pub struct FixedEphemeris {
    placements: HashMap<String, Vector3<f64>>,
    kernels: Vec<PathBuf>,
}

impl FixedEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `target` at the given equatorial position and range.
    pub fn with_body(mut self, target: &str, ra_deg: f64, dec_deg: f64, range_km: f64) -> Self {
        let ra = ra_deg.to_radians();
        let dec = dec_deg.to_radians();
        let position = Vector3::new(
            range_km * dec.cos() * ra.cos(),
            range_km * dec.cos() * ra.sin(),
            range_km * dec.sin(),
        );
        self.placements.insert(target.to_string(), position);
        self
    }

    /// Kernels registered so far, in load order.
    pub fn loaded_kernels(&self) -> &[PathBuf] {
        &self.kernels
    }
}

impl EphemerisProvider for FixedEphemeris {
    fn load_kernel(&mut self, path: &Path) -> Result<()> {
        self.kernels.push(path.to_path_buf());
        Ok(())
    }

    fn time_to_et(&self, utc: &str) -> Result<f64> {
        let parsed = parse_spice_utc(utc)
            .ok_or_else(|| EphemerisError::InvalidTime(utc.to_string()))?;
        // Seconds past the J2000 epoch, ignoring leap seconds.
        let j2000 = PrimitiveDateTime::new(
            Date::from_calendar_date(2000, Month::January, 1)
                .map_err(|e| EphemerisError::CalculationError(e.to_string()))?,
            Time::from_hms(12, 0, 0).map_err(|e| EphemerisError::CalculationError(e.to_string()))?,
        )
        .assume_utc();
        Ok((parsed - j2000).as_seconds_f64())
    }

    fn state_vector(
        &self,
        target: &str,
        _et: f64,
        _frame: Frame,
        _correction: AberrationCorrection,
        _observer: &str,
    ) -> Result<(StateVector, f64)> {
        let position = self
            .placements
            .get(target)
            .copied()
            .ok_or_else(|| EphemerisError::BodyUnavailable(target.to_string()))?;
        let light_time = position.norm() / 299_792.458;
        Ok((
            StateVector {
                position,
                velocity: Vector3::zeros(),
            },
            light_time,
        ))
    }
}

/// Parse the `2024 Jun 21 12:00:00` form produced by
/// [`crate::format_spice_utc`].
fn parse_spice_utc(utc: &str) -> Option<OffsetDateTime> {
    let mut fields = utc.split_whitespace();
    let year: i32 = fields.next()?.parse().ok()?;
    let month = month_from_abbreviation(fields.next()?)?;
    let day: u8 = fields.next()?.parse().ok()?;
    let mut clock = fields.next()?.split(':');
    let hour: u8 = clock.next()?.parse().ok()?;
    let minute: u8 = clock.next()?.parse().ok()?;
    let second: u8 = clock.next()?.parse().ok()?;
    if fields.next().is_some() || clock.next().is_some() {
        return None;
    }
    let date = Date::from_calendar_date(year, month, day).ok()?;
    let time = Time::from_hms(hour, minute, second).ok()?;
    Some(PrimitiveDateTime::new(date, time).assume_utc())
}

fn month_from_abbreviation(abbrev: &str) -> Option<Month> {
    let month = match abbrev {
        "Jan" => Month::January,
        "Feb" => Month::February,
        "Mar" => Month::March,
        "Apr" => Month::April,
        "May" => Month::May,
        "Jun" => Month::June,
        "Jul" => Month::July,
        "Aug" => Month::August,
        "Sep" => Month::September,
        "Oct" => Month::October,
        "Nov" => Month::November,
        "Dec" => Month::December,
        _ => return None,
    };
    Some(month)
}
