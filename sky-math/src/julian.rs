use time::OffsetDateTime;

/// Julian date of a civil UTC instant.
///
/// Standard calendar formula; January and February carry into month 13/14
/// of the previous year.
pub fn julian_date(utc: OffsetDateTime) -> f64 {
    let mut year = utc.year() as f64;
    let mut month = u8::from(utc.month()) as f64;
    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }

    let century = (year / 100.0).floor();
    let gregorian = 2.0 - century + (century / 4.0).floor();

    let day_fraction = (utc.hour() as f64
        + utc.minute() as f64 / 60.0
        + (utc.second() as f64 + utc.nanosecond() as f64 * 1e-9) / 3600.0)
        / 24.0;

    (365.25 * (year + 4716.0)).floor()
        + (30.6001 * (month + 1.0)).floor()
        + utc.day() as f64
        + gregorian
        - 1524.5
        + day_fraction
}
