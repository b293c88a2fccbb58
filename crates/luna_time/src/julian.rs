//! Julian Date ↔ proleptic Gregorian calendar conversions.
//!
//! Both directions use the Gregorian correction for every date, so the
//! pair is self-consistent for any year after -4712 (the start of the
//! Julian Day count). No Julian-calendar switchover is applied.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a calendar date to a Julian Date.
///
/// `day_frac` is the day of the month with the time of day folded in as a
/// fraction (e.g. `6.5` is noon on the 6th).
///
/// The fields are not range-checked: `month = 13` yields a well-defined
/// but meaningless result.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    // January and February count as months 13 and 14 of the previous year.
    let (y, m) = if month <= 2 {
        (i64::from(year) - 1, i64::from(month) + 12)
    } else {
        (i64::from(year), i64::from(month))
    };

    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);

    (365.25 * (y + 4716) as f64).floor() + (30.6001 * (m + 1) as f64).floor() + day_frac
        + b as f64
        - 1524.5
}

/// Convert a Julian Date back to `(year, month, day_frac)`.
///
/// Inverse of [`calendar_to_jd`].
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_frac)
}
