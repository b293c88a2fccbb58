//! Civil calendar date/time with sub-second precision.
//!
//! `CivilTime` holds calendar fields exactly as the caller reads them on
//! their own clock. No zone or calendar conversion happens here: a local
//! reading stays local, a UTC reading stays UTC.

use std::str::FromStr;

use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Timelike, Utc};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};

/// Calendar date and time of day, in whatever zone the caller intends.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of the given date.
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Capture the fields of a chrono timestamp as seen in its own zone.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self::from(dt.naive_local())
    }

    /// Current wall-clock reading in the local zone.
    pub fn now_local() -> Self {
        Self::from_datetime(&Local::now())
    }

    /// Current wall-clock reading in UTC.
    pub fn now_utc() -> Self {
        Self::from_datetime(&Utc::now())
    }

    /// Fraction of the day elapsed at this time of day.
    pub fn day_fraction(&self) -> f64 {
        self.hour as f64 / 24.0 + self.minute as f64 / 1440.0 + self.second / SECONDS_PER_DAY
    }

    /// Continuous Julian Day; the fractional part encodes the time of day.
    ///
    /// Out-of-range fields are not rejected (garbage in, garbage out).
    pub fn julian_day(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64 + self.day_fraction())
    }

    /// Convert a Julian Day back to calendar fields.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * SECONDS_PER_DAY;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Shift by a (possibly fractional, possibly negative) number of days.
    pub fn add_days(&self, days: f64) -> Self {
        Self::from_jd(self.julian_day() + days)
    }
}

impl From<NaiveDateTime> for CivilTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + dt.nanosecond() as f64 / 1e9,
        }
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

/// Accepts `YYYY-MM-DDThh:mm:ss[.fff][Z]`, `YYYY-MM-DD hh:mm[:ss]` and a bare
/// `YYYY-MM-DD` (midnight). A leading `-` marks a year before year 0.
impl FromStr for CivilTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_suffix('Z').unwrap_or(s);
        let (date, time) = match s.split_once(['T', ' ']) {
            Some((date, time)) => (date, Some(time)),
            None => (s, None),
        };

        let (year, month, day) = parse_date(date)?;
        let (hour, minute, second) = match time {
            Some(t) => parse_time(t)?,
            None => (0, 0, 0.0),
        };
        Ok(Self::new(year, month, day, hour, minute, second))
    }
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), TimeError> {
    let (sign, body) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s),
    };
    let parts: Vec<&str> = body.split('-').collect();
    if parts.len() != 3 {
        return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s}")));
    }
    let year: i32 = parts[0].parse()?;
    let month: u32 = parts[1].parse()?;
    let day: u32 = parts[2].parse()?;
    Ok((sign * year, month, day))
}

fn parse_time(s: &str) -> Result<(u32, u32, f64), TimeError> {
    let parts: Vec<&str> = s.split(':').collect();
    let (hour, minute, second) = match parts.as_slice() {
        [h, m] => (h.parse::<u32>()?, m.parse::<u32>()?, 0.0),
        [h, m, sec] => (h.parse::<u32>()?, m.parse::<u32>()?, sec.parse::<f64>()?),
        _ => return Err(TimeError::Parse(format!("expected hh:mm[:ss], got {s}"))),
    };
    if !second.is_finite() {
        return Err(TimeError::NonFinite("second"));
    }
    Ok((hour, minute, second))
}
