//! Session end times and overstay calculation for barcode-tracked visits.
//!
//! A barcode session is scheduled to end at a wall-clock hour/minute. Staff may
//! append extensions that push the end back; only the most recently appended
//! extension counts. Overstay is the number of whole minutes by which the actual
//! completion (or, for a running session, the current time) is past that end,
//! never negative.
//!
//! ## Time of day
//!
//! Scheduled ends are stored as hour/minute only and are combined with the
//! clock's current date when compared. Sessions that run past midnight are not
//! modelled.
//!
//! ## Examples
//!
//! ```rust
//! use playdesk::libs::overstay::{compute_end_time, overstay_minutes, FixedClock, SessionRecord};
//! use chrono::NaiveDate;
//!
//! assert_eq!(compute_end_time("2024-05-01 13:30", 90.0, 15.0).unwrap(), "15:15");
//!
//! let now = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(14, 25, 0).unwrap();
//! let record = SessionRecord::ending_at(14, 0);
//! assert_eq!(overstay_minutes(&record, &FixedClock(now)).unwrap(), 25);
//! ```

use crate::libs::error::{PlaydeskError, Result};
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Formats accepted for start times and completion timestamps, besides RFC 3339.
const NAIVE_FORMATS: [&str; 4] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Source of "now" for overstay checks.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// An extension appended to a session, optionally moving its end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    #[serde(default, alias = "end_hour")]
    pub end_hour: Option<u32>,
    #[serde(default, alias = "end_min")]
    pub end_min: Option<u32>,
}

/// The time-tracking part of a barcode/session row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(default, alias = "end_hour")]
    pub end_hour: Option<u32>,
    #[serde(default, alias = "end_min")]
    pub end_min: Option<u32>,
    /// In insertion order; the last one is authoritative.
    #[serde(default)]
    pub extensions: Vec<Extension>,
    #[serde(default, alias = "completed_at", deserialize_with = "deserialize_timestamp_opt")]
    pub completed_at: Option<NaiveDateTime>,
}

impl SessionRecord {
    pub fn ending_at(hour: u32, minute: u32) -> Self {
        Self {
            end_hour: Some(hour),
            end_min: Some(minute),
            ..Default::default()
        }
    }

    pub fn with_extension(mut self, end_hour: Option<u32>, end_min: Option<u32>) -> Self {
        self.extensions.push(Extension { end_hour, end_min });
        self
    }

    pub fn completed(mut self, at: NaiveDateTime) -> Self {
        self.completed_at = Some(at);
        self
    }
}

/// Effective scheduled end of a session, as a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledEnd {
    pub hour: u32,
    pub minute: u32,
}

impl ScheduledEnd {
    /// Materializes the end on a concrete calendar day.
    pub fn on(&self, date: NaiveDate) -> Result<NaiveDateTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
            .map(|time| date.and_time(time))
            .ok_or_else(|| PlaydeskError::InvalidInput(format!("scheduled end {:02}:{:02} is not a valid time of day", self.hour, self.minute)))
    }
}

/// Live status of a session against its scheduled end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverstayStatus {
    /// Still running, not yet past the scheduled end.
    OnTime,
    /// Still running and past the scheduled end by this many minutes.
    Overstayed(i64),
    /// Finished; `overstay` is 0 when it finished in time.
    Completed { overstay: i64 },
}

/// Parses a start time or timestamp into local wall-clock time.
///
/// RFC 3339 values carrying an offset are converted to the local zone; naive
/// values are taken as already local. A bare date means midnight.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Local).naive_local());
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| PlaydeskError::InvalidInput(format!("'{}' is not a valid date/time", value)))
}

/// Parses a minute count typed into a form field.
pub fn parse_minutes(value: &str) -> Result<f64> {
    let minutes: f64 = value
        .trim()
        .parse()
        .map_err(|_| PlaydeskError::InvalidInput(format!("'{}' is not a number of minutes", value)))?;
    check_minutes("duration", minutes)?;
    Ok(minutes)
}

fn check_minutes(name: &str, minutes: f64) -> Result<()> {
    if !minutes.is_finite() {
        return Err(PlaydeskError::InvalidInput(format!("{} must be a finite number of minutes", name)));
    }
    if minutes < 0.0 {
        return Err(PlaydeskError::InvalidInput(format!("{} must not be negative", name)));
    }
    Ok(())
}

/// Instant at which a session started at `start` ends after
/// `duration_minutes + extra_minutes`.
pub fn compute_end_instant(start: &str, duration_minutes: f64, extra_minutes: f64) -> Result<NaiveDateTime> {
    let start = parse_timestamp(start)?;
    check_minutes("duration", duration_minutes)?;
    check_minutes("extra time", extra_minutes)?;

    let out_of_range = || PlaydeskError::InvalidInput("end time is out of range".to_string());
    let seconds = ((duration_minutes + extra_minutes) * 60.0).round();
    if seconds >= i64::MAX as f64 {
        return Err(out_of_range());
    }
    let offset = Duration::try_seconds(seconds as i64).ok_or_else(out_of_range)?;
    start.checked_add_signed(offset).ok_or_else(out_of_range)
}

/// End time as an `HH:MM` string, 24-hour clock.
pub fn compute_end_time(start: &str, duration_minutes: f64, extra_minutes: f64) -> Result<String> {
    Ok(compute_end_instant(start, duration_minutes, extra_minutes)?.format("%H:%M").to_string())
}

/// Scheduled end after applying the last extension, field by field.
pub fn effective_scheduled_end(record: &SessionRecord) -> ScheduledEnd {
    let (hour, minute) = match record.extensions.last() {
        Some(last) => (last.end_hour.or(record.end_hour), last.end_min.or(record.end_min)),
        None => (record.end_hour, record.end_min),
    };

    ScheduledEnd {
        hour: hour.unwrap_or(0),
        minute: minute.unwrap_or(0),
    }
}

/// Whole minutes past the scheduled end, floored at zero.
///
/// Compares against `completed_at` when the session is finished, otherwise
/// against `clock.now()`.
pub fn overstay_minutes(record: &SessionRecord, clock: &impl Clock) -> Result<i64> {
    let scheduled = effective_scheduled_end(record).on(clock.today())?;
    let compare = record.completed_at.unwrap_or_else(|| clock.now());

    if compare <= scheduled {
        return Ok(0);
    }
    Ok((compare - scheduled).num_minutes())
}

pub fn overstay_status(record: &SessionRecord, clock: &impl Clock) -> Result<OverstayStatus> {
    let minutes = overstay_minutes(record, clock)?;
    Ok(match (record.completed_at, minutes) {
        (Some(_), overstay) => OverstayStatus::Completed { overstay },
        (None, 0) => OverstayStatus::OnTime,
        (None, minutes) => OverstayStatus::Overstayed(minutes),
    })
}

fn deserialize_timestamp_opt<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_timestamp(value).map(Some).map_err(serde::de::Error::custom),
    }
}
