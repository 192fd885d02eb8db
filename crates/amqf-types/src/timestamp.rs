use std::fmt;

use chrono::{DateTime, Datelike, SecondsFormat, Timelike, Utc, Weekday};

/// A `'T'` field value: whole POSIX seconds, resolved to a UTC calendar
/// date and time of day.
///
/// The raw seconds are kept next to the calendar form so a value can be
/// re-encoded without going back through `chrono`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp {
  seconds: u64,
  utc: DateTime<Utc>,
}

impl Timestamp {
  /// Build a timestamp from seconds since the Unix epoch.
  ///
  /// Returns `None` when the value lies outside the range `chrono` can
  /// represent as a calendar date (roughly year ±262 000).
  #[must_use]
  pub fn from_unix_seconds(seconds: u64) -> Option<Self> {
    let signed = i64::try_from(seconds).ok()?;
    let utc = DateTime::from_timestamp(signed, 0)?;
    Some(Self { seconds, utc })
  }

  #[must_use]
  pub fn unix_seconds(self) -> u64 {
    self.seconds
  }

  #[must_use]
  pub fn datetime(self) -> DateTime<Utc> {
    self.utc
  }

  #[must_use]
  pub fn year(self) -> i32 {
    self.utc.year()
  }

  /// Month of the year, 1-based.
  #[must_use]
  pub fn month(self) -> u32 {
    self.utc.month()
  }

  /// Day of the month, 1-based.
  #[must_use]
  pub fn day(self) -> u32 {
    self.utc.day()
  }

  #[must_use]
  pub fn hour(self) -> u32 {
    self.utc.hour()
  }

  #[must_use]
  pub fn minute(self) -> u32 {
    self.utc.minute()
  }

  #[must_use]
  pub fn second(self) -> u32 {
    self.utc.second()
  }

  #[must_use]
  pub fn weekday(self) -> Weekday {
    self.utc.weekday()
  }

  /// Day of the year, 1-based.
  #[must_use]
  pub fn ordinal(self) -> u32 {
    self.utc.ordinal()
  }
}

impl fmt::Display for Timestamp {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.utc.to_rfc3339_opts(SecondsFormat::Secs, true))
  }
}
