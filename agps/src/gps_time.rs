use chrono::{prelude::*, TimeDelta};
use core::fmt;

use crate::{
    constants::{GPS_EPOCH_UNIX_SECONDS, NANOS_PER_SEC, SEC_PER_WEEK},
    error::DateTimeError,
};

/// GPS time as week number and time of week (s).
///
/// `tow` is always normalized into `0..604800`, any overflow is carried
/// into `week`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GpsTimeRepr", into = "GpsTimeRepr"))]
pub struct GpsTime {
    week: i64,
    tow: u32,
}

impl GpsTime {
    pub const SEC_PER_WEEK: i64 = SEC_PER_WEEK;

    /// Builds a normalized [GpsTime], `tow` may exceed one week or be negative.
    ///
    /// Saturates at the ends of the `i64` seconds range, see
    /// [GpsTime::checked_new].
    pub fn new(week: i64, tow: i64) -> Self {
        Self::from_seconds(week.saturating_mul(SEC_PER_WEEK).saturating_add(tow))
    }

    /// [GpsTime::new], or `None` when the total seconds overflow `i64`.
    pub fn checked_new(week: i64, tow: i64) -> Option<Self> {
        week.checked_mul(SEC_PER_WEEK)?
            .checked_add(tow)
            .map(Self::from_seconds)
    }

    pub fn week(&self) -> i64 {
        self.week
    }

    /// Time of week (s)
    pub fn tow(&self) -> u32 {
        self.tow
    }

    /// Seconds elapsed since the GPS epoch
    pub fn seconds(&self) -> i64 {
        self.week
            .saturating_mul(SEC_PER_WEEK)
            .saturating_add(i64::from(self.tow))
    }

    /// Splits `seconds` since the GPS epoch using floor semantics, so that
    /// negative inputs still yield a valid time of week.
    pub fn from_seconds(seconds: i64) -> Self {
        Self {
            week: seconds.div_euclid(SEC_PER_WEEK),
            tow: seconds.rem_euclid(SEC_PER_WEEK) as u32,
        }
    }

    /// GPS epoch, 1980-01-06T00:00:00 UTC
    pub fn epoch() -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(GPS_EPOCH_UNIX_SECONDS)
    }

    /// Converts to a calendar date. `leaps` is the GPS - UTC leap second
    /// offset to remove, use 0 to stay in the GPS timescale.
    pub fn to_datetime(&self, leaps: i64) -> Result<DateTime<Utc>, DateTimeError> {
        let unix = self
            .seconds()
            .checked_sub(leaps)
            .and_then(|s| s.checked_add(GPS_EPOCH_UNIX_SECONDS))
            .ok_or(DateTimeError::OutOfRange)?;
        DateTime::<Utc>::from_timestamp(unix, 0).ok_or(DateTimeError::OutOfRange)
    }

    /// Inverse of [GpsTime::to_datetime]. Sub-second precision is dropped:
    /// the offset from the GPS epoch is truncated toward zero, so half a
    /// second before the epoch is still week 0, tow 0.
    pub fn from_datetime<Tz: TimeZone>(t: &DateTime<Tz>, leaps: i64) -> Self {
        let since_epoch = t
            .with_timezone(&Utc)
            .signed_duration_since(Self::epoch())
            .num_seconds();
        Self::from_seconds(since_epoch.saturating_add(leaps))
    }

    /// Builds a [GpsTime] from nanoseconds since the Unix epoch, truncating
    /// like [GpsTime::from_datetime].
    pub fn from_unix_nanos(nanos: i64, leaps: i64) -> Self {
        let epoch_ns = i128::from(GPS_EPOCH_UNIX_SECONDS) * i128::from(NANOS_PER_SEC);
        let since_epoch = (i128::from(nanos) - epoch_ns) / i128::from(NANOS_PER_SEC);
        // |since_epoch| < 2^63 / 10^9, always fits
        Self::from_seconds((since_epoch as i64).saturating_add(leaps))
    }

    /// Resolves this time of week into the GPS week containing `base`.
    ///
    /// Only `self.tow` is used. The result always lies in the same week as
    /// `base`, even when `tow` is closer to an occurrence in the previous
    /// or next week.
    pub fn rebase(&self, base: GpsTime) -> Self {
        let rebased = Self {
            week: base.week,
            tow: self.tow,
        };
        log::trace!("rebased tow {} on {} to {}", self.tow, base, rebased);
        rebased
    }

    /// [GpsTime::rebase] against the current system time.
    #[cfg(feature = "std")]
    pub fn rebase_now(&self) -> Self {
        self.rebase(Self::now())
    }

    /// Current system time in the GPS timescale, without leap seconds.
    #[cfg(feature = "std")]
    pub fn now() -> Self {
        Self::from_datetime(&Utc::now(), 0)
    }
}

// Deserialized values go through the normalizing constructor
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GpsTimeRepr {
    week: i64,
    tow: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<GpsTimeRepr> for GpsTime {
    type Error = DateTimeError;

    fn try_from(repr: GpsTimeRepr) -> Result<Self, Self::Error> {
        GpsTime::checked_new(repr.week, repr.tow).ok_or(DateTimeError::OutOfRange)
    }
}

#[cfg(feature = "serde")]
impl From<GpsTime> for GpsTimeRepr {
    fn from(t: GpsTime) -> Self {
        GpsTimeRepr {
            week: t.week,
            tow: i64::from(t.tow),
        }
    }
}

impl fmt::Display for GpsTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:06}", self.week, self.tow)
    }
}
