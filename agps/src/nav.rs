//! Navigation dataset records (RINEX NAV, as exposed by georinex-like
//! readers) to [Ephemeris].

use alloc::string::{String, ToString};
use core::{f64::consts::PI, fmt};

use crate::{
    constants::{
        GPS_SV_PREFIX, NAV_RECORD_TYPE, NOMINAL_FIT_INTERVAL_CODE, URA_INDEX_MAX,
        URA_THRESHOLDS_M,
    },
    error::ConversionError,
    fixed::FixedField,
    Ephemeris, GpsTime,
};

/// Numeric columns of a GPS navigation record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavField {
    SvAcc,
    FitIntvl,
    Health,
    Tgd,
    Iodc,
    SvClockDriftRate,
    SvClockDrift,
    SvClockBias,
    Crs,
    DeltaN,
    M0,
    Cuc,
    Cus,
    Eccentricity,
    SqrtA,
    Toe,
    Cic,
    Omega0,
    Cis,
    Crc,
    Io,
    Omega,
    OmegaDot,
    Idot,
}

impl NavField {
    /// Column label used by RINEX readers
    pub const fn label(self) -> &'static str {
        match self {
            NavField::SvAcc => "SVacc",
            NavField::FitIntvl => "FitIntvl",
            NavField::Health => "health",
            NavField::Tgd => "TGD",
            NavField::Iodc => "IODC",
            NavField::SvClockDriftRate => "SVclockDriftRate",
            NavField::SvClockDrift => "SVclockDrift",
            NavField::SvClockBias => "SVclockBias",
            NavField::Crs => "Crs",
            NavField::DeltaN => "DeltaN",
            NavField::M0 => "M0",
            NavField::Cuc => "Cuc",
            NavField::Cus => "Cus",
            NavField::Eccentricity => "Eccentricity",
            NavField::SqrtA => "sqrtA",
            NavField::Toe => "Toe",
            NavField::Cic => "Cic",
            NavField::Omega0 => "Omega0",
            NavField::Cis => "Cis",
            NavField::Crc => "Crc",
            NavField::Io => "Io",
            NavField::Omega => "omega",
            NavField::OmegaDot => "OmegaDot",
            NavField::Idot => "IDOT",
        }
    }
}

impl fmt::Display for NavField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One satellite broadcast from an external navigation dataset.
pub trait NavRecord {
    /// Satellite identifier, `Gnn` for GPS
    fn sv(&self) -> &str;

    /// Record type discriminator, `"nav"` for navigation messages
    fn record_type(&self) -> &str;

    /// Record epoch, nanoseconds since the Unix epoch
    fn time_ns(&self) -> i64;

    /// Value of a numeric column, `None` when the column is absent
    fn value(&self, field: NavField) -> Option<f64>;
}

/// Owned [NavRecord], missing columns are `None`.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RinexNavRecord {
    pub sv: String,
    #[cfg_attr(feature = "serde", serde(rename = "rinextype"))]
    pub record_type: String,
    #[cfg_attr(feature = "serde", serde(rename = "time"))]
    pub time_ns: i64,
    #[cfg_attr(feature = "serde", serde(rename = "SVacc", default))]
    pub sv_acc: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "FitIntvl", default))]
    pub fit_intvl: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub health: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "TGD", default))]
    pub tgd: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "IODC", default))]
    pub iodc: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "SVclockDriftRate", default))]
    pub sv_clock_drift_rate: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "SVclockDrift", default))]
    pub sv_clock_drift: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "SVclockBias", default))]
    pub sv_clock_bias: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "Crs", default))]
    pub crs: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "DeltaN", default))]
    pub delta_n: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "M0", default))]
    pub m0: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "Cuc", default))]
    pub cuc: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "Cus", default))]
    pub cus: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "Eccentricity", default))]
    pub eccentricity: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "sqrtA", default))]
    pub sqrt_a: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "Toe", default))]
    pub toe: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "Cic", default))]
    pub cic: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "Omega0", default))]
    pub omega0: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "Cis", default))]
    pub cis: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "Crc", default))]
    pub crc: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "Io", default))]
    pub io: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub omega: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "OmegaDot", default))]
    pub omega_dot: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "IDOT", default))]
    pub idot: Option<f64>,
}

impl NavRecord for RinexNavRecord {
    fn sv(&self) -> &str {
        &self.sv
    }

    fn record_type(&self) -> &str {
        &self.record_type
    }

    fn time_ns(&self) -> i64 {
        self.time_ns
    }

    fn value(&self, field: NavField) -> Option<f64> {
        match field {
            NavField::SvAcc => self.sv_acc,
            NavField::FitIntvl => self.fit_intvl,
            NavField::Health => self.health,
            NavField::Tgd => self.tgd,
            NavField::Iodc => self.iodc,
            NavField::SvClockDriftRate => self.sv_clock_drift_rate,
            NavField::SvClockDrift => self.sv_clock_drift,
            NavField::SvClockBias => self.sv_clock_bias,
            NavField::Crs => self.crs,
            NavField::DeltaN => self.delta_n,
            NavField::M0 => self.m0,
            NavField::Cuc => self.cuc,
            NavField::Cus => self.cus,
            NavField::Eccentricity => self.eccentricity,
            NavField::SqrtA => self.sqrt_a,
            NavField::Toe => self.toe,
            NavField::Cic => self.cic,
            NavField::Omega0 => self.omega0,
            NavField::Cis => self.cis,
            NavField::Crc => self.crc,
            NavField::Io => self.io,
            NavField::Omega => self.omega,
            NavField::OmegaDot => self.omega_dot,
            NavField::Idot => self.idot,
        }
    }
}

/// Parses a `Gnn` satellite identifier into its PRN.
pub fn parse_svid(sv: &str) -> Result<u8, ConversionError> {
    let invalid = || ConversionError::InvalidIdentifier(sv.to_string());
    let digits = sv.strip_prefix(GPS_SV_PREFIX).ok_or_else(invalid)?;
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    digits.parse().map_err(|_| invalid())
}

/// Index of the first URA bound that is not below `accuracy_m`,
/// [URA_INDEX_MAX] when `accuracy_m` exceeds every bound.
pub fn ura_index(accuracy_m: f64) -> u8 {
    URA_THRESHOLDS_M
        .iter()
        .position(|&th| accuracy_m <= th)
        .map_or(URA_INDEX_MAX, |i| i as u8)
}

/// Curve fit flag: only the nominal 4 hour interval clears it.
pub fn fit_interval_flag(code: f64) -> bool {
    num_traits::Float::trunc(code) as i64 != NOMINAL_FIT_INTERVAL_CODE
}

fn value<R: NavRecord + ?Sized>(r: &R, field: NavField) -> Result<f64, ConversionError> {
    match r.value(field) {
        Some(v) if !v.is_nan() => Ok(v),
        _ => Err(ConversionError::MissingValue(field.label())),
    }
}

/// Integer part of a column, range checked into `T`
fn integer<R: NavRecord + ?Sized, T: TryFrom<i64>>(
    r: &R,
    field: NavField,
    min: i64,
    max: i64,
) -> Result<T, ConversionError> {
    let v = num_traits::Float::trunc(value(r, field)?);
    FixedField::bounded(field.label(), 1.0, min, max).encode(v)
}

fn semicircles<R: NavRecord + ?Sized>(r: &R, field: NavField) -> Result<f64, ConversionError> {
    Ok(value(r, field)? / PI)
}

/// Reception epoch of `r` in the GPS timescale. Epochs before the GPS
/// epoch are rejected.
pub fn record_time<R: NavRecord + ?Sized>(r: &R) -> Result<GpsTime, ConversionError> {
    let ns = r.time_ns();
    let t = GpsTime::from_unix_nanos(ns, 0);
    if t.week() < 0 {
        return Err(ConversionError::InvalidTimestamp(ns));
    }
    Ok(t)
}

/// Builds the canonical [Ephemeris] of a navigation record.
///
/// Radian angles are converted to semicircles, `toc` is the time of week
/// of the record epoch, which is also kept as `reference_time`.
pub fn ephemeris_from_nav<R: NavRecord + ?Sized>(r: &R) -> Result<Ephemeris, ConversionError> {
    if r.record_type() != NAV_RECORD_TYPE {
        return Err(ConversionError::UnsupportedRecordType(
            r.record_type().to_string(),
        ));
    }
    let svid = parse_svid(r.sv())?;
    let toc = record_time(r)?;
    log::debug!("{}: record epoch {}", r.sv(), toc);

    Ok(Ephemeris {
        svid,
        fit_interval: fit_interval_flag(value(r, NavField::FitIntvl)?),
        ura_index: ura_index(value(r, NavField::SvAcc)?),
        sv_health: integer(r, NavField::Health, 0, i64::from(u8::MAX))?,
        tgd: value(r, NavField::Tgd)?,
        iodc: integer(r, NavField::Iodc, 0, i64::from(u16::MAX))?,
        toc: toc.tow(),
        af2: value(r, NavField::SvClockDriftRate)?,
        af1: value(r, NavField::SvClockDrift)?,
        af0: value(r, NavField::SvClockBias)?,
        crs: value(r, NavField::Crs)?,
        delta_n: semicircles(r, NavField::DeltaN)?,
        m0: semicircles(r, NavField::M0)?,
        cuc: value(r, NavField::Cuc)?,
        cus: value(r, NavField::Cus)?,
        e: value(r, NavField::Eccentricity)?,
        sqrt_a: value(r, NavField::SqrtA)?,
        toe: integer(r, NavField::Toe, 0, GpsTime::SEC_PER_WEEK - 1)?,
        cic: value(r, NavField::Cic)?,
        omega0: semicircles(r, NavField::Omega0)?,
        cis: value(r, NavField::Cis)?,
        crc: value(r, NavField::Crc)?,
        i0: semicircles(r, NavField::Io)?,
        omega: semicircles(r, NavField::Omega)?,
        omega_dot: semicircles(r, NavField::OmegaDot)?,
        idot: semicircles(r, NavField::Idot)?,
        reference_time: Some(toc),
    })
}

impl TryFrom<&RinexNavRecord> for Ephemeris {
    type Error = ConversionError;

    fn try_from(r: &RinexNavRecord) -> Result<Self, Self::Error> {
        ephemeris_from_nav(r)
    }
}
