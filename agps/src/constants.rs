/// Seconds in one GPS week
pub const SEC_PER_WEEK: i64 = 3600 * 24 * 7;

/// GPS epoch (1980-01-06T00:00:00 UTC) as seconds since the Unix epoch
pub const GPS_EPOCH_UNIX_SECONDS: i64 = 315_964_800;

pub(crate) const NANOS_PER_SEC: i64 = 1_000_000_000;

/// `toc` and `toe` travel in units of 2^4 seconds
pub const TOW_UNIT_SECONDS: u32 = 16;

/// Largest encodable `toc`/`toe` field, (604800 - 16) / 16
pub const TOW_FIELD_MAX: i64 = 37799;

pub const P2_M5: f64 = 1.0 / (1u64 << 5) as f64;
pub const P2_M19: f64 = 1.0 / (1u64 << 19) as f64;
pub const P2_M29: f64 = 1.0 / (1u64 << 29) as f64;
pub const P2_M31: f64 = 1.0 / (1u64 << 31) as f64;
pub const P2_M33: f64 = 1.0 / (1u64 << 33) as f64;
pub const P2_M43: f64 = 1.0 / (1u64 << 43) as f64;
pub const P2_M55: f64 = 1.0 / (1u64 << 55) as f64;

/// Upper URA bounds in meters for indices 0..=14, ascending.
/// Anything above the last bound maps to index 15.
pub const URA_THRESHOLDS_M: [f64; 15] = [
    2.4, 3.4, 4.85, 6.85, 9.65, 13.65, 24.0, 48.0, 96.0, 192.0, 384.0, 768.0, 1536.0, 3072.0,
    6144.0,
];

pub const URA_INDEX_MAX: u8 = 15;

/// `FitIntvl` value (hours) that marks the nominal 4 hour curve fit
pub(crate) const NOMINAL_FIT_INTERVAL_CODE: i64 = 4;

pub(crate) const GPS_SV_PREFIX: char = 'G';
pub(crate) const NAV_RECORD_TYPE: &str = "nav";
