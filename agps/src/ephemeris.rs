use crate::GpsTime;

/// Broadcast ephemeris of one GPS satellite, in physical units.
///
/// Angles are in semicircles (1.0 = π rad). `reference_time` only records
/// the epoch that was used to resolve `toc`/`toe` and takes no part in
/// equality.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ephemeris {
    /// Satellite PRN, 1..=32
    pub svid: u8,

    /// Curve fit interval flag, `false` for the nominal 4 hour fit
    pub fit_interval: bool,

    /// URA index, 0..=15
    pub ura_index: u8,

    /// Raw SV health code
    pub sv_health: u8,

    /// Group delay (s)
    pub tgd: f64,

    /// Issue of data, clock
    pub iodc: u16,

    /// Clock reference time of week (s)
    pub toc: u32,

    /// Clock drift rate (s/s²)
    pub af2: f64,

    /// Clock drift (s/s)
    pub af1: f64,

    /// Clock bias (s)
    pub af0: f64,

    /// Orbit radius sine harmonic correction (m)
    pub crs: f64,

    /// Mean motion difference (semicircles/s)
    pub delta_n: f64,

    /// Mean anomaly at reference time (semicircles)
    pub m0: f64,

    /// Argument of latitude cosine harmonic correction (rad)
    pub cuc: f64,

    /// Argument of latitude sine harmonic correction (rad)
    pub cus: f64,

    /// Eccentricity
    pub e: f64,

    /// Square root of the semi-major axis (√m)
    pub sqrt_a: f64,

    /// Ephemeris reference time of week (s)
    pub toe: u32,

    /// Inclination cosine harmonic correction (rad)
    pub cic: f64,

    /// Longitude of ascending node at weekly epoch (semicircles)
    pub omega0: f64,

    /// Inclination sine harmonic correction (rad)
    pub cis: f64,

    /// Orbit radius cosine harmonic correction (m)
    pub crc: f64,

    /// Inclination at reference time (semicircles)
    pub i0: f64,

    /// Argument of perigee (semicircles)
    pub omega: f64,

    /// Rate of right ascension (semicircles/s)
    pub omega_dot: f64,

    /// Rate of inclination (semicircles/s)
    pub idot: f64,

    /// Epoch used to resolve `toc` and `toe`
    #[cfg_attr(feature = "serde", serde(default))]
    pub reference_time: Option<GpsTime>,
}

impl Ephemeris {
    /// Copy of this ephemeris tagged with `t` as its reference time.
    pub fn with_reference_time(self, t: GpsTime) -> Self {
        Self {
            reference_time: Some(t),
            ..self
        }
    }

    /// Clock reference time placed in the week of `reference_time`, if any.
    pub fn toc_time(&self) -> Option<GpsTime> {
        self.reference_time
            .map(|base| GpsTime::new(0, i64::from(self.toc)).rebase(base))
    }

    /// Ephemeris reference time placed in the week of `reference_time`, if any.
    pub fn toe_time(&self) -> Option<GpsTime> {
        self.reference_time
            .map(|base| GpsTime::new(0, i64::from(self.toe)).rebase(base))
    }
}

impl PartialEq for Ephemeris {
    fn eq(&self, other: &Self) -> bool {
        self.svid == other.svid
            && self.fit_interval == other.fit_interval
            && self.ura_index == other.ura_index
            && self.sv_health == other.sv_health
            && self.tgd == other.tgd
            && self.iodc == other.iodc
            && self.toc == other.toc
            && self.af2 == other.af2
            && self.af1 == other.af1
            && self.af0 == other.af0
            && self.crs == other.crs
            && self.delta_n == other.delta_n
            && self.m0 == other.m0
            && self.cuc == other.cuc
            && self.cus == other.cus
            && self.e == other.e
            && self.sqrt_a == other.sqrt_a
            && self.toe == other.toe
            && self.cic == other.cic
            && self.omega0 == other.omega0
            && self.cis == other.cis
            && self.crc == other.crc
            && self.i0 == other.i0
            && self.omega == other.omega
            && self.omega_dot == other.omega_dot
            && self.idot == other.idot
    }
}
