use super::{MemWriter, WireStructMeta};
use crate::{
    constants::{
        P2_M19, P2_M29, P2_M31, P2_M33, P2_M43, P2_M5, P2_M55, TOW_FIELD_MAX, TOW_UNIT_SECONDS,
        URA_INDEX_MAX,
    },
    error::{ConversionError, MemWriterError, ParserError},
    fixed::FixedField,
    Ephemeris,
};

const SV_ID: FixedField = FixedField::bounded("sv_id", 1.0, 1, 32);
const HEALTH: FixedField = FixedField::unsigned("health", 1.0, 8);
const IODC: FixedField = FixedField::unsigned("iodc", 1.0, 11);
const TOC: FixedField = FixedField::bounded("toc", TOW_UNIT_SECONDS as f64, 0, TOW_FIELD_MAX);
const AF2: FixedField = FixedField::signed("af2", P2_M55, 8);
const AF1: FixedField = FixedField::signed("af1", P2_M43, 16);
const AF0: FixedField = FixedField::signed("af0", P2_M31, 22);
const TGD: FixedField = FixedField::signed("tgd", P2_M31, 8);
const URA: FixedField = FixedField::bounded("ura", 1.0, 0, URA_INDEX_MAX as i64);
const FIT_INT: FixedField = FixedField::bounded("fit_int", 1.0, 0, 1);
const TOE: FixedField = FixedField::bounded("toe", TOW_UNIT_SECONDS as f64, 0, TOW_FIELD_MAX);
const W: FixedField = FixedField::signed("w", P2_M31, 32);
const DELTA_N: FixedField = FixedField::signed("delta_n", P2_M43, 16);
const M0: FixedField = FixedField::signed("m0", P2_M31, 32);
const OMEGA_DOT: FixedField = FixedField::signed("omega_dot", P2_M43, 24);
const E: FixedField = FixedField::unsigned("e", P2_M33, 32);
const IDOT: FixedField = FixedField::signed("idot", P2_M43, 14);
const SQRT_A: FixedField = FixedField::unsigned("sqrt_a", P2_M19, 32);
const I0: FixedField = FixedField::signed("i0", P2_M31, 32);
const OMEGA0: FixedField = FixedField::signed("omega0", P2_M31, 32);
const CRS: FixedField = FixedField::signed("crs", P2_M5, 16);
const CIS: FixedField = FixedField::signed("cis", P2_M29, 16);
const CUS: FixedField = FixedField::signed("cus", P2_M29, 16);
const CRC: FixedField = FixedField::signed("crc", P2_M5, 16);
const CIC: FixedField = FixedField::signed("cic", P2_M29, 16);
const CUC: FixedField = FixedField::signed("cuc", P2_M29, 16);

const SV_ID_OFFSET: usize = 0;
const HEALTH_OFFSET: usize = 1;
const IODC_OFFSET: usize = 2;
const TOC_OFFSET: usize = 4;
const AF2_OFFSET: usize = 6;
const AF1_OFFSET: usize = 7;
const AF0_OFFSET: usize = 9;
const TGD_OFFSET: usize = 13;
const URA_OFFSET: usize = 14;
const FIT_INT_OFFSET: usize = 15;
const TOE_OFFSET: usize = 16;
const W_OFFSET: usize = 18;
const DELTA_N_OFFSET: usize = 22;
const M0_OFFSET: usize = 24;
const OMEGA_DOT_OFFSET: usize = 28;
const E_OFFSET: usize = 32;
const IDOT_OFFSET: usize = 36;
const SQRT_A_OFFSET: usize = 38;
const I0_OFFSET: usize = 42;
const OMEGA0_OFFSET: usize = 46;
const CRS_OFFSET: usize = 50;
const CIS_OFFSET: usize = 52;
const CUS_OFFSET: usize = 54;
const CRC_OFFSET: usize = 56;
const CIC_OFFSET: usize = 58;
const CUC_OFFSET: usize = 60;

/// A-GPS ephemeris assistance struct (`nrf_modem_gnss_agps_data_ephemeris`).
///
/// Fields hold the raw wire integers, in wire order. Use
/// [AgpsEph::try_from] to encode an [Ephemeris] and
/// [AgpsEph::to_ephemeris] to scale the integers back to physical units.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgpsEph {
    /// Satellite ID, 1..=32
    pub sv_id: u8,

    /// Satellite health
    pub health: u8,

    /// Issue of data, clock. 11 bits
    pub iodc: u16,

    /// Clock reference time of week. Scale factor 2^4 s, 0..=37799
    pub toc: u16,

    /// Clock drift rate. Scale factor 2^-55 s/s²
    pub af2: i8,

    /// Clock drift. Scale factor 2^-43 s/s
    pub af1: i16,

    /// Clock bias. Scale factor 2^-31 s, 22 bits
    pub af0: i32,

    /// Group delay. Scale factor 2^-31 s
    pub tgd: i8,

    /// URA index, 0..=15
    pub ura: u8,

    /// Curve fit interval indication, 0..=1
    pub fit_int: u8,

    /// Ephemeris reference time of week. Scale factor 2^4 s, 0..=37799
    pub toe: u16,

    /// Argument of perigee. Scale factor 2^-31 semicircles
    pub w: i32,

    /// Mean motion difference. Scale factor 2^-43 semicircles/s
    pub delta_n: i16,

    /// Mean anomaly at reference time. Scale factor 2^-31 semicircles
    pub m0: i32,

    /// Rate of right ascension. Scale factor 2^-43 semicircles/s, 24 bits
    pub omega_dot: i32,

    /// Eccentricity. Scale factor 2^-33
    pub e: u32,

    /// Rate of inclination. Scale factor 2^-43 semicircles/s, 14 bits
    pub idot: i16,

    /// Square root of semi-major axis. Scale factor 2^-19 √m
    pub sqrt_a: u32,

    /// Inclination at reference time. Scale factor 2^-31 semicircles
    pub i0: i32,

    /// Longitude of ascending node at weekly epoch. Scale factor 2^-31 semicircles
    pub omega0: i32,

    /// Orbit radius sine harmonic. Scale factor 2^-5 m
    pub crs: i16,

    /// Inclination sine harmonic. Scale factor 2^-29 rad
    pub cis: i16,

    /// Argument of latitude sine harmonic. Scale factor 2^-29 rad
    pub cus: i16,

    /// Orbit radius cosine harmonic. Scale factor 2^-5 m
    pub crc: i16,

    /// Inclination cosine harmonic. Scale factor 2^-29 rad
    pub cic: i16,

    /// Argument of latitude cosine harmonic. Scale factor 2^-29 rad
    pub cuc: i16,
}

impl WireStructMeta for AgpsEph {
    const NAME: &'static str = "AgpsEph";
    const LEN: usize = 62;
}

impl AgpsEph {
    pub const LEN: usize = <Self as WireStructMeta>::LEN;

    /// Unpacks raw integers, no scale factor is applied.
    pub fn parse(bytes: &[u8]) -> Result<Self, ParserError> {
        AgpsEphRef::new(bytes).map(|r| r.to_owned())
    }

    #[inline]
    pub fn into_bytes(self) -> [u8; Self::LEN] {
        let mut ret = [0u8; Self::LEN];
        ret[SV_ID_OFFSET] = self.sv_id;
        ret[HEALTH_OFFSET] = self.health;
        put(&mut ret, IODC_OFFSET, &self.iodc.to_le_bytes());
        put(&mut ret, TOC_OFFSET, &self.toc.to_le_bytes());
        put(&mut ret, AF2_OFFSET, &self.af2.to_le_bytes());
        put(&mut ret, AF1_OFFSET, &self.af1.to_le_bytes());
        put(&mut ret, AF0_OFFSET, &self.af0.to_le_bytes());
        put(&mut ret, TGD_OFFSET, &self.tgd.to_le_bytes());
        ret[URA_OFFSET] = self.ura;
        ret[FIT_INT_OFFSET] = self.fit_int;
        put(&mut ret, TOE_OFFSET, &self.toe.to_le_bytes());
        put(&mut ret, W_OFFSET, &self.w.to_le_bytes());
        put(&mut ret, DELTA_N_OFFSET, &self.delta_n.to_le_bytes());
        put(&mut ret, M0_OFFSET, &self.m0.to_le_bytes());
        put(&mut ret, OMEGA_DOT_OFFSET, &self.omega_dot.to_le_bytes());
        put(&mut ret, E_OFFSET, &self.e.to_le_bytes());
        put(&mut ret, IDOT_OFFSET, &self.idot.to_le_bytes());
        put(&mut ret, SQRT_A_OFFSET, &self.sqrt_a.to_le_bytes());
        put(&mut ret, I0_OFFSET, &self.i0.to_le_bytes());
        put(&mut ret, OMEGA0_OFFSET, &self.omega0.to_le_bytes());
        put(&mut ret, CRS_OFFSET, &self.crs.to_le_bytes());
        put(&mut ret, CIS_OFFSET, &self.cis.to_le_bytes());
        put(&mut ret, CUS_OFFSET, &self.cus.to_le_bytes());
        put(&mut ret, CRC_OFFSET, &self.crc.to_le_bytes());
        put(&mut ret, CIC_OFFSET, &self.cic.to_le_bytes());
        put(&mut ret, CUC_OFFSET, &self.cuc.to_le_bytes());
        ret
    }

    /// Appends the packed struct to `out`.
    pub fn write_to<T: MemWriter>(&self, out: &mut T) -> Result<(), MemWriterError> {
        out.reserve_allocate(Self::LEN)?;
        out.write(&self.into_bytes())
    }

    /// Scales the raw integers back to physical units.
    ///
    /// `toc`/`toe` come back as exact multiples of 16 s and
    /// `reference_time` is left empty: the struct carries no week number.
    pub fn to_ephemeris(&self) -> Ephemeris {
        Ephemeris {
            svid: self.sv_id,
            fit_interval: self.fit_int != 0,
            ura_index: self.ura,
            sv_health: self.health,
            tgd: TGD.decode(i64::from(self.tgd)),
            iodc: self.iodc,
            toc: u32::from(self.toc) * TOW_UNIT_SECONDS,
            af2: AF2.decode(i64::from(self.af2)),
            af1: AF1.decode(i64::from(self.af1)),
            af0: AF0.decode(i64::from(self.af0)),
            crs: CRS.decode(i64::from(self.crs)),
            delta_n: DELTA_N.decode(i64::from(self.delta_n)),
            m0: M0.decode(i64::from(self.m0)),
            cuc: CUC.decode(i64::from(self.cuc)),
            cus: CUS.decode(i64::from(self.cus)),
            e: E.decode(i64::from(self.e)),
            sqrt_a: SQRT_A.decode(i64::from(self.sqrt_a)),
            toe: u32::from(self.toe) * TOW_UNIT_SECONDS,
            cic: CIC.decode(i64::from(self.cic)),
            omega0: OMEGA0.decode(i64::from(self.omega0)),
            cis: CIS.decode(i64::from(self.cis)),
            crc: CRC.decode(i64::from(self.crc)),
            i0: I0.decode(i64::from(self.i0)),
            omega: W.decode(i64::from(self.w)),
            omega_dot: OMEGA_DOT.decode(i64::from(self.omega_dot)),
            idot: IDOT.decode(i64::from(self.idot)),
            reference_time: None,
        }
    }
}

impl TryFrom<&Ephemeris> for AgpsEph {
    type Error = ConversionError;

    /// Encodes `eph`, failing on the first value that does not fit its
    /// wire field. `toc`/`toe` are floored to 16 s units, never rounded.
    fn try_from(eph: &Ephemeris) -> Result<Self, Self::Error> {
        log::trace!("encoding ephemeris of G{:02}", eph.svid);
        Ok(Self {
            sv_id: SV_ID.narrow(i64::from(eph.svid))?,
            health: HEALTH.narrow(i64::from(eph.sv_health))?,
            iodc: IODC.narrow(i64::from(eph.iodc))?,
            toc: TOC.narrow(i64::from(eph.toc / TOW_UNIT_SECONDS))?,
            af2: AF2.encode(eph.af2)?,
            af1: AF1.encode(eph.af1)?,
            af0: AF0.encode(eph.af0)?,
            tgd: TGD.encode(eph.tgd)?,
            ura: URA.narrow(i64::from(eph.ura_index))?,
            fit_int: FIT_INT.narrow(i64::from(eph.fit_interval))?,
            toe: TOE.narrow(i64::from(eph.toe / TOW_UNIT_SECONDS))?,
            w: W.encode(eph.omega)?,
            delta_n: DELTA_N.encode(eph.delta_n)?,
            m0: M0.encode(eph.m0)?,
            omega_dot: OMEGA_DOT.encode(eph.omega_dot)?,
            e: E.encode(eph.e)?,
            idot: IDOT.encode(eph.idot)?,
            sqrt_a: SQRT_A.encode(eph.sqrt_a)?,
            i0: I0.encode(eph.i0)?,
            omega0: OMEGA0.encode(eph.omega0)?,
            crs: CRS.encode(eph.crs)?,
            cis: CIS.encode(eph.cis)?,
            cus: CUS.encode(eph.cus)?,
            crc: CRC.encode(eph.crc)?,
            cic: CIC.encode(eph.cic)?,
            cuc: CUC.encode(eph.cuc)?,
        })
    }
}

impl TryFrom<Ephemeris> for AgpsEph {
    type Error = ConversionError;

    fn try_from(eph: Ephemeris) -> Result<Self, Self::Error> {
        Self::try_from(&eph)
    }
}

impl From<AgpsEph> for [u8; AgpsEph::LEN] {
    fn from(x: AgpsEph) -> Self {
        x.into_bytes()
    }
}

#[inline]
fn put(buf: &mut [u8], offset: usize, bytes: &[u8]) {
    buf[offset..offset + bytes.len()].copy_from_slice(bytes);
}

/// Zero copy view of a packed [AgpsEph].
///
/// It is just reference to the caller's buffer
pub struct AgpsEphRef<'a>(&'a [u8]);

impl<'a> AgpsEphRef<'a> {
    pub fn new(bytes: &'a [u8]) -> Result<Self, ParserError> {
        Self::validate(bytes)?;
        Ok(Self(bytes))
    }

    fn validate(bytes: &[u8]) -> Result<(), ParserError> {
        let expect = <AgpsEph as WireStructMeta>::LEN;
        let got = bytes.len();
        if got == expect {
            Ok(())
        } else {
            Err(ParserError::InvalidLen {
                packet: <AgpsEph as WireStructMeta>::NAME,
                expect,
                got,
            })
        }
    }

    #[inline]
    fn le<const N: usize>(&self, offset: usize) -> [u8; N] {
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.0[offset..offset + N]);
        buf
    }

    #[inline]
    pub fn sv_id(&self) -> u8 {
        self.0[SV_ID_OFFSET]
    }

    #[inline]
    pub fn health(&self) -> u8 {
        self.0[HEALTH_OFFSET]
    }

    #[inline]
    pub fn iodc(&self) -> u16 {
        u16::from_le_bytes(self.le(IODC_OFFSET))
    }

    #[inline]
    pub fn toc(&self) -> u16 {
        u16::from_le_bytes(self.le(TOC_OFFSET))
    }

    #[inline]
    pub fn af2(&self) -> i8 {
        i8::from_le_bytes(self.le(AF2_OFFSET))
    }

    #[inline]
    pub fn af1(&self) -> i16 {
        i16::from_le_bytes(self.le(AF1_OFFSET))
    }

    #[inline]
    pub fn af0(&self) -> i32 {
        i32::from_le_bytes(self.le(AF0_OFFSET))
    }

    #[inline]
    pub fn tgd(&self) -> i8 {
        i8::from_le_bytes(self.le(TGD_OFFSET))
    }

    #[inline]
    pub fn ura(&self) -> u8 {
        self.0[URA_OFFSET]
    }

    #[inline]
    pub fn fit_int(&self) -> u8 {
        self.0[FIT_INT_OFFSET]
    }

    #[inline]
    pub fn toe(&self) -> u16 {
        u16::from_le_bytes(self.le(TOE_OFFSET))
    }

    #[inline]
    pub fn w(&self) -> i32 {
        i32::from_le_bytes(self.le(W_OFFSET))
    }

    #[inline]
    pub fn delta_n(&self) -> i16 {
        i16::from_le_bytes(self.le(DELTA_N_OFFSET))
    }

    #[inline]
    pub fn m0(&self) -> i32 {
        i32::from_le_bytes(self.le(M0_OFFSET))
    }

    #[inline]
    pub fn omega_dot(&self) -> i32 {
        i32::from_le_bytes(self.le(OMEGA_DOT_OFFSET))
    }

    #[inline]
    pub fn e(&self) -> u32 {
        u32::from_le_bytes(self.le(E_OFFSET))
    }

    #[inline]
    pub fn idot(&self) -> i16 {
        i16::from_le_bytes(self.le(IDOT_OFFSET))
    }

    #[inline]
    pub fn sqrt_a(&self) -> u32 {
        u32::from_le_bytes(self.le(SQRT_A_OFFSET))
    }

    #[inline]
    pub fn i0(&self) -> i32 {
        i32::from_le_bytes(self.le(I0_OFFSET))
    }

    #[inline]
    pub fn omega0(&self) -> i32 {
        i32::from_le_bytes(self.le(OMEGA0_OFFSET))
    }

    #[inline]
    pub fn crs(&self) -> i16 {
        i16::from_le_bytes(self.le(CRS_OFFSET))
    }

    #[inline]
    pub fn cis(&self) -> i16 {
        i16::from_le_bytes(self.le(CIS_OFFSET))
    }

    #[inline]
    pub fn cus(&self) -> i16 {
        i16::from_le_bytes(self.le(CUS_OFFSET))
    }

    #[inline]
    pub fn crc(&self) -> i16 {
        i16::from_le_bytes(self.le(CRC_OFFSET))
    }

    #[inline]
    pub fn cic(&self) -> i16 {
        i16::from_le_bytes(self.le(CIC_OFFSET))
    }

    #[inline]
    pub fn cuc(&self) -> i16 {
        i16::from_le_bytes(self.le(CUC_OFFSET))
    }

    pub fn to_owned(&self) -> AgpsEph {
        AgpsEph {
            sv_id: self.sv_id(),
            health: self.health(),
            iodc: self.iodc(),
            toc: self.toc(),
            af2: self.af2(),
            af1: self.af1(),
            af0: self.af0(),
            tgd: self.tgd(),
            ura: self.ura(),
            fit_int: self.fit_int(),
            toe: self.toe(),
            w: self.w(),
            delta_n: self.delta_n(),
            m0: self.m0(),
            omega_dot: self.omega_dot(),
            e: self.e(),
            idot: self.idot(),
            sqrt_a: self.sqrt_a(),
            i0: self.i0(),
            omega0: self.omega0(),
            crs: self.crs(),
            cis: self.cis(),
            cus: self.cus(),
            crc: self.crc(),
            cic: self.cic(),
            cuc: self.cuc(),
        }
    }
}
