//! A proptest generator for packed A-GPS ephemeris structs.
//!
//! Reference bytes are produced field by field with `byteorder`, then
//! compared against what the crate packs and unpacks.

use agps::{AgpsEph, AgpsEphRef};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use proptest::prelude::*;
use std::io::Cursor;

/// Serializes the struct the way the receiver firmware lays it out.
fn reference_bytes(p: &AgpsEph) -> Vec<u8> {
    let mut wtr = Vec::with_capacity(62);
    wtr.write_u8(p.sv_id).unwrap();
    wtr.write_u8(p.health).unwrap();
    wtr.write_u16::<LittleEndian>(p.iodc).unwrap();
    wtr.write_u16::<LittleEndian>(p.toc).unwrap();
    wtr.write_i8(p.af2).unwrap();
    wtr.write_i16::<LittleEndian>(p.af1).unwrap();
    wtr.write_i32::<LittleEndian>(p.af0).unwrap();
    wtr.write_i8(p.tgd).unwrap();
    wtr.write_u8(p.ura).unwrap();
    wtr.write_u8(p.fit_int).unwrap();
    wtr.write_u16::<LittleEndian>(p.toe).unwrap();
    wtr.write_i32::<LittleEndian>(p.w).unwrap();
    wtr.write_i16::<LittleEndian>(p.delta_n).unwrap();
    wtr.write_i32::<LittleEndian>(p.m0).unwrap();
    wtr.write_i32::<LittleEndian>(p.omega_dot).unwrap();
    wtr.write_u32::<LittleEndian>(p.e).unwrap();
    wtr.write_i16::<LittleEndian>(p.idot).unwrap();
    wtr.write_u32::<LittleEndian>(p.sqrt_a).unwrap();
    wtr.write_i32::<LittleEndian>(p.i0).unwrap();
    wtr.write_i32::<LittleEndian>(p.omega0).unwrap();
    wtr.write_i16::<LittleEndian>(p.crs).unwrap();
    wtr.write_i16::<LittleEndian>(p.cis).unwrap();
    wtr.write_i16::<LittleEndian>(p.cus).unwrap();
    wtr.write_i16::<LittleEndian>(p.crc).unwrap();
    wtr.write_i16::<LittleEndian>(p.cic).unwrap();
    wtr.write_i16::<LittleEndian>(p.cuc).unwrap();
    wtr
}

/// Direct integer unpack of the firmware layout.
fn reference_unpack(bytes: &[u8]) -> AgpsEph {
    let mut rdr = Cursor::new(bytes);
    AgpsEph {
        sv_id: rdr.read_u8().unwrap(),
        health: rdr.read_u8().unwrap(),
        iodc: rdr.read_u16::<LittleEndian>().unwrap(),
        toc: rdr.read_u16::<LittleEndian>().unwrap(),
        af2: rdr.read_i8().unwrap(),
        af1: rdr.read_i16::<LittleEndian>().unwrap(),
        af0: rdr.read_i32::<LittleEndian>().unwrap(),
        tgd: rdr.read_i8().unwrap(),
        ura: rdr.read_u8().unwrap(),
        fit_int: rdr.read_u8().unwrap(),
        toe: rdr.read_u16::<LittleEndian>().unwrap(),
        w: rdr.read_i32::<LittleEndian>().unwrap(),
        delta_n: rdr.read_i16::<LittleEndian>().unwrap(),
        m0: rdr.read_i32::<LittleEndian>().unwrap(),
        omega_dot: rdr.read_i32::<LittleEndian>().unwrap(),
        e: rdr.read_u32::<LittleEndian>().unwrap(),
        idot: rdr.read_i16::<LittleEndian>().unwrap(),
        sqrt_a: rdr.read_u32::<LittleEndian>().unwrap(),
        i0: rdr.read_i32::<LittleEndian>().unwrap(),
        omega0: rdr.read_i32::<LittleEndian>().unwrap(),
        crs: rdr.read_i16::<LittleEndian>().unwrap(),
        cis: rdr.read_i16::<LittleEndian>().unwrap(),
        cus: rdr.read_i16::<LittleEndian>().unwrap(),
        crc: rdr.read_i16::<LittleEndian>().unwrap(),
        cic: rdr.read_i16::<LittleEndian>().unwrap(),
        cuc: rdr.read_i16::<LittleEndian>().unwrap(),
    }
}

/// A proptest strategy for structs whose fields respect the documented
/// wire ranges.
fn agps_eph_strategy() -> impl Strategy<Value = AgpsEph> {
    // Split into smaller tuples to avoid proptest tuple size limits
    let clock = (
        1u8..=32u8,              // sv_id
        any::<u8>(),             // health
        0u16..=2047u16,          // iodc
        0u16..=37799u16,         // toc
        any::<i8>(),             // af2
        any::<i16>(),            // af1
        -2097152i32..=2097151i32, // af0
        any::<i8>(),             // tgd
    );

    let flags = (
        0u8..=15u8,      // ura
        0u8..=1u8,       // fit_int
        0u16..=37799u16, // toe
    );

    let orbit = (
        any::<i32>(),             // w
        any::<i16>(),             // delta_n
        any::<i32>(),             // m0
        -8388608i32..=8388607i32, // omega_dot
        any::<u32>(),             // e
        -8192i16..=8191i16,       // idot
        any::<u32>(),             // sqrt_a
        any::<i32>(),             // i0
        any::<i32>(),             // omega0
    );

    let harmonics = (
        any::<i16>(), // crs
        any::<i16>(), // cis
        any::<i16>(), // cus
        any::<i16>(), // crc
        any::<i16>(), // cic
        any::<i16>(), // cuc
    );

    (clock, flags, orbit, harmonics).prop_map(
        |(
            (sv_id, health, iodc, toc, af2, af1, af0, tgd),
            (ura, fit_int, toe),
            (w, delta_n, m0, omega_dot, e, idot, sqrt_a, i0, omega0),
            (crs, cis, cus, crc, cic, cuc),
        )| AgpsEph {
            sv_id,
            health,
            iodc,
            toc,
            af2,
            af1,
            af0,
            tgd,
            ura,
            fit_int,
            toe,
            w,
            delta_n,
            m0,
            omega_dot,
            e,
            idot,
            sqrt_a,
            i0,
            omega0,
            crs,
            cis,
            cus,
            crc,
            cic,
            cuc,
        },
    )
}

proptest! {
    #[test]
    fn packed_bytes_match_firmware_layout(expected in agps_eph_strategy()) {
        let bytes = expected.into_bytes();
        prop_assert_eq!(&bytes[..], &reference_bytes(&expected)[..]);
        prop_assert_eq!(reference_unpack(&bytes), expected);
    }

    #[test]
    fn parse_matches_direct_unpack(expected in agps_eph_strategy()) {
        let bytes = reference_bytes(&expected);
        let parsed = AgpsEph::parse(&bytes).unwrap();
        prop_assert_eq!(parsed, reference_unpack(&bytes));

        let r = AgpsEphRef::new(&bytes).unwrap();
        prop_assert_eq!(r.sv_id(), expected.sv_id);
        prop_assert_eq!(r.toc(), expected.toc);
        prop_assert_eq!(r.af0(), expected.af0);
        prop_assert_eq!(r.omega_dot(), expected.omega_dot);
        prop_assert_eq!(r.idot(), expected.idot);
        prop_assert_eq!(r.sqrt_a(), expected.sqrt_a);
        prop_assert_eq!(r.cuc(), expected.cuc);
    }

    #[test]
    fn physical_round_trip_is_exact(expected in agps_eph_strategy()) {
        // every raw integer is exactly representable once scaled
        let eph = expected.to_ephemeris();
        prop_assert_eq!(AgpsEph::try_from(&eph).unwrap(), expected);
    }

    #[test]
    fn parse_rejects_other_lengths(len in 0usize..200) {
        prop_assume!(len != AgpsEph::LEN);
        let bytes = vec![0u8; len];
        prop_assert!(AgpsEph::parse(&bytes).is_err());
    }
}

#[test]
fn width_boundaries() {
    let bounds = [
        AgpsEph {
            sv_id: 1,
            af0: -2097152,
            omega_dot: -8388608,
            idot: -8192,
            af2: i8::MIN,
            af1: i16::MIN,
            w: i32::MIN,
            e: 0,
            toc: 0,
            ..Default::default()
        },
        AgpsEph {
            sv_id: 32,
            health: u8::MAX,
            iodc: 2047,
            toc: 37799,
            toe: 37799,
            ura: 15,
            fit_int: 1,
            af0: 2097151,
            omega_dot: 8388607,
            idot: 8191,
            af2: i8::MAX,
            tgd: i8::MAX,
            crs: i16::MAX,
            e: u32::MAX,
            sqrt_a: u32::MAX,
            i0: i32::MAX,
            ..Default::default()
        },
    ];

    for expected in bounds {
        let bytes = expected.into_bytes();
        assert_eq!(reference_unpack(&bytes), expected);
        assert_eq!(AgpsEph::parse(&bytes).unwrap(), expected);
        assert_eq!(AgpsEph::try_from(&expected.to_ephemeris()).unwrap(), expected);
    }
}
