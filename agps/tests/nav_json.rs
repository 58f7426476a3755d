#![cfg(feature = "serde")]

use agps::{
    batch,
    nav::{ephemeris_from_nav, RinexNavRecord},
    AgpsEph, ConversionError, Ephemeris, GpsTime,
};

// G07 broadcast, epoch 2025-04-13T10:29:52 GPST (week 2362, tow 37792)
static G07: &str = r#"{
    "sv": "G07",
    "rinextype": "nav",
    "time": 1744540192000000000,
    "SVclockBias": 4.36246953905e-04,
    "SVclockDrift": -1.13686837722e-12,
    "SVclockDriftRate": 0.0,
    "Crs": -6.59375,
    "DeltaN": 4.48661573499e-09,
    "M0": 1.57079632679489661923,
    "Cuc": -2.99885869026e-07,
    "Eccentricity": 0.0159378813114,
    "Cus": 6.87316060066e-06,
    "sqrtA": 5153.68745232,
    "Toe": 37792.0,
    "Cic": 1.30385160446e-07,
    "Omega0": 1.57079632679489661923,
    "Cis": -7.82310962677e-08,
    "Io": 0.958,
    "Crc": 254.4375,
    "omega": -2.2,
    "OmegaDot": -8.0e-09,
    "IDOT": 1.0e-10,
    "SVacc": 3.0,
    "health": 0.0,
    "TGD": -1.11758708954e-08,
    "IODC": 88.0,
    "FitIntvl": 4.0
}"#;

fn g07() -> RinexNavRecord {
    serde_json::from_str(G07).unwrap()
}

#[test]
fn json_record_to_wire() {
    let eph = ephemeris_from_nav(&g07()).unwrap();
    assert_eq!(eph.svid, 7);
    assert_eq!(eph.ura_index, 1);
    assert!(!eph.fit_interval);
    assert!((eph.omega0 - 0.5).abs() < 1e-15);
    assert_eq!(eph.toc, 37792);
    assert_eq!(eph.reference_time, Some(GpsTime::new(2362, 37792)));

    let raw = AgpsEph::try_from(&eph).unwrap();
    assert_eq!(raw.sv_id, 7);
    assert_eq!(raw.ura, 1);
    assert_eq!(raw.fit_int, 0);
    assert_eq!(raw.toc, 2362);
    assert_eq!(raw.toe, 2362);
    assert_eq!(raw.omega0, 1 << 30);
    assert_eq!(raw.m0, 1 << 30);
    assert_eq!(raw.iodc, 88);

    let bytes = raw.into_bytes();
    let back = AgpsEph::parse(&bytes).unwrap();
    assert_eq!(back, raw);
    assert_eq!(u32::from(back.toc) * 16, 37792);
}

#[test]
fn missing_column() {
    let mut value: serde_json::Value = serde_json::from_str(G07).unwrap();
    value.as_object_mut().unwrap().remove("Cic");
    let r: RinexNavRecord = serde_json::from_value(value).unwrap();
    assert_eq!(
        ephemeris_from_nav(&r),
        Err(ConversionError::MissingValue("Cic"))
    );
}

#[test]
fn other_fit_interval_codes() {
    for code in [0.0, 6.0, 8.0, 14.0] {
        let r = RinexNavRecord {
            fit_intvl: Some(code),
            ..g07()
        };
        let eph = ephemeris_from_nav(&r).unwrap();
        assert!(eph.fit_interval);
        assert_eq!(AgpsEph::try_from(&eph).unwrap().fit_int, 1);
    }
}

#[test]
fn batch_of_records() {
    let records: Vec<_> = (1..=3)
        .map(|prn| RinexNavRecord {
            sv: format!("G{:02}", prn),
            ..g07()
        })
        .collect();
    let ephs: Vec<Ephemeris> = batch::ephemerides_from_nav(&records)
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        ephs.iter().map(|e| e.svid).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    let bytes = batch::constellation_bytes(&ephs).unwrap();
    assert_eq!(bytes.len(), 3 * AgpsEph::LEN);
    assert_eq!(bytes[AgpsEph::LEN], 2);
}

#[test]
fn ephemeris_serde() {
    let eph = ephemeris_from_nav(&g07()).unwrap();
    let json = serde_json::to_string(&eph).unwrap();
    let back: Ephemeris = serde_json::from_str(&json).unwrap();
    assert_eq!(back, eph);
    assert_eq!(back.reference_time, eph.reference_time);
}

#[test]
fn gps_time_serde_normalizes() {
    let t: GpsTime = serde_json::from_str(r#"{"week": 10, "tow": 604801}"#).unwrap();
    assert_eq!((t.week(), t.tow()), (11, 1));
}

#[test]
fn out_of_range_weeks_fail_to_deserialize() {
    let huge = r#"{"week": 9223372036854775807, "tow": 0}"#;
    assert!(serde_json::from_str::<GpsTime>(huge).is_err());

    let mut value = serde_json::to_value(ephemeris_from_nav(&g07()).unwrap()).unwrap();
    value["reference_time"] = serde_json::from_str(huge).unwrap();
    assert!(serde_json::from_value::<Ephemeris>(value).is_err());

    let t: GpsTime = serde_json::from_str(r#"{"week": -1, "tow": 604799}"#).unwrap();
    assert_eq!(t.seconds(), -1);
}
