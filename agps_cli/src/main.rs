use std::{fs, io, io::Read};

use agps::{
    batch,
    nav::{self, RinexNavRecord},
    AgpsEph, GpsTime,
};
use anyhow::{anyhow, bail, Context};
use clap::ArgMatches;

mod cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = cli::parse_args().get_matches();
    match matches.subcommand() {
        Some(("encode", sub)) => encode(sub),
        Some(("decode", sub)) => decode(sub),
        Some(("rebase", sub)) => rebase(sub),
        Some(("ura", sub)) => {
            let meters = *sub.get_one::<f64>("meters").context("missing accuracy")?;
            println!("{}", nav::ura_index(meters));
            Ok(())
        },
        _ => unreachable!("subcommand is required"),
    }
}

fn encode(args: &ArgMatches) -> anyhow::Result<()> {
    let path = args.get_one::<String>("records").context("missing input")?;
    let text = if path == "-" {
        let mut s = String::new();
        io::stdin().read_to_string(&mut s)?;
        s
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {path}"))?
    };

    let value: serde_json::Value = serde_json::from_str(&text)?;
    let records: Vec<RinexNavRecord> = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };
    log::info!("read {} navigation records", records.len());

    let mut failed = 0;
    for (record, eph) in records.iter().zip(batch::ephemerides_from_nav(&records)) {
        match eph.and_then(|e| AgpsEph::try_from(&e)) {
            Ok(raw) => println!("{}", to_hex(&raw.into_bytes())),
            Err(e) => {
                log::error!("{}: {e}", record.sv);
                failed += 1;
            },
        }
    }
    if failed > 0 {
        bail!("{failed} of {} records failed to encode", records.len());
    }
    Ok(())
}

fn decode(args: &ArgMatches) -> anyhow::Result<()> {
    let hex = args.get_one::<String>("hex").context("missing struct")?;
    let bytes = from_hex(hex)?;
    let raw = AgpsEph::parse(&bytes)?;
    let json = if args.get_flag("physical") {
        serde_json::to_string_pretty(&raw.to_ephemeris())?
    } else {
        serde_json::to_string_pretty(&raw)?
    };
    println!("{json}");
    Ok(())
}

fn rebase(args: &ArgMatches) -> anyhow::Result<()> {
    let tow = *args.get_one::<i64>("tow").context("missing tow")?;
    let t = GpsTime::new(0, tow);
    let rebased = match (args.get_one::<i64>("week"), args.get_one::<i64>("base-tow")) {
        (Some(&week), Some(&base_tow)) => {
            let base = GpsTime::checked_new(week, base_tow)
                .with_context(|| format!("base time {week}:{base_tow} out of range"))?;
            t.rebase(base)
        },
        _ => t.rebase_now(),
    };
    println!("{rebased}");
    Ok(())
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn from_hex(s: &str) -> anyhow::Result<Vec<u8>> {
    let s = s.trim();
    if s.len() % 2 != 0 || !s.is_ascii() {
        bail!("malformed hex string");
    }
    (0..s.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&s[i..i + 2], 16).map_err(|e| anyhow!("bad hex at {i}: {e}"))
        })
        .collect()
}
