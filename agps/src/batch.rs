//! Whole constellation conversions.
//!
//! Every record converts independently. With the `parallel` feature the
//! records are spread over the rayon thread pool, results keep the input
//! order either way.

use alloc::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    error::ConversionError,
    nav::{ephemeris_from_nav, NavRecord},
    wire::AgpsEph,
    Ephemeris,
};

/// Encodes each ephemeris into its wire struct.
pub fn encode_all(ephemerides: &[Ephemeris]) -> Vec<Result<AgpsEph, ConversionError>> {
    #[cfg(feature = "parallel")]
    let iter = ephemerides.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = ephemerides.iter();

    iter.map(AgpsEph::try_from).collect()
}

/// Converts each navigation record into an [Ephemeris].
pub fn ephemerides_from_nav<R>(records: &[R]) -> Vec<Result<Ephemeris, ConversionError>>
where
    R: NavRecord + Sync,
{
    #[cfg(feature = "parallel")]
    let iter = records.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = records.iter();

    iter.map(|r| ephemeris_from_nav(r)).collect()
}

/// Packs all `ephemerides` back to back, in input order.
///
/// Fails without output on the first ephemeris that cannot be encoded.
pub fn constellation_bytes(ephemerides: &[Ephemeris]) -> Result<Vec<u8>, ConversionError> {
    let structs = encode_all(ephemerides)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    let mut out = Vec::with_capacity(structs.len() * AgpsEph::LEN);
    for eph in &structs {
        out.extend_from_slice(&eph.into_bytes());
    }
    log::debug!("packed {} ephemerides", structs.len());
    Ok(out)
}
