//! # agps
//!
//! Fixed-point codec between GPS broadcast ephemerides, in physical units,
//! and the packed ephemeris struct that cellular GNSS receivers take as
//! A-GPS assistance data (`nrf_modem_gnss_agps_data_ephemeris`).
//!
//! Encoding
//! ========
//!
//! Build an [Ephemeris] (by hand, or from a navigation record with
//! [nav::ephemeris_from_nav]) and convert it with [AgpsEph::try_from]:
//! ```
//! use agps::{AgpsEph, Ephemeris};
//!
//! let eph = Ephemeris {
//!     svid: 7,
//!     toc: 37792,
//!     toe: 37792,
//!     sqrt_a: 5153.68745232,
//!     m0: 0.5,
//!     ..Default::default()
//! };
//! let raw = AgpsEph::try_from(&eph).unwrap();
//! assert_eq!(raw.toc, 2362);
//! assert_eq!(raw.m0, 1 << 30);
//!
//! let bytes: [u8; 62] = raw.into_bytes();
//! ```
//! Values that do not fit their wire field are reported as
//! [ConversionError::RangeViolation] instead of being wrapped.
//!
//! Decoding
//! ========
//!
//! [AgpsEph::parse] and [AgpsEphRef] unpack raw wire integers only.
//! Physical units are recovered explicitly with [AgpsEph::to_ephemeris]:
//! ```
//! use agps::AgpsEph;
//!
//! let mut bytes = [0u8; 62];
//! bytes[0] = 12; // sv_id
//! bytes[4] = 0x3a; // toc, 2362 little-endian
//! bytes[5] = 0x09;
//!
//! let raw = AgpsEph::parse(&bytes).unwrap();
//! assert_eq!(raw.sv_id, 12);
//! assert_eq!(raw.toc, 2362);
//! assert_eq!(raw.to_ephemeris().toc, 37792);
//! ```
//!
//! GPS time
//! ========
//!
//! Broadcast reference times are bare times of week. [GpsTime::rebase]
//! places one in the week of a known epoch:
//! ```
//! use agps::GpsTime;
//!
//! let base = GpsTime::new(100, 200000);
//! let toc = GpsTime::new(0, 100).rebase(base);
//! assert_eq!((toc.week(), toc.tow()), (100, 100));
//! ```
//!
//! no_std Support
//! ==============
//!
//! Disable the default `std` feature to build for `no_std` targets with an
//! allocator. [GpsTime::now] and [GpsTime::rebase_now] need `std`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
extern crate core;
#[cfg(feature = "serde")]
extern crate serde;

pub use crate::{
    ephemeris::Ephemeris,
    error::{ConversionError, DateTimeError, MemWriterError, ParserError},
    gps_time::GpsTime,
    wire::*,
};

pub mod batch;
pub mod constants;
mod ephemeris;
mod error;
pub mod fixed;
mod gps_time;
pub mod nav;
mod wire;
