use alloc::string::String;
use core::fmt;

/// Error of a [crate::MemWriter] sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemWriterError {
    /// Sink has no room left for the bytes
    NotEnoughMem,
}

impl fmt::Display for MemWriterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemWriterError::NotEnoughMem => f.write_str("Not enough memory error"),
        }
    }
}

impl core::error::Error for MemWriterError {}

/// Error that possible while unpacking a wire struct
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    InvalidLen {
        packet: &'static str,
        expect: usize,
        got: usize,
    },
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserError::InvalidLen {
                packet,
                expect,
                got,
            } => write!(
                f,
                "Invalid struct({}) length, expect {}, got {}",
                packet, expect, got
            ),
        }
    }
}

impl core::error::Error for ParserError {}

/// Error raised while turning a dataset record into an [crate::Ephemeris],
/// or an [crate::Ephemeris] into its wire struct.
///
/// Conversions never emit partial records: the first failing field aborts.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Satellite identifier is not a GPS `Gnn` identifier
    InvalidIdentifier(String),
    /// Required field is absent or NaN
    MissingValue(&'static str),
    /// Record is not a navigation message record
    UnsupportedRecordType(String),
    /// Scaled value does not fit the destination field
    RangeViolation {
        field: &'static str,
        value: f64,
        min: i64,
        max: i64,
    },
    /// Reception timestamp (ns since Unix epoch) cannot be represented
    InvalidTimestamp(i64),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidIdentifier(sv) => write!(f, "Invalid SV: {}", sv),
            ConversionError::MissingValue(field) => write!(f, "Missing value {}", field),
            ConversionError::UnsupportedRecordType(kind) => {
                write!(f, "Unexpected record type \"{}\"", kind)
            },
            ConversionError::RangeViolation {
                field,
                value,
                min,
                max,
            } => write!(
                f,
                "Field {} out of range, got {}, expect {}..={}",
                field, value, min, max
            ),
            ConversionError::InvalidTimestamp(ns) => write!(f, "Invalid timestamp {}ns", ns),
        }
    }
}

impl core::error::Error for ConversionError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeError {
    /// Instant is outside of the representable calendar range
    OutOfRange,
}

impl fmt::Display for DateTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateTimeError::OutOfRange => f.write_str("date out of range"),
        }
    }
}

impl core::error::Error for DateTimeError {}
