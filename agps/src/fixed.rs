//! Fixed-point conversions between physical values and wire integers.
//!
//! A wire integer `n` with scale factor `s` stands for the physical value
//! `n * s`. Encoding divides by `s` and rounds half-way cases to the
//! nearest even integer, which is what the receiver vendor tooling does.

use num_traits::Float;

use crate::error::ConversionError;

/// Rounds to the nearest integer, ties go to the even neighbour.
pub fn round_half_even(x: f64) -> f64 {
    if Float::abs(x - Float::trunc(x)) == 0.5 {
        2.0 * Float::round(x / 2.0)
    } else {
        Float::round(x)
    }
}

/// Converts `value` into fixed-point units of `scale`.
///
/// No range check happens here: values beyond `i64` saturate and NaN
/// becomes 0. Use [FixedField::encode] to target a wire field.
pub fn to_fixed(value: f64, scale: f64) -> i64 {
    round_half_even(value / scale) as i64
}

/// Physical value of a fixed-point integer
pub fn from_fixed(raw: i64, scale: f64) -> f64 {
    raw as f64 * scale
}

/// Scale factor and representable range of one wire field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedField {
    pub name: &'static str,
    pub scale: f64,
    pub min: i64,
    pub max: i64,
}

impl FixedField {
    /// Two's complement field of `bits` bits
    pub const fn signed(name: &'static str, scale: f64, bits: u32) -> Self {
        Self {
            name,
            scale,
            min: -(1i64 << (bits - 1)),
            max: (1i64 << (bits - 1)) - 1,
        }
    }

    /// Unsigned field of `bits` bits
    pub const fn unsigned(name: &'static str, scale: f64, bits: u32) -> Self {
        Self {
            name,
            scale,
            min: 0,
            max: (1i64 << bits) - 1,
        }
    }

    /// Field restricted to an explicit `min..=max` range
    pub const fn bounded(name: &'static str, scale: f64, min: i64, max: i64) -> Self {
        Self {
            name,
            scale,
            min,
            max,
        }
    }

    /// Scales, rounds and narrows `value` into the wire integer type.
    pub fn encode<T: TryFrom<i64>>(&self, value: f64) -> Result<T, ConversionError> {
        let scaled = round_half_even(value / self.scale);
        if !scaled.is_finite() || scaled < self.min as f64 || scaled > self.max as f64 {
            return Err(self.violation(scaled));
        }
        self.narrow(scaled as i64)
    }

    /// Range checks an already integral value and narrows it.
    pub fn narrow<T: TryFrom<i64>>(&self, raw: i64) -> Result<T, ConversionError> {
        if raw < self.min || raw > self.max {
            return Err(self.violation(raw as f64));
        }
        T::try_from(raw).map_err(|_| self.violation(raw as f64))
    }

    pub fn decode(&self, raw: i64) -> f64 {
        from_fixed(raw, self.scale)
    }

    fn violation(&self, value: f64) -> ConversionError {
        ConversionError::RangeViolation {
            field: self.name,
            value,
            min: self.min,
            max: self.max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{P2_M31, P2_M5};

    #[test]
    fn ties_round_to_even() {
        assert_eq!(to_fixed(2.5, 1.0), 2);
        assert_eq!(to_fixed(3.5, 1.0), 4);
        assert_eq!(to_fixed(-2.5, 1.0), -2);
        assert_eq!(to_fixed(-3.5, 1.0), -4);
        assert_eq!(to_fixed(0.5, 1.0), 0);
        assert_eq!(to_fixed(2.6, 1.0), 3);
        assert_eq!(to_fixed(-2.4, 1.0), -2);
    }

    #[test]
    fn power_of_two_scales() {
        assert_eq!(to_fixed(1.0, P2_M5), 32);
        assert_eq!(to_fixed(-1.0, P2_M31), -(1i64 << 31));
        // 2.5 LSB
        assert_eq!(to_fixed(2.5 * P2_M31, P2_M31), 2);
        assert_eq!(from_fixed(-64, P2_M5), -2.0);
    }

    #[test]
    fn signed_ranges() {
        let af0 = FixedField::signed("af0", P2_M31, 22);
        assert_eq!((af0.min, af0.max), (-2097152, 2097151));
        assert_eq!(af0.encode::<i32>(2097151.0 * P2_M31), Ok(2097151));
        assert_eq!(af0.encode::<i32>(-2097152.0 * P2_M31), Ok(-2097152));
        assert_eq!(
            af0.encode::<i32>(2097152.0 * P2_M31),
            Err(ConversionError::RangeViolation {
                field: "af0",
                value: 2097152.0,
                min: -2097152,
                max: 2097151,
            })
        );
    }

    #[test]
    fn unsigned_ranges() {
        let e = FixedField::unsigned("e", 1.0, 32);
        assert_eq!(e.encode::<u32>(4294967295.0), Ok(u32::MAX));
        assert!(e.encode::<u32>(-1.0).is_err());
        assert!(e.encode::<u32>(4294967296.0).is_err());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let crs = FixedField::signed("crs", P2_M5, 16);
        assert!(crs.encode::<i16>(f64::NAN).is_err());
        assert!(crs.encode::<i16>(f64::INFINITY).is_err());
    }

    #[test]
    fn narrow_checks_bounds() {
        let ura = FixedField::bounded("ura", 1.0, 0, 15);
        assert_eq!(ura.narrow::<u8>(15), Ok(15));
        assert!(ura.narrow::<u8>(16).is_err());
    }
}
