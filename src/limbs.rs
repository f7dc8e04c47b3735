//! Conversion between unsigned big integers and big-endian arrays of 32-bit limbs
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::error::{EncodingError, Result};

/// Anything that can be interpreted as an unsigned big integer before being
/// split into limbs.
pub trait ToLimbValue {
    fn to_limb_value(&self) -> Result<BigUint>;
}

impl ToLimbValue for BigUint {
    fn to_limb_value(&self) -> Result<BigUint> {
        Ok(self.clone())
    }
}

impl ToLimbValue for BigInt {
    fn to_limb_value(&self) -> Result<BigUint> {
        match self.sign() {
            Sign::Minus => Err(EncodingError::invalid(format!(
                "negative value {} cannot be encoded",
                self
            ))),
            _ => Ok(self.magnitude().clone()),
        }
    }
}

impl ToLimbValue for str {
    fn to_limb_value(&self) -> Result<BigUint> {
        parse_biguint(self)
    }
}

impl ToLimbValue for String {
    fn to_limb_value(&self) -> Result<BigUint> {
        parse_biguint(self)
    }
}

impl<T: ToLimbValue + ?Sized> ToLimbValue for &T {
    fn to_limb_value(&self) -> Result<BigUint> {
        (**self).to_limb_value()
    }
}

macro_rules! unsigned_limb_value {
    ($($t:ty),*) => {$(
        impl ToLimbValue for $t {
            fn to_limb_value(&self) -> Result<BigUint> {
                Ok(BigUint::from(*self))
            }
        }
    )*};
}

macro_rules! signed_limb_value {
    ($($t:ty),*) => {$(
        impl ToLimbValue for $t {
            fn to_limb_value(&self) -> Result<BigUint> {
                BigInt::from(*self).to_limb_value()
            }
        }
    )*};
}

unsigned_limb_value!(u8, u16, u32, u64, u128, usize);
signed_limb_value!(i8, i16, i32, i64, i128, isize);

/// Parses a base-10 string, or a base-16/8/2 string carrying a `0x`/`0o`/`0b`
/// prefix, into an unsigned big integer. Surrounding whitespace is ignored.
pub fn parse_biguint(s: &str) -> Result<BigUint> {
    let trimmed = s.trim();
    if trimmed.starts_with('-') {
        return Err(EncodingError::invalid(format!(
            "negative value {} cannot be encoded",
            trimmed
        )));
    }

    let (digits, radix) = match trimmed.get(..2) {
        Some("0x") | Some("0X") => (&trimmed[2..], 16),
        Some("0o") | Some("0O") => (&trimmed[2..], 8),
        Some("0b") | Some("0B") => (&trimmed[2..], 2),
        _ => (trimmed.strip_prefix('+').unwrap_or(trimmed), 10),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(EncodingError::invalid(format!("{:?} is not a number", s)));
    }

    BigUint::parse_bytes(digits.as_bytes(), radix)
        .ok_or_else(|| EncodingError::invalid(format!("{:?} is not a number", s)))
}

/// Splits `value` into base 2^32 limbs, most significant first.
///
/// When `size` is larger than the natural number of limbs the result is
/// left-padded with zero limbs. A value that needs more than `size` limbs is
/// never truncated: the caller must make sure `value < 2^(32 * size)` if a
/// fixed width is required (see [`to_array32_exact`]).
pub fn to_array32<V: ToLimbValue + ?Sized>(value: &V, size: Option<usize>) -> Result<Vec<u32>> {
    let value = value.to_limb_value()?;
    Ok(biguint_to_array32(&value, size))
}

/// Infallible core of [`to_array32`] for values that are already unsigned.
pub fn biguint_to_array32(value: &BigUint, size: Option<usize>) -> Vec<u32> {
    // zero has no digits, so `0` with no padding encodes to an empty array
    let mut res = if value.is_zero() {
        Vec::new()
    } else {
        value.to_u32_digits()
    };

    if let Some(size) = size {
        if res.len() < size {
            res.resize(size, 0);
        }
    }
    res.reverse();
    res
}

/// Like [`to_array32`] for a fixed width, but fails instead of growing past
/// `size` limbs.
pub fn to_array32_exact(value: &BigUint, size: usize) -> Result<Vec<u32>> {
    let needed = ((value.bits() + 31) / 32) as usize;
    if needed > size {
        return Err(EncodingError::Overflow { needed, size });
    }
    Ok(biguint_to_array32(value, Some(size)))
}

/// Reassembles a big integer from limbs stored most significant first.
/// Leading zero limbs are transparent and an empty array decodes to zero.
pub fn from_array32(arr: &[u32]) -> BigUint {
    let mut res = BigUint::zero();
    for &val in arr.iter() {
        res = (res << 32u32) + BigUint::from(val);
    }
    res
}
