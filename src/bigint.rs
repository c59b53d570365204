//! Interop with arbitrary precision integers from `num-bigint`.

use num_bigint::{BigInt, BigUint, Sign};

use crate::{raw, DecodeError, EncodeError, ExtendedInt, FromExtended};

impl ExtendedInt for BigUint {
    fn to_extended_raw(self) -> Result<u128, EncodeError> {
        (&self).to_extended_raw()
    }
}

impl FromExtended for BigUint {
    fn from_extended_raw(raw: u128) -> Option<Self> {
        Some(raw.into())
    }
}

impl ExtendedInt for &BigUint {
    fn to_extended_raw(self) -> Result<u128, EncodeError> {
        u128::try_from(self).map_err(|_| EncodeError::PrecisionLoss)
    }
}

impl ExtendedInt for BigInt {
    fn to_extended_raw(self) -> Result<u128, EncodeError> {
        (&self).to_extended_raw()
    }
}

impl FromExtended for BigInt {
    fn from_extended_raw(raw: u128) -> Option<Self> {
        Some(raw.into())
    }
}

impl ExtendedInt for &BigInt {
    fn to_extended_raw(self) -> Result<u128, EncodeError> {
        if self.sign() == Sign::Minus {
            return Err(EncodeError::OutOfRange);
        }
        self.magnitude().to_extended_raw()
    }
}

/// Decode an extended class value from the front of `buf` into a `BigUint`, returning it with
/// the number of bytes consumed.
pub fn decode_biguint(buf: &[u8]) -> Result<(BigUint, usize), DecodeError> {
    raw::decode_extended(buf).map(|(v, len)| (v.into(), len))
}

/// Arbitrary precision `zigzag_encode()`.
///
/// ```
/// use num_bigint::{BigInt, BigUint};
///
/// assert_eq!(bijective_varint::zigzag_encode_big(&BigInt::from(-2)), BigUint::from(3u8));
/// ```
pub fn zigzag_encode_big(v: &BigInt) -> BigUint {
    let magnitude = v.magnitude() << 1usize;
    if v.sign() == Sign::Minus {
        magnitude - 1u32
    } else {
        magnitude
    }
}

/// Inverts `zigzag_encode_big()`.
pub fn zigzag_decode_big(v: &BigUint) -> BigInt {
    if v.trailing_zeros() == Some(0) {
        -BigInt::from((v + 1u32) >> 1usize)
    } else {
        BigInt::from(v >> 1usize)
    }
}
