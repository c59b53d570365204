//! Routines for working with raw (`u64` / `u128`) values.
//!
//! Other types should be shuffled to/from raw values using the
//! `core::{NativeInt,ExtendedInt,FromExtended}` traits. Bands `0..=7` fit their marker in the first byte and are coded with 64-bit arithmetic;
//! longer bands prefix the marker byte with `band / 8` bytes of `0xff`.

use crate::table::{extended_band, extended_lower, native_band, native_lower};
use crate::{oracle, DecodeError, MAX_1BYTE_TAG, MAX_SAFE_INTEGER};

/// Marker byte for a marker of `ones` leading one bits (`ones < 8`) followed by a zero bit.
#[inline(always)]
const fn tag_prefix(ones: usize) -> u8 {
    !(u8::MAX >> ones)
}

/// Mask for the payload bits that share a byte with a marker of `ones` leading one bits.
#[inline(always)]
const fn tag_payload_mask(ones: usize) -> u8 {
    0x7f >> ones
}

/// Encodes `v` (at most `MAX_SAFE_INTEGER`) to `dst`, returning the number of bytes written.
///
/// # Panics
///
/// If `dst` is shorter than the encoded length.
#[inline]
pub(crate) fn encode_native(v: u64, dst: &mut [u8]) -> usize {
    if v <= u64::from(MAX_1BYTE_TAG) {
        dst[0] = v as u8;
        return 1;
    }

    let band = native_band(v);
    let len = band + 1;
    let be = (v - native_lower(band)).to_be_bytes();
    dst[0] = tag_prefix(band) | be[7 - band];
    dst[1..len].copy_from_slice(&be[8 - band..]);
    len
}

/// Encodes `v` to `dst`, returning the number of bytes written.
///
/// # Panics
///
/// If `dst` is shorter than the encoded length.
pub(crate) fn encode_extended(v: u128, dst: &mut [u8]) -> usize {
    if v <= u128::from(MAX_SAFE_INTEGER) {
        return encode_native(v as u64, dst);
    }

    let band = extended_band(v);
    let len = band + 1;
    let (full, ones) = (band / 8, band % 8);
    // Payload bytes following the marker byte.
    let tail = band - full;
    let be = (v - extended_lower(band)).to_be_bytes();
    dst[..full].fill(u8::MAX);
    let head = if tail < be.len() { be[15 - tail] } else { 0 };
    dst[full] = tag_prefix(ones) | head;
    dst[full + 1..len].copy_from_slice(&be[16 - tail..]);
    len
}

/// Decodes a value whose first byte is `tag` and whose marker ends in that byte.
///
/// The result may exceed `MAX_SAFE_INTEGER`; callers enforce their own ceiling.
#[inline]
fn decode_short(tag: u8, buf: &[u8]) -> Result<(u64, usize), DecodeError> {
    debug_assert!(tag != u8::MAX);
    if tag <= MAX_1BYTE_TAG {
        return Ok((tag.into(), 1));
    }

    let band = tag.leading_ones() as usize;
    let len = band + 1;
    let body = buf.get(1..len).ok_or(DecodeError::UnexpectedEnd)?;
    let mut be = [0u8; 8];
    be[8 - band..].copy_from_slice(body);
    be[7 - band] = tag & tag_payload_mask(band);
    // Band 7 payloads are below 2^56 and its lower bound below 2^50, so this cannot overflow.
    Ok((u64::from_be_bytes(be) + native_lower(band), len))
}

/// Decodes a native class value from the front of `buf`, returning it and the bytes consumed.
#[inline]
pub(crate) fn decode_native(buf: &[u8]) -> Result<(u64, usize), DecodeError> {
    let &tag = buf.first().ok_or(DecodeError::UnexpectedEnd)?;
    let (v, len) = if tag == u8::MAX {
        let (v, len) = decode_extended(buf)?;
        (u64::try_from(v).map_err(|_| DecodeError::PrecisionLoss)?, len)
    } else {
        decode_short(tag, buf)?
    };
    if v > MAX_SAFE_INTEGER {
        return Err(DecodeError::PrecisionLoss);
    }
    Ok((v, len))
}

/// Decodes an extended class value from the front of `buf`, returning it and the bytes consumed.
pub(crate) fn decode_extended(buf: &[u8]) -> Result<(u128, usize), DecodeError> {
    let &tag = buf.first().ok_or(DecodeError::UnexpectedEnd)?;
    if tag != u8::MAX {
        return decode_short(tag, buf).map(|(v, len)| (v.into(), len));
    }

    let len = oracle::bytes_used(buf)?;
    let bytes = buf.get(..len).ok_or(DecodeError::UnexpectedEnd)?;
    let band = len - 1;
    let (full, ones) = (band / 8, band % 8);
    let tail = band - full;
    let head = bytes[full] & tag_payload_mask(ones);
    let mut be = [0u8; 16];
    be[16 - tail..].copy_from_slice(&bytes[full + 1..]);
    if tail < be.len() {
        be[15 - tail] = head;
    } else if head != 0 {
        // The widest band has 5 payload bits more than u128 can hold.
        return Err(DecodeError::PrecisionLoss);
    }
    extended_lower(band)
        .checked_add(u128::from_be_bytes(be))
        .map(|v| (v, len))
        .ok_or(DecodeError::PrecisionLoss)
}
