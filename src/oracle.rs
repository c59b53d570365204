//! Length recovery for encoded values, including on partially received input.

use crate::{DecodeError, MAX_BAND, MAX_LEN, MAX_LEN_EXTENDED};

/// Magnitude class of a varint, selecting the longest encoding a reader must allow for.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Class {
    /// Values in `[0, 2^53 - 1]`, at most `MAX_LEN` bytes.
    Native,
    /// Values in `[0, 2^128 - 1]`, at most `MAX_LEN_EXTENDED` bytes.
    Extended,
}

impl Class {
    /// Maximum number of bytes a single value of this class occupies.
    pub const fn max_len(self) -> usize {
        match self {
            Class::Native => MAX_LEN,
            Class::Extended => MAX_LEN_EXTENDED,
        }
    }

    /// Returns true if `buf` is known to begin with a complete encoded value of this class.
    ///
    /// This only looks at the marker so it can be used to decide whether to wait for more input
    /// before decoding; it does not validate the payload.
    ///
    /// ```
    /// use bijective_varint::Class;
    ///
    /// assert!(!Class::Native.contains_varint(&[]));
    /// assert!(!Class::Native.contains_varint(&[0xc0, 0x01]));
    /// assert!(Class::Native.contains_varint(&[0xc0, 0x01, 0x02]));
    /// ```
    pub fn contains_varint(self, buf: &[u8]) -> bool {
        let max_len = self.max_len();
        if buf.is_empty() {
            return false;
        }
        if buf.len() >= max_len {
            return true;
        }

        let mut band = 0;
        for &byte in buf {
            band += byte.leading_ones() as usize;
            if byte != u8::MAX || band + 1 >= max_len {
                return buf.len() >= (band + 1).min(max_len);
            }
        }
        // The marker runs past the end of the buffer.
        false
    }
}

/// Returns true if `buf` is known to begin with a complete encoded value of any class.
#[inline]
pub fn buf_contains_varint(buf: &[u8]) -> bool {
    Class::Extended.contains_varint(buf)
}

/// Returns the total length of the value encoded at the front of `buf`, read from its marker.
///
/// Only the marker bytes need to be present; the payload is not inspected.
///
/// ```
/// assert_eq!(bijective_varint::bytes_used(&[0x7f]), Ok(1));
/// assert_eq!(bijective_varint::bytes_used(&[0xbf]), Ok(2));
/// assert_eq!(bijective_varint::bytes_used(&[0xff, 0x00]), Ok(9));
/// ```
///
/// # Errors
///
/// Returns `UnexpectedEnd` if the buffer ends inside the marker, and `PrecisionLoss` if the
/// marker is longer than any supported encoding.
pub fn bytes_used(buf: &[u8]) -> Result<usize, DecodeError> {
    let mut band = 0;
    for &byte in buf {
        band += byte.leading_ones() as usize;
        if band > MAX_BAND {
            tracing::trace!(band, "varint marker exceeds the extended class");
            return Err(DecodeError::PrecisionLoss);
        }
        if byte != u8::MAX {
            return Ok(band + 1);
        }
    }
    Err(DecodeError::UnexpectedEnd)
}
