//! This module implements a bijective, prefix-length variable length integer coding scheme.
//!
//! Each value is written as a unary length marker (`n` one bits followed by a zero bit) and a
//! big endian payload, so an encoding of `n + 1` bytes carries exactly `7 * (n + 1)` payload bits
//! and its length can be read from the leading bits alone. Unlike a plain prefix varint every
//! length band is offset by the first value the shorter bands cannot hold, which makes the bands
//! disjoint: every value has exactly one encoding and every encoding exactly one value.
//!
//! Two magnitude classes are supported:
//!
//! * the native class covers `[0, 2^53 - 1]` ([`MAX_SAFE_INTEGER`]) and is coded with 64-bit
//!   arithmetic in at most [`MAX_LEN`] bytes.
//! * the extended class covers `[0, 2^128 - 1]` ([`MAX_VALUE_EXTENDED`]) in at most
//!   [`MAX_LEN_EXTENDED`] bytes. Values that fit the native class produce identical bytes.
//!
//! ```text
//! len  marker                payload   native values
//! 1    0                     7 bits    0 - 127
//! 2    10                    14 bits   128 - 16,511
//! 3    110                   21 bits   16,512 - 2,113,663
//! n    (n-1) ones, one zero  7n bits   [cutoff[n-2], cutoff[n-1])
//! ```
//!
//! Signed values are not mapped implicitly; use [`zigzag_encode`] and friends to fold them into
//! the unsigned domain first. Negative inputs to the encoders fail with
//! [`EncodeError::OutOfRange`].
//!
//! Values can be coded directly to/from byte slices, and traits are provided to extend
//! `bytes::{Buf,BufMut}` and to handle these values in `std::io::{Write,Read}`.
//!
//! ```
//! use bytes::Buf;
//! use bijective_varint::{VarintBuf, VarintBufMut};
//!
//! let mut value_buf = [0u8; bijective_varint::MAX_LEN];
//! assert_eq!(bijective_varint::encode_into(167894u64, &mut value_buf, 0), Ok(3));
//! assert_eq!(bijective_varint::decode::<u64>(&value_buf), Ok((167894, 3)));
//!
//! let mut buf_mut = vec![];
//! for v in (0u64..100).step_by(3) {
//!     buf_mut.put_varint(v).unwrap();
//! }
//!
//! let mut buf = buf_mut.as_slice();
//! while let Ok(v) = buf.get_varint::<u64>() {
//!     assert_eq!(v % 3, 0);
//! }
//! assert!(!buf.has_remaining());
//! ```
#[cfg(feature = "bigint")]
mod bigint;
mod bytes;
pub(crate) mod core;
mod io;
mod oracle;
mod raw;
mod table;
mod zigzag;

#[cfg(feature = "bigint")]
pub use crate::bigint::{decode_biguint, zigzag_decode_big, zigzag_encode_big};
pub use crate::bytes::{VarintBuf, VarintBufMut, VarintIter};
pub use crate::core::{
    decode, decode_extended, encode, encode_extended, encode_into, encode_into_extended,
    encoded_len, encoded_len_extended, DecodeError, EncodeError, EncodedVarint, ExtendedInt,
    FromExtended, NativeInt,
};
pub use crate::io::{
    read_varint, read_varint_buf, read_varint_extended, write_varint, write_varint_extended,
};
pub use crate::oracle::{buf_contains_varint, bytes_used, Class};
pub use crate::zigzag::{
    zigzag_decode, zigzag_decode_extended, zigzag_encode, zigzag_encode_extended,
};

/// Maximum number of bytes a single native class value will occupy.
pub const MAX_LEN: usize = 9;

/// Maximum number of bytes a single extended class value will occupy.
pub const MAX_LEN_EXTENDED: usize = 19;

/// Largest value accepted by the native codec, `2^53 - 1`.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Largest value accepted by the extended codec, `2^128 - 1`.
pub const MAX_VALUE_EXTENDED: u128 = u128::MAX;

/// Largest value that encodes to a single byte.
pub(crate) const MAX_1BYTE_TAG: u8 = 0x7f;

/// Highest band index (number of marker one bits) the extended class can produce.
pub(crate) const MAX_BAND: usize = MAX_LEN_EXTENDED - 1;
