use crate::{raw, table, MAX_LEN_EXTENDED, MAX_SAFE_INTEGER};

/// Errors that may occur when encoding a value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum EncodeError {
    /// The value is negative. Fold signed values with a zigzag transform first.
    #[error("negative value passed to an unsigned varint encoder")]
    OutOfRange,
    /// The value exceeds the ceiling of the codec (`2^53 - 1` native, `2^128 - 1` extended).
    #[error("value exceeds the largest encodable varint")]
    PrecisionLoss,
}

/// Errors that may occur when decoding a value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DecodeError {
    /// Reached end-of-buffer unexpectedly.
    ///
    /// This may happen if you attempt to decode an empty buffer or if the buffer is too short to
    /// contain the length declared by the marker.
    #[error("unexpected end of buffer while decoding varint")]
    UnexpectedEnd,
    /// The encoded value is larger than the codec ceiling or the destination type.
    #[error("decoded varint does not fit the destination")]
    PrecisionLoss,
}

/// Integer types accepted by the native codec, whose domain is `[0, MAX_SAFE_INTEGER]`.
pub trait NativeInt: Sized + Copy {
    /// Converts `self` to the raw value the native codec writes. Fails with `OutOfRange` if
    /// `self` is negative and with `PrecisionLoss` if it exceeds `MAX_SAFE_INTEGER`.
    fn to_native_raw(self) -> Result<u64, EncodeError>;
    /// Converts a decoded raw value back to `Self`, or `None` if it does not fit.
    fn from_native_raw(raw: u64) -> Option<Self>;
}

/// Values accepted by the extended codec, whose domain is `[0, 2^128 - 1]`.
pub trait ExtendedInt: Sized {
    /// Converts `self` to the raw value the extended codec writes. Fails with `OutOfRange` if
    /// `self` is negative and with `PrecisionLoss` if it exceeds `2^128 - 1`.
    fn to_extended_raw(self) -> Result<u128, EncodeError>;
}

/// Types an extended class value can be decoded into.
pub trait FromExtended: Sized {
    /// Converts a decoded raw value to `Self`, or `None` if it does not fit.
    fn from_extended_raw(raw: u128) -> Option<Self>;
}

#[inline(always)]
fn check_safe(raw: Option<u64>) -> Result<u64, EncodeError> {
    match raw {
        Some(raw) if raw <= MAX_SAFE_INTEGER => Ok(raw),
        _ => Err(EncodeError::PrecisionLoss),
    }
}

macro_rules! impl_unsigned {
    ($($int:ty),*) => {$(
        impl NativeInt for $int {
            #[inline(always)]
            fn to_native_raw(self) -> Result<u64, EncodeError> {
                check_safe(u64::try_from(self).ok())
            }
            #[inline(always)]
            fn from_native_raw(raw: u64) -> Option<Self> {
                raw.try_into().ok()
            }
        }

        impl ExtendedInt for $int {
            #[inline(always)]
            fn to_extended_raw(self) -> Result<u128, EncodeError> {
                u128::try_from(self).map_err(|_| EncodeError::PrecisionLoss)
            }
        }

        impl FromExtended for $int {
            #[inline(always)]
            fn from_extended_raw(raw: u128) -> Option<Self> {
                raw.try_into().ok()
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($int:ty),*) => {$(
        impl NativeInt for $int {
            #[inline(always)]
            fn to_native_raw(self) -> Result<u64, EncodeError> {
                if self < 0 {
                    return Err(EncodeError::OutOfRange);
                }
                check_safe(u64::try_from(self).ok())
            }
            #[inline(always)]
            fn from_native_raw(raw: u64) -> Option<Self> {
                raw.try_into().ok()
            }
        }

        impl ExtendedInt for $int {
            #[inline(always)]
            fn to_extended_raw(self) -> Result<u128, EncodeError> {
                u128::try_from(self).map_err(|_| EncodeError::OutOfRange)
            }
        }

        impl FromExtended for $int {
            #[inline(always)]
            fn from_extended_raw(raw: u128) -> Option<Self> {
                raw.try_into().ok()
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64, usize);
impl_signed!(i8, i16, i32, i64, isize);

impl ExtendedInt for u128 {
    #[inline(always)]
    fn to_extended_raw(self) -> Result<u128, EncodeError> {
        Ok(self)
    }
}

impl FromExtended for u128 {
    #[inline(always)]
    fn from_extended_raw(raw: u128) -> Option<Self> {
        Some(raw)
    }
}

impl ExtendedInt for i128 {
    #[inline(always)]
    fn to_extended_raw(self) -> Result<u128, EncodeError> {
        u128::try_from(self).map_err(|_| EncodeError::OutOfRange)
    }
}

impl FromExtended for i128 {
    #[inline(always)]
    fn from_extended_raw(raw: u128) -> Option<Self> {
        raw.try_into().ok()
    }
}

/// A single encoded value produced by [`encode`] or [`encode_extended`].
/// Use `as_slice()` to access the encoded bytes.
#[derive(Clone, Copy)]
pub struct EncodedVarint {
    buf: [u8; MAX_LEN_EXTENDED],
    len: u8,
}

#[allow(clippy::len_without_is_empty)]
impl EncodedVarint {
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    /// Returns the number of bytes used to encode the value.
    pub fn len(&self) -> usize {
        self.len as usize
    }
}

impl Default for EncodedVarint {
    fn default() -> Self {
        Self {
            buf: [0u8; MAX_LEN_EXTENDED],
            len: 0,
        }
    }
}

impl AsRef<[u8]> for EncodedVarint {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl std::fmt::Debug for EncodedVarint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("EncodedVarint")
            .field(&self.as_slice())
            .finish()
    }
}

/// Returns the number of bytes required to encode `value` with the native codec.
/// This value will always be in `[1, MAX_LEN]`.
#[inline]
pub fn encoded_len<V: NativeInt>(value: V) -> Result<usize, EncodeError> {
    Ok(table::native_band(value.to_native_raw()?) + 1)
}

/// Returns the number of bytes required to encode `value` with the extended codec.
/// This value will always be in `[1, MAX_LEN_EXTENDED]`.
#[inline]
pub fn encoded_len_extended<V: ExtendedInt>(value: V) -> Result<usize, EncodeError> {
    Ok(table::extended_band(value.to_extended_raw()?) + 1)
}

/// Encode `value` into `dst` starting at `offset` and return the number of bytes written.
///
/// # Errors
///
/// Returns `OutOfRange` for negative values and `PrecisionLoss` for values above
/// `MAX_SAFE_INTEGER`. Nothing is written on error.
///
/// # Panics
///
/// If `dst[offset..]` is shorter than the encoded length. Callers should reserve `MAX_LEN` bytes.
#[inline]
pub fn encode_into<V: NativeInt>(
    value: V,
    dst: &mut [u8],
    offset: usize,
) -> Result<usize, EncodeError> {
    let raw = value.to_native_raw()?;
    Ok(raw::encode_native(raw, &mut dst[offset..]))
}

/// Encode `value` to an owned buffer and return it.
///
/// ```
/// let enc = bijective_varint::encode(16511u32).unwrap();
/// assert_eq!(enc.as_slice(), &[0xbf, 0xff]);
/// ```
#[inline]
pub fn encode<V: NativeInt>(value: V) -> Result<EncodedVarint, EncodeError> {
    let mut enc = EncodedVarint::default();
    enc.len = encode_into(value, &mut enc.buf, 0)? as u8;
    Ok(enc)
}

/// Decode a native class value from the front of `buf` and return it with the number of bytes
/// consumed. Bytes after the encoded value are ignored.
///
/// # Errors
///
/// Returns `UnexpectedEnd` if `buf` is empty or shorter than its marker declares, and
/// `PrecisionLoss` if the value exceeds `MAX_SAFE_INTEGER` or does not fit in `V`.
#[inline]
pub fn decode<V: NativeInt>(buf: &[u8]) -> Result<(V, usize), DecodeError> {
    let (raw, len) = raw::decode_native(buf)?;
    Ok((
        V::from_native_raw(raw).ok_or(DecodeError::PrecisionLoss)?,
        len,
    ))
}

/// Encode `value` into `dst` starting at `offset` and return the number of bytes written.
///
/// Values that fit the native class produce the same bytes as [`encode_into`].
///
/// # Errors
///
/// Returns `OutOfRange` for negative values and `PrecisionLoss` for values above `2^128 - 1`.
///
/// # Panics
///
/// If `dst[offset..]` is shorter than the encoded length. Callers should reserve
/// `MAX_LEN_EXTENDED` bytes.
#[inline]
pub fn encode_into_extended<V: ExtendedInt>(
    value: V,
    dst: &mut [u8],
    offset: usize,
) -> Result<usize, EncodeError> {
    let raw = value.to_extended_raw()?;
    Ok(raw::encode_extended(raw, &mut dst[offset..]))
}

/// Encode `value` to an owned buffer and return it.
#[inline]
pub fn encode_extended<V: ExtendedInt>(value: V) -> Result<EncodedVarint, EncodeError> {
    let mut enc = EncodedVarint::default();
    enc.len = encode_into_extended(value, &mut enc.buf, 0)? as u8;
    Ok(enc)
}

/// Decode an extended class value from the front of `buf` and return it with the number of
/// bytes consumed.
///
/// # Errors
///
/// Returns `UnexpectedEnd` if `buf` is empty or shorter than its marker declares, and
/// `PrecisionLoss` if the bytes describe a value above `2^128 - 1` or one that does not fit `V`.
#[inline]
pub fn decode_extended<V: FromExtended>(buf: &[u8]) -> Result<(V, usize), DecodeError> {
    let (raw, len) = raw::decode_extended(buf)?;
    Ok((
        V::from_extended_raw(raw).ok_or(DecodeError::PrecisionLoss)?,
        len,
    ))
}
