//! Extensions to `std::io` traits to support reading/writing varints.
use std::io::{BufRead, Error, ErrorKind, Read, Result, Write};

use crate::{
    core, oracle, DecodeError, EncodeError, ExtendedInt, FromExtended, NativeInt,
    MAX_LEN_EXTENDED,
};

impl From<DecodeError> for Error {
    fn from(value: DecodeError) -> Self {
        let kind = match value {
            DecodeError::UnexpectedEnd => ErrorKind::UnexpectedEof,
            DecodeError::PrecisionLoss => ErrorKind::InvalidData,
        };
        Error::new(kind, value)
    }
}

impl From<EncodeError> for Error {
    fn from(value: EncodeError) -> Self {
        Error::new(ErrorKind::InvalidInput, value)
    }
}

/// Encode a native class value and write it to `w`. Returns the number of bytes written.
#[inline]
pub fn write_varint<V: NativeInt>(v: V, w: &mut impl Write) -> Result<usize> {
    let v = core::encode(v)?;
    w.write_all(v.as_slice())?;
    Ok(v.len())
}

/// Encode an extended class value and write it to `w`. Returns the number of bytes written.
#[inline]
pub fn write_varint_extended<V: ExtendedInt>(v: V, w: &mut impl Write) -> Result<usize> {
    let v = core::encode_extended(v)?;
    w.write_all(v.as_slice())?;
    Ok(v.len())
}

/// Reads the marker one byte at a time and then the rest of the value, returning its length.
fn read_encoded(r: &mut impl Read, buf: &mut [u8; MAX_LEN_EXTENDED]) -> Result<usize> {
    let mut read = 0;
    let len = loop {
        r.read_exact(&mut buf[read..(read + 1)])?;
        read += 1;
        match oracle::bytes_used(&buf[..read]) {
            Ok(len) => break len,
            Err(DecodeError::UnexpectedEnd) => continue,
            Err(e) => return Err(e.into()),
        }
    };
    r.read_exact(&mut buf[read..len]).map_err(|e| {
        tracing::trace!(len, error = %e, "reader ended inside varint payload");
        e
    })?;
    Ok(len)
}

/// Read and decode a native class value from `r`.
/// Prefer `read_varint_buf()` wherever possible as it should be more efficient.
#[inline]
pub fn read_varint<V: NativeInt>(r: &mut impl Read) -> Result<V> {
    let mut buf = [0u8; MAX_LEN_EXTENDED];
    let len = read_encoded(r, &mut buf)?;
    core::decode(&buf[..len])
        .map(|(v, _)| v)
        .map_err(|e| e.into())
}

/// Read and decode an extended class value from `r`.
#[inline]
pub fn read_varint_extended<V: FromExtended>(r: &mut impl Read) -> Result<V> {
    let mut buf = [0u8; MAX_LEN_EXTENDED];
    let len = read_encoded(r, &mut buf)?;
    core::decode_extended(&buf[..len])
        .map(|(v, _)| v)
        .map_err(|e| e.into())
}

/// Read and decode a native class value from `r`.
#[inline]
pub fn read_varint_buf<V: NativeInt>(r: &mut impl BufRead) -> Result<V> {
    let buf = r.fill_buf()?;
    if oracle::buf_contains_varint(buf) {
        let (v, len) = core::decode(buf).map_err(Error::from)?;
        r.consume(len);
        Ok(v)
    } else {
        read_varint(r)
    }
}
