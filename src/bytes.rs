//! Traits that allow writing/reading varints on `bytes::{BufMut,Buf}`.

use crate::core::{self, EncodedVarint};
use crate::{
    oracle, DecodeError, EncodeError, ExtendedInt, FromExtended, NativeInt, MAX_LEN_EXTENDED,
};

use bytes::{Buf, BufMut};

/// Extension for `buf::BufMut` to write native and extended varints.
pub trait VarintBufMut {
    /// Writes a native class value to the buffer and returns the number of bytes written.
    fn put_varint<V: NativeInt>(&mut self, v: V) -> Result<usize, EncodeError>;

    /// Writes an extended class value to the buffer and returns the number of bytes written.
    fn put_varint_extended<V: ExtendedInt>(&mut self, v: V) -> Result<usize, EncodeError>;
}

fn put_encoded<B: BufMut>(enc: EncodedVarint, buf: &mut B) -> usize {
    buf.put_slice(enc.as_slice());
    enc.len()
}

impl<Inner: BufMut> VarintBufMut for Inner {
    #[inline]
    fn put_varint<V: NativeInt>(&mut self, v: V) -> Result<usize, EncodeError> {
        Ok(put_encoded(core::encode(v)?, self))
    }

    #[inline]
    fn put_varint_extended<V: ExtendedInt>(&mut self, v: V) -> Result<usize, EncodeError> {
        Ok(put_encoded(core::encode_extended(v)?, self))
    }
}

/// Copies the next encoded value out of `buf` into `scratch` one marker byte at a time, for
/// buffers whose current chunk does not hold the whole value. Returns the encoded length.
fn get_encoded_slow<B: Buf>(
    buf: &mut B,
    scratch: &mut [u8; MAX_LEN_EXTENDED],
) -> Result<usize, DecodeError> {
    let mut read = 0;
    let len = loop {
        if !buf.has_remaining() {
            tracing::trace!(read, "buffer ended inside varint marker");
            return Err(DecodeError::UnexpectedEnd);
        }
        scratch[read] = buf.get_u8();
        read += 1;
        match oracle::bytes_used(&scratch[..read]) {
            Ok(len) => break len,
            Err(DecodeError::UnexpectedEnd) => continue,
            Err(e) => return Err(e),
        }
    };

    let rem = len - read;
    if rem > buf.remaining() {
        tracing::trace!(
            needed = rem,
            remaining = buf.remaining(),
            "buffer ended inside varint payload"
        );
        buf.advance(buf.remaining());
        return Err(DecodeError::UnexpectedEnd);
    }
    buf.copy_to_slice(&mut scratch[read..len]);
    Ok(len)
}

/// Length of the value at the front of `chunk` if it is entirely within `chunk`. Over-long
/// markers return `None` and are rejected by the slow path.
#[inline]
fn contiguous_len(chunk: &[u8]) -> Option<usize> {
    if oracle::buf_contains_varint(chunk) {
        oracle::bytes_used(chunk).ok()
    } else {
        None
    }
}

/// Extension for `buf::Buf` to read native and extended varints.
pub trait VarintBuf {
    /// Reads a native class value from the buffer. After a successful read, the buffer will be
    /// advanced by the number of bytes read.
    ///
    /// # Examples
    ///
    /// ```
    /// use bijective_varint::{VarintBufMut, VarintBuf};
    ///
    /// let to_encode = [1u16, 2, 400];
    /// let mut buf = vec![];
    /// for v in &to_encode {
    ///    buf.put_varint(*v).unwrap();
    /// }
    ///
    /// let mut buf = &buf[..];
    /// for v in &to_encode {
    ///   let decoded = buf.get_varint::<u16>().unwrap();
    ///   assert_eq!(decoded, *v);
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an `UnexpectedEnd` error if the buffer is empty or if the buffer is not long
    /// enough to contain the full encoded value.
    ///
    /// Returns a `PrecisionLoss` error if the encoded value is outside the native class or larger
    /// than the maximum value that can be represented by `V`.
    ///
    /// After an error the buffer is advanced past every byte examined: the whole rejected value
    /// when its marker is valid, the marker bytes up to the first one that makes it over-long, or
    /// the rest of the buffer when it is truncated. Reading can resume after a rejected value.
    fn get_varint<V: NativeInt>(&mut self) -> Result<V, DecodeError>;

    /// Reads an extended class value from the buffer. Errors, and the position of the buffer
    /// after an error, are as for `get_varint()`.
    fn get_varint_extended<V: FromExtended>(&mut self) -> Result<V, DecodeError>;

    /// Returns an iterator over native class values in the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use bijective_varint::{VarintBufMut, VarintBuf};
    ///
    /// let to_encode = [1u32, 2, 30, 24_000];
    /// let mut buf = vec![];
    /// for n in to_encode.iter() {
    ///     buf.put_varint(*n).unwrap();
    /// }
    /// let mut result = vec![];
    /// let mut decode_data = buf.as_slice();
    /// for decoded in decode_data.iter_varint::<u32>() {
    ///     result.push(decoded.unwrap());
    /// }
    /// assert_eq!(to_encode, result.as_slice());
    /// ```
    fn iter_varint<V: NativeInt>(&mut self) -> VarintIter<'_, Self, V>
    where
        Self: Sized,
    {
        VarintIter::new(self)
    }
}

impl<Inner: Buf> VarintBuf for Inner {
    #[inline]
    fn get_varint<V: NativeInt>(&mut self) -> Result<V, DecodeError> {
        if self.remaining() == 0 {
            return Err(DecodeError::UnexpectedEnd);
        }

        if let Some(len) = contiguous_len(self.chunk()) {
            let decoded = core::decode(&self.chunk()[..len]);
            self.advance(len);
            return decoded.map(|(v, _)| v);
        }

        let mut scratch = [0u8; MAX_LEN_EXTENDED];
        let len = get_encoded_slow(self, &mut scratch)?;
        core::decode(&scratch[..len]).map(|(v, _)| v)
    }

    #[inline]
    fn get_varint_extended<V: FromExtended>(&mut self) -> Result<V, DecodeError> {
        if self.remaining() == 0 {
            return Err(DecodeError::UnexpectedEnd);
        }

        if let Some(len) = contiguous_len(self.chunk()) {
            let decoded = core::decode_extended(&self.chunk()[..len]);
            self.advance(len);
            return decoded.map(|(v, _)| v);
        }

        let mut scratch = [0u8; MAX_LEN_EXTENDED];
        let len = get_encoded_slow(self, &mut scratch)?;
        core::decode_extended(&scratch[..len]).map(|(v, _)| v)
    }
}

/// An iterator over native class values in a `Buf`. Iteration stops after the first error.
pub struct VarintIter<'a, B, V> {
    buf: &'a mut B,
    failed: bool,
    _marker: std::marker::PhantomData<V>,
}

impl<'a, B, V> VarintIter<'a, B, V> {
    /// Creates a new `VarintIter`.
    pub fn new(buf: &'a mut B) -> Self {
        Self {
            buf,
            failed: false,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<'a, B, V> Iterator for VarintIter<'a, B, V>
where
    B: Buf,
    V: NativeInt,
{
    type Item = Result<V, DecodeError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || !self.buf.has_remaining() {
            return None;
        }
        let next = self.buf.get_varint();
        self.failed = next.is_err();
        Some(next)
    }
}
