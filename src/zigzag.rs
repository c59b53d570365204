//! [Zigzag](https://protobuf.dev/programming-guides/encoding/#signed-ints) mapping between signed
//! values and the unsigned domain the codecs accept: `0 -> 0, -1 -> 1, 1 -> 2, -2 -> 3, ...`

/// Maps negative values to positive values, creating a sequence that alternates between negative
/// and positive values. This makes the value more amenable to efficient varint encoding.
///
/// ```
/// assert_eq!(bijective_varint::zigzag_encode(-2), 3);
/// assert_eq!(bijective_varint::zigzag_encode(i32::MAX.into()), 4294967294);
/// ```
#[inline]
pub fn zigzag_encode(v: i64) -> u64 {
    ((v >> 63) ^ (v << 1)) as u64
}

/// Inverts `zigzag_encode()`.
#[inline]
pub fn zigzag_decode(v: u64) -> i64 {
    (v >> 1) as i64 ^ -(v as i64 & 1)
}

/// 128-bit form of `zigzag_encode()`; agrees with it on every `i64`.
#[inline]
pub fn zigzag_encode_extended(v: i128) -> u128 {
    ((v >> 127) ^ (v << 1)) as u128
}

/// Inverts `zigzag_encode_extended()`.
#[inline]
pub fn zigzag_decode_extended(v: u128) -> i128 {
    (v >> 1) as i128 ^ -(v as i128 & 1)
}
