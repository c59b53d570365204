#![no_main]

use bijective_varint::{buf_contains_varint, bytes_used, VarintBuf, VarintBufMut};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut dst = vec![];
    for chunk in data.chunks_exact(16) {
        let mut buf = [0; 16];
        buf.copy_from_slice(chunk);
        let n = u128::from_le_bytes(buf);
        let start = dst.len();
        let len = dst.put_varint_extended(n).unwrap();
        assert_eq!(bytes_used(&dst[start..]), Ok(len));
        for t in 0..len {
            assert!(!buf_contains_varint(&dst[start..start + t]));
        }
        assert!(buf_contains_varint(&dst[start..]));
    }

    let mut src = &dst[..];
    for chunk in data.chunks_exact(16) {
        let mut buf = [0; 16];
        buf.copy_from_slice(chunk);
        let n = u128::from_le_bytes(buf);
        assert_eq!(src.get_varint_extended::<u128>().unwrap(), n);
    }
});
