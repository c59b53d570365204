#![no_main]

use bijective_varint::{VarintBuf, VarintBufMut, MAX_SAFE_INTEGER};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let values = data
        .chunks_exact(8)
        .map(|chunk| {
            let mut buf = [0; 8];
            buf.copy_from_slice(chunk);
            u64::from_le_bytes(buf) & MAX_SAFE_INTEGER
        })
        .collect::<Vec<_>>();

    let mut dst = vec![];
    for n in values.iter() {
        dst.put_varint(*n).unwrap();
    }

    let mut src = &dst[..];
    for n in values.iter() {
        assert_eq!(src.get_varint::<u64>().unwrap(), *n);
    }
    assert!(src.is_empty());
});
