#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok((v, len)) = bijective_varint::decode_extended::<u128>(data) {
        let enc = bijective_varint::encode_extended(v).unwrap();
        assert_eq!(enc.as_slice(), &data[..len]);
        assert!(bijective_varint::buf_contains_varint(data));
    }
});
