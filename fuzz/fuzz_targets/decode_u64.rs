#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // attempts to decode garbage may fail, but must not panic, and must re-encode identically
    if let Ok((v, len)) = bijective_varint::decode::<u64>(data) {
        let enc = bijective_varint::encode(v).unwrap();
        assert_eq!(enc.as_slice(), &data[..len]);
    }
});
