#![no_main]

use bijective_varint::{read_varint, read_varint_buf, read_varint_extended};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // attempts to decode all the data are allowed to error, panics are not
    let mut src = data;
    while !src.is_empty() {
        if read_varint_extended::<u128>(&mut src).is_err() {
            break;
        }
    }

    let mut src = data;
    while read_varint::<u32>(&mut src).is_ok() {}

    // do buffered reader
    let mut src = data;
    let mut src = std::io::BufReader::new(&mut src);
    while read_varint_buf::<u64>(&mut src).is_ok() {}
});
