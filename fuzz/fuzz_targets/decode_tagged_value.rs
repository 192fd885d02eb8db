#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: tagged value decoding from raw bytes.
//
// Catches bugs in:
// - Negative or oversized composite lengths
// - Elements that cross their container's end
// - Error offsets pointing past the input
fuzz_target!(|data: &[u8]| {
    match amqf_decoder::decode_tagged_value(data) {
        Ok((consumed, _)) => assert!(consumed <= data.len()),
        Err(amqf_decoder::DecodeError::TruncatedBuffer { offset, .. }) => {
            assert!(offset <= data.len());
        }
        Err(_) => {}
    }
});
