#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: back-to-back value iteration.
//
// The reader must stop after the first error and never yield an offset
// past the end of the input.
fuzz_target!(|data: &[u8]| {
    let mut reader = amqf_decoder::ValueReader::new(data);
    for item in reader.by_ref() {
        match item {
            Ok((offset, _)) => assert!(offset < data.len()),
            Err(_) => break,
        }
    }
    assert!(reader.next().is_none());
});
