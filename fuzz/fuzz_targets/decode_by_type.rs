#![no_main]

use amqf_types::TypeName;
use libfuzzer_sys::fuzz_target;

// Fuzz target: typed decoding. The first byte picks the field type name.
fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let name = TypeName::ALL[usize::from(selector) % TypeName::ALL.len()];

    if let Ok((consumed, _)) = amqf_decoder::decode_by_type(rest, name.as_str()) {
        assert!(consumed <= rest.len());
    }
});
