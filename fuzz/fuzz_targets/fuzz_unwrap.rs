#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Interpret the input as KEK-length prefix plus wrapped bytes; unwrap
    // must reject or fail cleanly, never panic.
    for kek_len in [16usize, 24, 32] {
        if data.len() < kek_len {
            continue;
        }
        let (kek, wrapped_key) = data.split_at(kek_len);
        let _ = aeskeywrap::unwrap_key(wrapped_key, kek);
    }

    // Arbitrary KEK splits as well - should never panic.
    if let Some((kek, wrapped_key)) = data.split_first().map(|(n, rest)| {
        let split = (*n as usize).min(rest.len());
        rest.split_at(split)
    }) {
        let _ = aeskeywrap::unwrap_key(wrapped_key, kek);
    }
});
