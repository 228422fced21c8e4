#![no_main]

use libfuzzer_sys::fuzz_target;

use aeskeywrap::{from_string, to_string, Encoding};

fuzz_target!(|data: &str| {
    // Decoding arbitrary strings in every encoding - should never panic.
    for encoding in [
        Encoding::Hex,
        Encoding::Base64,
        Encoding::Base64Url,
        Encoding::Utf8,
        Encoding::Latin1,
    ] {
        if let Ok(bytes) = from_string(data, encoding) {
            // Anything that decoded must re-encode.
            let _ = to_string(&bytes, encoding);
        }
    }
});
