#![no_main]

// Any bytes the codec accepts must re-encode to a stable form:
// decode(encode(decode(bytes))) encodes to the same bytes again.
// Bytes are compared rather than values so NaN payloads do not trip the check.

use libfuzzer_sys::fuzz_target;
use expr_roundtrip::{Codec, ProtoCodec};

fuzz_target!(|bytes: &[u8]| {
    let Ok(expr) = ProtoCodec.decode(bytes) else {
        return;
    };
    let first = ProtoCodec.encode(&expr).expect("encoding a decoded expression");
    let again = ProtoCodec.decode(&first).expect("decoding our own encoding");
    let second = ProtoCodec.encode(&again).expect("re-encoding");
    assert_eq!(first, second);
});
