#![no_main]
use libfuzzer_sys::fuzz_target;
use zenfbmp::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding must reproduce the declared stream
    let Ok(decoded) = DecodeRequest::new(data)
        .with_trailing_data(TrailingData::Ignore)
        .decode()
    else {
        return;
    };

    let reencoded = encode(decoded.width, decoded.height, decoded.pixels())
        .expect("decoded image must re-encode");
    assert_eq!(&reencoded[..], &data[..reencoded.len()], "roundtrip byte mismatch");

    let decoded2 = decode(&reencoded).expect("re-encoded data failed to decode");
    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
    assert_eq!(decoded.width, decoded2.width);
    assert_eq!(decoded.height, decoded2.height);
});
