#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Every entry point must reject or accept without panicking
    let _ = zenfbmp::ImageInfo::from_bytes(data);
    let _ = zenfbmp::decode(data);
    let _ = zenfbmp::decode_native(data);
    let _ = zenfbmp::DecodeRequest::new(data)
        .with_trailing_data(zenfbmp::TrailingData::Ignore)
        .decode();
});
