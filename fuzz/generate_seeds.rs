#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn fbmp(width: u32, height: u32, pixels: &[u8]) -> Vec<u8> {
    let mut out = b"fbmp".to_vec();
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(pixels);
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 2x1 BGRA: red, blue with alpha 0xAA
    let two = fbmp(2, 1, &[0x00, 0x00, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0xAA]);
    fs::write(format!("{dir}/fbmp_2x1.fbmp"), two).unwrap();

    // 3x2 gradient
    let grad: Vec<u8> = (0..24u8).map(|i| i * 10).collect();
    fs::write(format!("{dir}/fbmp_3x2.fbmp"), fbmp(3, 2, &grad)).unwrap();

    // Zero-area
    fs::write(format!("{dir}/fbmp_0x0.fbmp"), fbmp(0, 0, &[])).unwrap();
    fs::write(format!("{dir}/fbmp_0x9.fbmp"), fbmp(0, 9, &[])).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_magic.bin"), b"fbmp").unwrap();
    fs::write(format!("{dir}/bad_magic.bin"), b"pmbf\x01\x00\x00\x00\x01\x00\x00\x00abcd").unwrap();
    fs::write(format!("{dir}/short_pixels.bin"), fbmp(2, 2, &[1, 2, 3])).unwrap();
    fs::write(format!("{dir}/trailing.bin"), fbmp(1, 1, &[1, 2, 3, 4, 5])).unwrap();
    fs::write(format!("{dir}/huge.bin"), fbmp(u32::MAX, u32::MAX, &[])).unwrap();

    println!("Generated seed corpus in {dir}/");
}
