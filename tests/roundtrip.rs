use zenfbmp::*;

#[test]
fn reference_stream_decodes_to_rgba() {
    let mut stream = vec![0x66, 0x62, 0x6D, 0x70];
    stream.extend_from_slice(&2u32.to_le_bytes());
    stream.extend_from_slice(&1u32.to_le_bytes());
    stream.extend_from_slice(&[0x00, 0x00, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0xAA]);

    let decoded = decode(&stream).unwrap();
    assert_eq!(decoded.width, 2);
    assert_eq!(decoded.height, 1);
    assert_eq!(decoded.layout(), PixelLayout::Rgba8);
    assert_eq!(
        decoded.pixels(),
        &[0xFF, 0x00, 0x00, 0xFF, 0x00, 0x00, 0xFF, 0xAA]
    );

    // And back again, byte for byte.
    assert_eq!(encode(2, 1, decoded.pixels()).unwrap(), stream);
}

#[test]
fn rgba_roundtrip() {
    let w = 3;
    let h = 2;
    let pixels = vec![
        255, 0, 0, 255, 0, 255, 0, 128, 0, 0, 255, 0, // row 0
        128, 128, 128, 255, 1, 2, 3, 4, 250, 251, 252, 253, // row 1
    ];

    let encoded = encode(w, h, &pixels).unwrap();
    assert_eq!(encoded.len(), HEADER_LEN + pixels.len());

    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.width, w);
    assert_eq!(decoded.height, h);
    assert_eq!(decoded.pixels(), &pixels[..]);
    assert!(!decoded.is_borrowed());
}

#[test]
fn alpha_is_not_premultiplied() {
    // Colour under zero alpha must survive untouched.
    let pixels = vec![200, 100, 50, 0];
    let decoded = decode(&encode(1, 1, &pixels).unwrap()).unwrap();
    assert_eq!(decoded.pixels(), &pixels[..]);
}

#[test]
fn zero_area_images_are_empty() {
    for (w, h) in [(0, 0), (0, 5), (5, 0)] {
        let encoded = encode(w, h, &[]).unwrap();
        assert_eq!(encoded, serialize_header(w, h));

        let decoded = decode(&encoded).unwrap();
        assert_eq!((decoded.width, decoded.height), (w, h));
        assert!(decoded.pixels().is_empty());
    }
}

#[test]
fn native_decode_matches_stored_bytes() {
    let pixels = vec![10, 20, 30, 40, 50, 60, 70, 80];
    let encoded = encode(1, 2, &pixels).unwrap();

    let native = decode_native(&encoded).unwrap();
    assert_eq!(native.layout(), PixelLayout::Bgra8);
    assert!(native.is_borrowed());
    assert_eq!(native.pixels(), &[30, 20, 10, 40, 70, 60, 50, 80]);

    // Re-encoding the native view as BGRA reproduces the stream.
    let reencoded = EncodeRequest::new()
        .encode(native.pixels(), 1, 2, PixelLayout::Bgra8)
        .unwrap();
    assert_eq!(reencoded, encoded);
}

#[test]
fn rgb_input_becomes_opaque() {
    let rgb = vec![255, 0, 0, 0, 255, 0];
    let encoded = EncodeRequest::new()
        .encode(&rgb, 2, 1, PixelLayout::Rgb8)
        .unwrap();
    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.pixels(), &[255, 0, 0, 255, 0, 255, 0, 255]);
}

#[test]
fn gray_input_becomes_opaque() {
    let gray = vec![0, 128, 255];
    let encoded = EncodeRequest::new()
        .encode(&gray, 3, 1, PixelLayout::Gray8)
        .unwrap();
    let decoded = decode(&encoded).unwrap();
    assert_eq!(
        decoded.pixels(),
        &[0, 0, 0, 255, 128, 128, 128, 255, 255, 255, 255, 255]
    );
}

#[test]
fn image_info_probe() {
    let encoded = encode(1, 2, &[0u8; 8]).unwrap();
    assert!(is_fbmp(&encoded));

    let info = ImageInfo::from_bytes(&encoded).unwrap();
    assert_eq!(info.width, 1);
    assert_eq!(info.height, 2);
    assert_eq!(info.native_layout, PixelLayout::Bgra8);
    assert_eq!(info.stream_len, encoded.len());
}

#[test]
fn limits_reject_large() {
    let encoded = encode(1, 2, &[0u8; 8]).unwrap();

    let limits = Limits {
        max_pixels: Some(1), // only 1 pixel allowed
        ..Default::default()
    };

    let result = DecodeRequest::new(&encoded).with_limits(&limits).decode();
    match result.unwrap_err() {
        FormatError::LimitExceeded(LimitKind::Pixels { pixels: 2, max: 1 }) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn encode_into_appends() {
    let mut out = b"prefix".to_vec();
    EncodeRequest::new()
        .encode_into(&mut out, &[1, 2, 3, 4], 1, 1, PixelLayout::Rgba8)
        .unwrap();
    assert_eq!(&out[..6], b"prefix");
    let decoded = decode(&out[6..]).unwrap();
    assert_eq!(decoded.pixels(), &[1, 2, 3, 4]);
}

#[cfg(feature = "rgb")]
#[test]
fn typed_roundtrip() {
    let pixels = vec![
        rgb::Rgba::new(255u8, 0, 0, 255),
        rgb::Rgba::new(0, 255, 0, 128),
        rgb::Rgba::new(0, 0, 255, 0),
        rgb::Rgba::new(128, 128, 128, 255),
    ];
    let encoded = encode_rgba8(&pixels, 2, 2).unwrap();
    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.as_pixels().unwrap(), &pixels[..]);
}

#[cfg(feature = "imgref")]
#[test]
fn imgref_roundtrip() {
    let pixels: Vec<rgb::Rgba<u8>> = (0..12u8)
        .map(|i| rgb::Rgba::new(i, i * 2, i * 3, 255 - i))
        .collect();
    let img = imgref::ImgVec::new(pixels, 4, 3);
    let encoded = encode_imgref(img.as_ref()).unwrap();
    let decoded = decode(&encoded).unwrap();
    let back = decoded.to_imgvec().unwrap();
    assert_eq!(back.width(), 4);
    assert_eq!(back.height(), 3);
    assert_eq!(back.buf(), img.buf());
}

#[cfg(feature = "imgref")]
#[test]
fn imgref_zero_area_roundtrip() {
    for (w, h) in [(0u32, 5u32), (5, 0), (0, 0)] {
        let decoded = decode(&encode(w, h, &[]).unwrap()).unwrap();
        let view = decoded.as_imgref().unwrap();
        assert_eq!((view.width(), view.height()), (w as usize, h as usize));
        let owned = decoded.to_imgvec().unwrap();
        assert!(owned.buf().is_empty(), "{w}x{h}");
        assert_eq!(encode_imgref(view).unwrap(), serialize_header(w, h));
    }
}
