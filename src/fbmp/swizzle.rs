//! R/B channel swap between native BGRA and RGBA.
//!
//! Works on byte positions only, so the result is the same on every host
//! regardless of endianness. The swap is its own inverse and serves both the
//! decode and the encode direction.

/// Swap bytes 0 and 2 of one pixel: `(b0, b1, b2, b3) -> (b2, b1, b0, b3)`.
#[inline]
pub const fn swap_pixel(px: [u8; 4]) -> [u8; 4] {
    [px[2], px[1], px[0], px[3]]
}

/// Apply [`swap_pixel`] to every whole 4-byte group of `buf`.
///
/// A trailing partial pixel is left untouched.
pub fn swap_channels_in_place(buf: &mut [u8]) {
    let whole = buf.len() - buf.len() % 4;
    let buf = &mut buf[..whole];
    if buf.is_empty() {
        return;
    }
    #[cfg(feature = "simd")]
    if garb::bytes::rgba_to_bgra_inplace(buf).is_ok() {
        return;
    }
    swap_scalar(buf);
}

fn swap_scalar(buf: &mut [u8]) {
    for px in buf.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
}
