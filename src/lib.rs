//! # zenfbmp
//!
//! FBMP (framebuffer bitmap) decoder and encoder.
//!
//! FBMP is a raw framebuffer dump: a 12-byte header (`"fbmp"` magic, width,
//! height, all u32 little-endian) followed by `width * height` pixels of
//! 4 bytes each in the framebuffer's native B, G, R, A order.
//!
//! Decoding produces RGBA; encoding takes RGBA. The channel swap between the
//! two is a byte-level R/B exchange and is its own inverse, so
//! `decode(encode(p)) == p` for every buffer.
//!
//! ## Validation
//!
//! Header dimensions are untrusted. `width * height * 4` is computed with
//! checked arithmetic and compared against the input length and any
//! configured [`Limits`] before a single pixel byte is allocated. Decoding
//! either returns the whole image or an error; there is no partial output.
//!
//! Zero-area images (`width == 0` or `height == 0`) are valid and decode to
//! an empty buffer. Bytes after the declared pixel region are rejected unless
//! [`TrailingData::Ignore`] is requested.
//!
//! ## Non-Goals
//!
//! - Compression
//! - Color management
//! - Animation / multiple frames
//! - Alpha premultiplication (alpha is carried through untouched)
//!
//! ## Usage
//!
//! ```
//! let rgba = [0xFF, 0x00, 0x00, 0xFF, 0x00, 0x00, 0xFF, 0xAA];
//!
//! let stream = zenfbmp::encode(2, 1, &rgba)?;
//! assert_eq!(&stream[..4], b"fbmp");
//! // Stored in native BGRA order.
//! assert_eq!(&stream[12..], &[0x00, 0x00, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0xAA]);
//!
//! let decoded = zenfbmp::decode(&stream)?;
//! assert_eq!((decoded.width, decoded.height), (2, 1));
//! assert_eq!(decoded.pixels(), &rgba);
//! # Ok::<(), zenfbmp::FormatError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod encode;
mod error;
mod fbmp;
mod info;
mod limits;
mod pixel;

use alloc::vec::Vec;

// Re-exports
pub use decode::{DecodeOutput, DecodeRequest, TrailingData};
pub use encode::EncodeRequest;
pub use error::{FormatError, LimitKind};
pub use fbmp::{
    FbmpHeader, HEADER_LEN, MAGIC, MAGIC_BYTES, is_fbmp, parse_header, serialize_header,
    swap_channels_in_place, swap_pixel,
};
pub use info::{FBMP, FormatDescriptor, ImageInfo};
pub use limits::Limits;
pub use pixel::PixelLayout;

/// Decode an FBMP stream to RGBA pixels.
///
/// Trailing bytes after the pixel region are rejected. Use [`DecodeRequest`]
/// for limits or a different trailing-data policy.
pub fn decode(data: &[u8]) -> Result<DecodeOutput<'static>, FormatError> {
    DecodeRequest::new(data).decode()
}

/// Decode an FBMP stream without the channel swap.
///
/// The returned pixels borrow from `data` and are in native BGRA order.
pub fn decode_native(data: &[u8]) -> Result<DecodeOutput<'_>, FormatError> {
    DecodeRequest::new(data).decode_native()
}

/// Encode RGBA pixels to an FBMP stream.
///
/// `pixels.len()` must be exactly `width * height * 4`.
pub fn encode(width: u32, height: u32, pixels: &[u8]) -> Result<Vec<u8>, FormatError> {
    EncodeRequest::new().encode(pixels, width, height, PixelLayout::Rgba8)
}

/// Encode typed RGBA pixels to an FBMP stream.
#[cfg(feature = "rgb")]
pub fn encode_rgba8(
    pixels: &[rgb::Rgba<u8>],
    width: u32,
    height: u32,
) -> Result<Vec<u8>, FormatError> {
    EncodeRequest::new().encode_rgba8(pixels, width, height)
}

/// Encode an RGBA image to an FBMP stream.
#[cfg(feature = "imgref")]
pub fn encode_imgref(img: imgref::ImgRef<'_, rgb::Rgba<u8>>) -> Result<Vec<u8>, FormatError> {
    EncodeRequest::new().encode_imgref(img)
}
