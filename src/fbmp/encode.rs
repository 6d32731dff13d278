//! FBMP encoder.

use alloc::vec::Vec;

use crate::error::FormatError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

use super::{FbmpHeader, HEADER_LEN, checked_len, swap_channels_in_place};

/// Append an FBMP stream for `pixels` to `out`.
///
/// `Rgba8` is swizzled to native order, `Bgra8` is copied as is, `Rgb8` and
/// `Gray8` are expanded with alpha = 255. On error `out` is left unchanged.
pub(crate) fn encode_into(
    out: &mut Vec<u8>,
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    limits: Option<&Limits>,
) -> Result<(), FormatError> {
    let header = FbmpHeader::new(width, height);
    let pixel_len = header.pixel_data_len()?;
    let total = pixel_len.checked_add(HEADER_LEN).ok_or(header.overflow())?;

    let expected = checked_len(width, height, layout.bytes_per_pixel())?;
    if pixels.len() != expected {
        log::debug!(
            "fbmp: {width}x{height} {layout:?} needs {expected} bytes, got {}",
            pixels.len()
        );
        return Err(FormatError::SizeMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    if let Some(limits) = limits {
        limits.check(width, height)?;
        limits.check_memory(pixel_len)?;
    }

    log::trace!("fbmp: encoding {width}x{height} from {layout:?}");

    out.reserve(total);
    out.extend_from_slice(&header.to_bytes());

    match layout {
        PixelLayout::Rgba8 => {
            let start = out.len();
            out.extend_from_slice(pixels);
            swap_channels_in_place(&mut out[start..]);
        }
        PixelLayout::Bgra8 => out.extend_from_slice(pixels),
        PixelLayout::Rgb8 => {
            for px in pixels.chunks_exact(3) {
                out.extend_from_slice(&[px[2], px[1], px[0], 255]);
            }
        }
        PixelLayout::Gray8 => {
            for &g in pixels {
                out.extend_from_slice(&[g, g, g, 255]);
            }
        }
    }

    Ok(())
}
