//! FBMP (framebuffer bitmap) format internals.
//!
//! The container is a raw framebuffer dump:
//!
//! ```text
//! ╔═══════════╤══════════════════════════════════════════════════════╗
//! ║ Bytes     │ Description                                          ║
//! ╠═══════════╪══════════════════════════════════════════════════════╣
//! ║ 4         │ magic, u32 LE 0x706D6266 (ASCII "fbmp")              ║
//! ╟───────────┼──────────────────────────────────────────────────────╢
//! ║ 4         │ width, u32 LE                                        ║
//! ╟───────────┼──────────────────────────────────────────────────────╢
//! ║ 4         │ height, u32 LE                                       ║
//! ╟───────────┼──────────────────────────────────────────────────────╢
//! ║ [1111]    │ B, G, R, A u8 per pixel, row-major, no row padding   ║
//! ╚═══════════╧══════════════════════════════════════════════════════╝
//! ```

pub(crate) mod decode;
mod encode;
mod swizzle;

pub(crate) use encode::encode_into;
pub use swizzle::{swap_channels_in_place, swap_pixel};

use crate::error::FormatError;

/// Header magic, `b"fbmp"` read as a little-endian u32.
pub const MAGIC: u32 = 0x706D_6266;

/// The magic as it appears on disk.
pub const MAGIC_BYTES: [u8; 4] = MAGIC.to_le_bytes();

/// Size of the fixed header in bytes.
pub const HEADER_LEN: usize = 12;

/// Bytes per stored pixel.
pub(crate) const BYTES_PER_PIXEL: usize = 4;

/// The fixed 12-byte FBMP header.
///
/// The magic is implied: a value of this type only exists for a stream whose
/// magic matched [`MAGIC`]. Pixel data is owned separately by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FbmpHeader {
    pub width: u32,
    pub height: u32,
}

impl FbmpHeader {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parse the header from the start of `data`. See [`parse_header`].
    pub fn parse(data: &[u8]) -> Result<Self, FormatError> {
        let Some((header, _)) = data.split_first_chunk::<HEADER_LEN>() else {
            log::debug!("fbmp: header needs {HEADER_LEN} bytes, got {}", data.len());
            return Err(FormatError::Truncated {
                needed: HEADER_LEN,
                actual: data.len(),
            });
        };
        let magic = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);
        if magic != MAGIC {
            log::debug!("fbmp: bad magic {magic:#010x}");
            return Err(FormatError::BadMagic { found: magic });
        }
        let width = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);
        let height = u32::from_le_bytes([header[8], header[9], header[10], header[11]]);
        Ok(Self { width, height })
    }

    /// Serialize as magic, width, height (all u32 LE).
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0..4].copy_from_slice(&MAGIC_BYTES);
        out[4..8].copy_from_slice(&self.width.to_le_bytes());
        out[8..12].copy_from_slice(&self.height.to_le_bytes());
        out
    }

    /// Number of pixels, `width * height`, without overflow.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Length of the pixel region, `width * height * 4`.
    ///
    /// Fails with [`FormatError::SizeOverflow`] when that does not fit in `usize`.
    pub fn pixel_data_len(&self) -> Result<usize, FormatError> {
        checked_len(self.width, self.height, BYTES_PER_PIXEL)
    }

    /// Length of the whole stream, header included.
    pub fn stream_len(&self) -> Result<usize, FormatError> {
        self.pixel_data_len()?
            .checked_add(HEADER_LEN)
            .ok_or(self.overflow())
    }

    pub(crate) fn overflow(&self) -> FormatError {
        FormatError::SizeOverflow {
            width: self.width,
            height: self.height,
        }
    }
}

/// Parse the 12-byte header at the start of `data`.
///
/// Fails with [`FormatError::Truncated`] on fewer than 12 bytes and with
/// [`FormatError::BadMagic`] when the first field is not [`MAGIC`]. Zero
/// width or height is accepted here.
pub fn parse_header(data: &[u8]) -> Result<FbmpHeader, FormatError> {
    FbmpHeader::parse(data)
}

/// Serialize a header for the given dimensions.
pub fn serialize_header(width: u32, height: u32) -> [u8; HEADER_LEN] {
    FbmpHeader::new(width, height).to_bytes()
}

/// Whether `data` starts with the FBMP magic.
pub fn is_fbmp(data: &[u8]) -> bool {
    data.starts_with(&MAGIC_BYTES)
}

/// `width * height * bpp` in `usize`, or `SizeOverflow`.
pub(crate) fn checked_len(width: u32, height: u32, bpp: usize) -> Result<usize, FormatError> {
    let w = usize::try_from(width).ok();
    let h = usize::try_from(height).ok();
    w.zip(h)
        .and_then(|(w, h)| w.checked_mul(h))
        .and_then(|wh| wh.checked_mul(bpp))
        .ok_or_else(|| {
            log::debug!("fbmp: {width}x{height} x {bpp} bytes overflows usize");
            FormatError::SizeOverflow { width, height }
        })
}
