use crate::error::FormatError;
use crate::fbmp::FbmpHeader;
use crate::pixel::PixelLayout;

/// Registration values a host application needs to associate files with
/// this codec. Plain data: the host adapter decides how to register them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatDescriptor {
    /// Human-readable format name.
    pub name: &'static str,
    /// File extension, without the dot.
    pub extension: &'static str,
    pub mime_type: &'static str,
    /// Magic in `offset,type,value` file(1)-style notation.
    pub magic_pattern: &'static str,
}

/// The FBMP format descriptor.
pub const FBMP: FormatDescriptor = FormatDescriptor {
    name: "Framebuffer BitMaP",
    extension: "fbmp",
    mime_type: "image/fbmp",
    magic_pattern: "0,string,fbmp",
};

/// Image metadata from the header alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// Channel order of the stored pixels (always BGRA).
    pub native_layout: PixelLayout,
    /// Length of the pixel region the header declares.
    pub pixel_data_len: usize,
    /// Total stream length, header included.
    pub stream_len: usize,
}

impl ImageInfo {
    /// Probe the header without decoding or allocating.
    ///
    /// Only the first 12 bytes are inspected; a truncated pixel region is
    /// not reported here.
    pub fn from_bytes(data: &[u8]) -> Result<Self, FormatError> {
        let header = FbmpHeader::parse(data)?;
        Ok(Self {
            width: header.width,
            height: header.height,
            native_layout: PixelLayout::Bgra8,
            pixel_data_len: header.pixel_data_len()?,
            stream_len: header.stream_len()?,
        })
    }
}
