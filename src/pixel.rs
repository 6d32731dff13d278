/// Pixel memory layout.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// 4 channels, 8-bit RGBA. The decoded layout.
    Rgba8,
    /// 4 channels, 8-bit BGRA. The framebuffer's native layout.
    Bgra8,
    /// 3 channels, 8-bit RGB. Encode input only; alpha becomes 255.
    Rgb8,
    /// Single channel, 8-bit grayscale. Encode input only; alpha becomes 255.
    Gray8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::Rgb8 => 3,
            Self::Rgba8 | Self::Bgra8 => 4,
        }
    }
}
