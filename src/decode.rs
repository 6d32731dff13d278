use alloc::borrow::Cow;
use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::error::FormatError;
use crate::fbmp::{self, swap_channels_in_place};
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// What to do with bytes past the declared pixel region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrailingData {
    /// Fail with [`FormatError::TrailingData`].
    #[default]
    Reject,
    /// Decode the declared region and ignore the rest.
    Ignore,
}

/// Decoded image output. Pixels may be borrowed (zero-copy) or owned.
#[derive(Clone, Debug)]
pub struct DecodeOutput<'a> {
    pixels: Cow<'a, [u8]>,
    pub width: u32,
    pub height: u32,
    layout: PixelLayout,
}

impl<'a> DecodeOutput<'a> {
    /// Access the pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Channel order of [`Self::pixels`]: `Rgba8`, or `Bgra8` from a native decode.
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Take the pixel data as an owned buffer (copies if borrowed).
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels.into_owned()
    }

    /// Take ownership of the pixel data (copies if borrowed).
    pub fn into_owned(self) -> DecodeOutput<'static> {
        DecodeOutput {
            pixels: Cow::Owned(self.pixels.into_owned()),
            width: self.width,
            height: self.height,
            layout: self.layout,
        }
    }

    /// Whether the pixel data is borrowed (zero-copy from input).
    pub fn is_borrowed(&self) -> bool {
        matches!(self.pixels, Cow::Borrowed(_))
    }

    pub(crate) fn borrowed(data: &'a [u8], width: u32, height: u32, layout: PixelLayout) -> Self {
        Self {
            pixels: Cow::Borrowed(data),
            width,
            height,
            layout,
        }
    }

    pub(crate) fn owned(data: Vec<u8>, width: u32, height: u32, layout: PixelLayout) -> Self {
        Self {
            pixels: Cow::Owned(data),
            width,
            height,
            layout,
        }
    }

    /// Reinterpret RGBA pixel data as typed pixels.
    ///
    /// Returns [`FormatError::LayoutMismatch`] for native-order output.
    #[cfg(feature = "rgb")]
    pub fn as_pixels(&self) -> Result<&[rgb::Rgba<u8>], FormatError> {
        if self.layout != PixelLayout::Rgba8 {
            return Err(FormatError::LayoutMismatch {
                expected: PixelLayout::Rgba8,
                actual: self.layout,
            });
        }
        Ok(self.pixels().as_pixels())
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of RGBA pixels.
    ///
    /// Returns [`FormatError::LayoutMismatch`] for native-order output.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> Result<imgref::ImgRef<'_, rgb::Rgba<u8>>, FormatError> {
        let pixels = self.as_pixels()?;
        let (w, h) = (self.width as usize, self.height as usize);
        // Zero-width images still need a non-zero stride.
        Ok(imgref::ImgRef::new_stride(pixels, w, h, w.max(1)))
    }

    /// Convert to an [`imgref::ImgVec`] of RGBA pixels.
    ///
    /// Returns [`FormatError::LayoutMismatch`] for native-order output.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> Result<imgref::ImgVec<rgb::Rgba<u8>>, FormatError> {
        let pixels = self.as_pixels()?;
        let (w, h) = (self.width as usize, self.height as usize);
        Ok(imgref::ImgVec::new_stride(pixels.to_vec(), w, h, w.max(1)))
    }
}

/// Decode request with optional limits and trailing-data policy.
///
/// ```
/// use zenfbmp::{DecodeRequest, Limits, TrailingData};
///
/// let stream = zenfbmp::encode(1, 1, &[255, 0, 0, 255])?;
/// let limits = Limits { max_pixels: Some(1 << 20), ..Default::default() };
/// let decoded = DecodeRequest::new(&stream)
///     .with_limits(&limits)
///     .with_trailing_data(TrailingData::Ignore)
///     .decode()?;
/// assert_eq!(decoded.pixels(), &[255, 0, 0, 255]);
/// # Ok::<(), zenfbmp::FormatError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    trailing: TrailingData,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            trailing: TrailingData::default(),
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_trailing_data(mut self, trailing: TrailingData) -> Self {
        self.trailing = trailing;
        self
    }

    /// Decode to freshly allocated RGBA pixels.
    pub fn decode(self) -> Result<DecodeOutput<'static>, FormatError> {
        let (header, region) = fbmp::decode::split_stream(self.data, self.limits, self.trailing)?;
        let mut pixels = region.to_vec();
        swap_channels_in_place(&mut pixels);
        Ok(DecodeOutput::owned(
            pixels,
            header.width,
            header.height,
            PixelLayout::Rgba8,
        ))
    }

    /// Validate as [`Self::decode`] does, but return the stored BGRA bytes
    /// borrowed from the input, without the channel swap.
    pub fn decode_native(self) -> Result<DecodeOutput<'a>, FormatError> {
        let (header, region) = fbmp::decode::split_stream(self.data, self.limits, self.trailing)?;
        Ok(DecodeOutput::borrowed(
            region,
            header.width,
            header.height,
            PixelLayout::Bgra8,
        ))
    }
}
