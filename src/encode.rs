use alloc::vec::Vec;

use crate::error::FormatError;
use crate::fbmp;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// Encode request with optional limits.
///
/// Accepts any [`PixelLayout`]; see [`crate::encode`] for the plain RGBA path.
#[derive(Clone, Debug, Default)]
pub struct EncodeRequest<'a> {
    limits: Option<&'a Limits>,
}

impl<'a> EncodeRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Encode `pixels` into a new FBMP stream.
    pub fn encode(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        layout: PixelLayout,
    ) -> Result<Vec<u8>, FormatError> {
        let mut out = Vec::new();
        self.encode_into(&mut out, pixels, width, height, layout)?;
        Ok(out)
    }

    /// Append an FBMP stream to `out`. `out` is unchanged on error.
    pub fn encode_into(
        &self,
        out: &mut Vec<u8>,
        pixels: &[u8],
        width: u32,
        height: u32,
        layout: PixelLayout,
    ) -> Result<(), FormatError> {
        fbmp::encode_into(out, pixels, width, height, layout, self.limits)
    }

    /// Encode typed RGBA pixels.
    #[cfg(feature = "rgb")]
    pub fn encode_rgba8(
        &self,
        pixels: &[rgb::Rgba<u8>],
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, FormatError> {
        use rgb::ComponentBytes as _;
        self.encode(pixels.as_bytes(), width, height, PixelLayout::Rgba8)
    }

    /// Encode an RGBA image, honouring its stride.
    #[cfg(feature = "imgref")]
    pub fn encode_imgref(
        &self,
        img: imgref::ImgRef<'_, rgb::Rgba<u8>>,
    ) -> Result<Vec<u8>, FormatError> {
        let (Ok(width), Ok(height)) = (u32::try_from(img.width()), u32::try_from(img.height()))
        else {
            return Err(FormatError::SizeOverflow {
                width: u32::try_from(img.width()).unwrap_or(u32::MAX),
                height: u32::try_from(img.height()).unwrap_or(u32::MAX),
            });
        };
        if img.stride() == img.width() {
            let len = img.width() * img.height();
            return self.encode_rgba8(&img.buf()[..len], width, height);
        }
        let mut contiguous = Vec::with_capacity(img.width() * img.height());
        for row in img.rows() {
            contiguous.extend_from_slice(row);
        }
        self.encode_rgba8(&contiguous, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_apply_to_encode() {
        let limits = Limits {
            max_width: Some(1),
            ..Default::default()
        };
        let err = EncodeRequest::new()
            .with_limits(&limits)
            .encode(&[0; 8], 2, 1, PixelLayout::Rgba8)
            .unwrap_err();
        assert!(matches!(err, FormatError::LimitExceeded(_)));
    }

    #[cfg(feature = "rgb")]
    #[test]
    fn typed_matches_bytes() {
        let px = [rgb::Rgba::new(1u8, 2, 3, 4), rgb::Rgba::new(5, 6, 7, 8)];
        let typed = EncodeRequest::new().encode_rgba8(&px, 2, 1).unwrap();
        let raw = EncodeRequest::new()
            .encode(&[1, 2, 3, 4, 5, 6, 7, 8], 2, 1, PixelLayout::Rgba8)
            .unwrap();
        assert_eq!(typed, raw);
    }

    #[cfg(feature = "imgref")]
    #[test]
    fn strided_image_is_packed() {
        let red = rgb::Rgba::new(255u8, 0, 0, 255);
        let pad = rgb::Rgba::new(9u8, 9, 9, 9);
        // 1x2 image with stride 2: the second column is padding.
        let buf = alloc::vec![red, pad, red, pad];
        let img = imgref::ImgRef::new_stride(&buf[..], 1, 2, 2);
        let out = EncodeRequest::new().encode_imgref(img).unwrap();
        assert_eq!(out.len(), 12 + 8);
        assert_eq!(&out[12..], &[0, 0, 255, 255, 0, 0, 255, 255]);
    }
}
