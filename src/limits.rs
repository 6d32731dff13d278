use crate::error::LimitKind;

/// Resource limits for decode/encode operations.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the pixel region, `width * height * 4` bytes.
    ///
    /// The 12-byte header is not counted, so one value bounds decode and
    /// encode alike.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check dimensions against limits.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), LimitKind> {
        if let Some(max) = self.max_width {
            if u64::from(width) > max {
                return Err(LimitKind::Width { width, max });
            }
        }
        if let Some(max) = self.max_height {
            if u64::from(height) > max {
                return Err(LimitKind::Height { height, max });
            }
        }
        if let Some(max) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max {
                return Err(LimitKind::Pixels { pixels, max });
            }
        }
        Ok(())
    }

    /// Check that an allocation size is within memory limits.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), LimitKind> {
        if let Some(max) = self.max_memory_bytes {
            if bytes as u64 > max {
                return Err(LimitKind::Memory { bytes, max });
            }
        }
        Ok(())
    }
}
