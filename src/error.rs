use crate::pixel::PixelLayout;

/// Which configured [`crate::Limits`] field rejected the input.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LimitKind {
    Width { width: u32, max: u64 },
    Height { height: u32, max: u64 },
    Pixels { pixels: u64, max: u64 },
    Memory { bytes: usize, max: u64 },
}

impl core::fmt::Display for LimitKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Width { width, max } => write!(f, "width {width} exceeds limit {max}"),
            Self::Height { height, max } => write!(f, "height {height} exceeds limit {max}"),
            Self::Pixels { pixels, max } => {
                write!(f, "pixel count {pixels} exceeds limit {max}")
            }
            Self::Memory { bytes, max } => {
                write!(f, "allocation {bytes} bytes exceeds memory limit {max}")
            }
        }
    }
}

/// Errors from FBMP decoding and encoding.
///
/// Every variant is terminal: the input is rejected as a whole and no
/// partial pixel data is produced.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    #[error("not an fbmp stream: magic {found:#010x}")]
    BadMagic { found: u32 },

    #[error("truncated input: need {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },

    #[error("dimensions too large: {width}x{height}")]
    SizeOverflow { width: u32, height: u32 },

    #[error("pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("trailing data: expected {expected} bytes, got {actual}")]
    TrailingData { expected: usize, actual: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(LimitKind),

    #[error("pixel layout mismatch: expected {expected:?}, got {actual:?}")]
    LayoutMismatch {
        expected: PixelLayout,
        actual: PixelLayout,
    },
}

impl From<LimitKind> for FormatError {
    fn from(kind: LimitKind) -> Self {
        FormatError::LimitExceeded(kind)
    }
}
