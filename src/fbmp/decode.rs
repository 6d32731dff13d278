//! FBMP stream validation.

use crate::decode::TrailingData;
use crate::error::FormatError;
use crate::limits::Limits;

use super::{FbmpHeader, HEADER_LEN};

/// Validate a whole FBMP stream and return its header and pixel region.
///
/// Checks run in a fixed order and all complete before the caller allocates:
/// header, overflow, limits, truncation, trailing data.
pub(crate) fn split_stream<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
    trailing: TrailingData,
) -> Result<(FbmpHeader, &'a [u8]), FormatError> {
    let header = FbmpHeader::parse(data)?;
    let pixel_len = header.pixel_data_len()?;
    let stream_len = pixel_len.checked_add(HEADER_LEN).ok_or(header.overflow())?;

    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
        limits.check_memory(pixel_len)?;
    }

    if data.len() < stream_len {
        log::debug!(
            "fbmp: {}x{} needs {stream_len} bytes, got {}",
            header.width,
            header.height,
            data.len()
        );
        return Err(FormatError::Truncated {
            needed: stream_len,
            actual: data.len(),
        });
    }
    if data.len() > stream_len && trailing == TrailingData::Reject {
        log::debug!(
            "fbmp: {} trailing bytes after pixel data",
            data.len() - stream_len
        );
        return Err(FormatError::TrailingData {
            expected: stream_len,
            actual: data.len(),
        });
    }

    log::trace!("fbmp: {}x{}, {pixel_len} pixel bytes", header.width, header.height);
    Ok((header, &data[HEADER_LEN..stream_len]))
}
