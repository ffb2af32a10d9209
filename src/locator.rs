
use crate::FrameError;

/// Number of whole frames of `frame_bytes` bytes in a source of
/// `file_size` bytes.
///
/// Trailing bytes that do not form a whole frame are ignored. A layout with
/// zero-sized frames holds no frames.
#[must_use]
pub fn frame_count(file_size: u64, frame_bytes: u64) -> u64 {
    if frame_bytes == 0 {
        return 0;
    }

    let remainder = file_size % frame_bytes;
    if remainder != 0 {
        log::warn!(
            "Source size {} is not a multiple of the frame size {}, ignoring {} trailing bytes",
            file_size,
            frame_bytes,
            remainder
        );
    }
    file_size / frame_bytes
}

/// Byte offset of frame `index` in a source of `file_size` bytes.
///
/// # Errors
/// - If the source does not contain the whole frame at `index`
pub fn locate(file_size: u64, frame_bytes: u64, index: u64) -> Result<u64, FrameError> {
    let frame_count = frame_count(file_size, frame_bytes);
    if index >= frame_count {
        return Err(FrameError::FrameIndexOutOfRange { index, frame_count });
    }
    Ok(index * frame_bytes)
}
