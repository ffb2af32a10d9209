use std::io;

use thiserror::Error;

use crate::ChromaFormat;

/// Error type for every fallible operation in this crate.
///
/// Shape errors are raised when a [`Frame`] is constructed, range errors
/// before any I/O is issued. I/O failures from the underlying file are
/// passed through unchanged in [`FrameError::Io`].
///
/// # Example
/// ```
/// use yuvio::{Frame, FrameError, FramePlanes};
///
/// // 10 samples are not enough for a 4x4 luma plane
/// let result = Frame::new(FramePlanes::luma(vec![0u8; 10]), 4, 4, 8);
///
/// assert!(matches!(result, Err(FrameError::DimensionMismatch { .. })));
/// ```
///
/// [`Frame`]: crate::Frame
#[derive(Debug, Error)]
pub enum FrameError {
    /// The bit depth is zero or needs a container wider than 4 bytes.
    #[error("Invalid bit depth {0}, expected a value between 1 and 32.")]
    InvalidBitDepth(u8),
    /// The bit depth does not fit into the chosen in-memory sample type.
    #[error("A bit depth of {bit_depth} needs {bytes} bytes per sample, which the sample type cannot hold.")]
    SampleTypeTooNarrow { bit_depth: u8, bytes: usize },
    /// The requested frame is not fully contained in the source.
    #[error("Frame index {index} is out of range, the source holds {frame_count} frames.")]
    FrameIndexOutOfRange { index: u64, frame_count: u64 },
    /// The luma plane length does not match `width * height`.
    #[error("Provided width {width} and height {height} do not match the Y plane length {len}.")]
    DimensionMismatch {
        width: usize,
        height: usize,
        len: usize,
    },
    /// Only one chroma plane was given, or the two differ in length.
    #[error("U ({u}) and V ({v}) plane lengths do not match.")]
    ChromaLengthMismatch { u: usize, v: usize },
    /// Chroma planes relate to the luma plane in neither the 4:4:4 nor the 4:2:0 ratio.
    #[error("Invalid chroma format.")]
    InvalidFormat,
    /// Chroma geometry was requested from a luma-only frame.
    #[error("Format {0} has no chroma component.")]
    NoChromaComponent(ChromaFormat),
    /// The chroma format transition is not supported, e.g. 4:0:0 to 4:2:0.
    #[error("Unsupported conversion from {from} to {to}.")]
    UnsupportedConversion { from: ChromaFormat, to: ChromaFormat },
    /// A frame size or byte offset does not fit the addressable range.
    #[error("Frame size or offset overflows the addressable range.")]
    SizeOverflow,
    /// Reading or writing the underlying source failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
