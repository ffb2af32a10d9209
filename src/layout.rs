//! Plane geometry for the supported chroma layouts.


use std::fmt;
use std::str::FromStr;

use crate::FrameError;

/// Chroma subsampling layout of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChromaFormat {
    /// 4:4:4, chroma planes at full resolution.
    Full,
    /// 4:2:0, chroma planes at half resolution on both axes.
    #[default]
    Half,
    /// 4:0:0, no chroma planes.
    LumaOnly,
}

/// One of the three planes of a YUV frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaneKey {
    Y,
    U,
    V,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaneGeometry {
    pub width: usize,
    pub height: usize,
}

impl PlaneGeometry {
    #[must_use]
    #[inline(always)]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// `width * height`, or `None` if it overflows.
    #[must_use]
    #[inline(always)]
    pub const fn sample_count(self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }
}

impl ChromaFormat {
    /// The planes stored for this format, in on-disk order.
    #[must_use]
    pub const fn planes(self) -> &'static [PlaneKey] {
        match self {
            Self::LumaOnly => &[PlaneKey::Y],
            Self::Full | Self::Half => &[PlaneKey::Y, PlaneKey::U, PlaneKey::V],
        }
    }

    #[must_use]
    pub const fn has_chroma(self) -> bool {
        !matches!(self, Self::LumaOnly)
    }

    /// Per-axis downsampling factor of the chroma planes, `None` for luma-only.
    #[must_use]
    pub const fn chroma_downsample(self) -> Option<usize> {
        match self {
            Self::Full => Some(1),
            Self::Half => Some(2),
            Self::LumaOnly => None,
        }
    }

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Full => "444",
            Self::Half => "420",
            Self::LumaOnly => "400",
        }
    }
}

impl fmt::Display for ChromaFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ChromaFormat {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "444" => Ok(Self::Full),
            "420" => Ok(Self::Half),
            "400" => Ok(Self::LumaOnly),
            _ => Err(FrameError::InvalidFormat),
        }
    }
}

/// Computes the dimensions of one plane.
///
/// Chroma planes of a 4:2:0 frame with odd luma dimensions round up, so a
/// 5x3 frame carries 3x2 chroma planes.
///
/// # Errors
/// - If a chroma plane is requested for [`ChromaFormat::LumaOnly`]
pub fn plane_geometry(
    frame: PlaneGeometry,
    format: ChromaFormat,
    key: PlaneKey,
) -> Result<PlaneGeometry, FrameError> {
    if key == PlaneKey::Y {
        return Ok(frame);
    }

    let downsample = format
        .chroma_downsample()
        .ok_or(FrameError::NoChromaComponent(format))?;
    Ok(PlaneGeometry::new(
        frame.width.div_ceil(downsample),
        frame.height.div_ceil(downsample),
    ))
}

/// Total size in bytes of one frame stored with `bytes_per_sample` bytes
/// per sample.
///
/// # Errors
/// - If the size does not fit in `usize`
pub fn frame_byte_size(
    frame: PlaneGeometry,
    format: ChromaFormat,
    bytes_per_sample: usize,
) -> Result<usize, FrameError> {
    format.planes().iter().try_fold(0usize, |total, &key| {
        plane_geometry(frame, format, key)?
            .sample_count()
            .and_then(|count| count.checked_mul(bytes_per_sample))
            .and_then(|bytes| total.checked_add(bytes))
            .ok_or(FrameError::SizeOverflow)
    })
}
