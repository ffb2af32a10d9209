#[cfg(test)]
mod tests;

use crate::{
    codec::bytes_per_sample, layout::plane_geometry, resize::nearest_neighbor, ChromaFormat,
    FrameError, Pixel, PlaneGeometry, PlaneKey, Rgba,
};

/// Sample buffers of one frame, before validation.
///
/// The chroma planes are either both present or both absent in a valid
/// frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FramePlanes<T: Pixel> {
    pub y: Vec<T>,
    pub u: Option<Vec<T>>,
    pub v: Option<Vec<T>>,
}

impl<T: Pixel> FramePlanes<T> {
    #[must_use]
    pub const fn luma(y: Vec<T>) -> Self {
        Self {
            y,
            u: None,
            v: None,
        }
    }

    #[must_use]
    pub const fn yuv(y: Vec<T>, u: Vec<T>, v: Vec<T>) -> Self {
        Self {
            y,
            u: Some(u),
            v: Some(v),
        }
    }
}

/// One decoded planar YUV frame.
///
/// A `Frame` exclusively owns its planes and never changes after
/// construction. Its [`ChromaFormat`] is inferred from the plane lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<T: Pixel> {
    planes: FramePlanes<T>,
    width: usize,
    height: usize,
    bit_depth: u8,
}

impl<T: Pixel> Frame<T> {
    /// # Errors
    /// - If `bit_depth` is 0 or above 32
    /// - If `bit_depth` needs a wider sample container than `T`
    /// - If the luma plane length does not match `width * height`
    /// - If only one chroma plane is given, or their lengths differ
    /// - If the chroma planes match neither the 4:4:4 nor the 4:2:0 size
    pub fn new(
        planes: FramePlanes<T>,
        width: usize,
        height: usize,
        bit_depth: u8,
    ) -> Result<Self, FrameError> {
        let bytes = bytes_per_sample(bit_depth)?;
        if bytes > T::BYTES {
            return Err(FrameError::SampleTypeTooNarrow { bit_depth, bytes });
        }

        if width.checked_mul(height) != Some(planes.y.len()) {
            return Err(FrameError::DimensionMismatch {
                width,
                height,
                len: planes.y.len(),
            });
        }

        infer_format(&planes, width, height)?;

        Ok(Self {
            planes,
            width,
            height,
            bit_depth,
        })
    }

    #[must_use]
    #[inline(always)]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    #[inline(always)]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    #[inline(always)]
    pub const fn bit_depth(&self) -> u8 {
        self.bit_depth
    }

    #[must_use]
    pub fn format(&self) -> ChromaFormat {
        match self.planes.u {
            None => ChromaFormat::LumaOnly,
            Some(ref u) if u.len() == self.planes.y.len() => ChromaFormat::Full,
            Some(_) => ChromaFormat::Half,
        }
    }

    /// Keys of the planes this frame carries, in storage order.
    #[must_use]
    pub fn planes(&self) -> &'static [PlaneKey] {
        self.format().planes()
    }

    #[must_use]
    pub fn plane(&self, key: PlaneKey) -> Option<&[T]> {
        match key {
            PlaneKey::Y => Some(&self.planes.y),
            PlaneKey::U => self.planes.u.as_deref(),
            PlaneKey::V => self.planes.v.as_deref(),
        }
    }

    #[must_use]
    #[inline(always)]
    pub fn y(&self) -> &[T] {
        &self.planes.y
    }

    #[must_use]
    #[inline(always)]
    pub fn u(&self) -> Option<&[T]> {
        self.planes.u.as_deref()
    }

    #[must_use]
    #[inline(always)]
    pub fn v(&self) -> Option<&[T]> {
        self.planes.v.as_deref()
    }

    #[must_use]
    pub fn into_planes(self) -> FramePlanes<T> {
        self.planes
    }

    /// # Errors
    /// - If the frame is luma-only
    pub fn chroma_geometry(&self) -> Result<PlaneGeometry, FrameError> {
        plane_geometry(self.luma_geometry(), self.format(), PlaneKey::U)
    }

    /// # Errors
    /// - If the frame is luma-only
    pub fn width_chroma(&self) -> Result<usize, FrameError> {
        Ok(self.chroma_geometry()?.width)
    }

    /// # Errors
    /// - If the frame is luma-only
    pub fn height_chroma(&self) -> Result<usize, FrameError> {
        Ok(self.chroma_geometry()?.height)
    }

    /// Size of this frame on disk, with every sample stored in the
    /// container width of its bit depth.
    #[must_use]
    pub fn bytes_per_frame(&self) -> usize {
        // The bit depth was validated on construction
        let bytes = bytes_per_sample(self.bit_depth).unwrap_or(T::BYTES);
        self.planes()
            .iter()
            .filter_map(|&key| self.plane(key))
            .map(|plane| plane.len() * bytes)
            .sum()
    }

    /// Returns a copy of this frame in another chroma format.
    ///
    /// Chroma planes are rescaled with nearest-neighbor sampling, the luma
    /// plane is copied unchanged.
    ///
    /// # Errors
    /// - If the frame is luma-only and `format` is not
    pub fn to_format(&self, format: ChromaFormat) -> Result<Self, FrameError> {
        let from = self.format();
        if from == format {
            return Ok(self.clone());
        }

        match (from, format) {
            (ChromaFormat::LumaOnly, to) => {
                return Err(FrameError::UnsupportedConversion { from, to });
            }
            (_, ChromaFormat::LumaOnly) => {
                return Self::new(
                    FramePlanes::luma(self.planes.y.clone()),
                    self.width,
                    self.height,
                    self.bit_depth,
                );
            }
            _ => {}
        }

        let (Some(u), Some(v)) = (self.u(), self.v()) else {
            return Err(FrameError::UnsupportedConversion { from, to: format });
        };

        let src = self.chroma_geometry()?;
        let dst = plane_geometry(self.luma_geometry(), format, PlaneKey::U)?;
        log::debug!(
            "Converting {} to {}, chroma {}x{} -> {}x{}",
            from,
            format,
            src.width,
            src.height,
            dst.width,
            dst.height
        );

        Self::new(
            FramePlanes::yuv(
                self.planes.y.clone(),
                nearest_neighbor(u, src, dst),
                nearest_neighbor(v, src, dst),
            ),
            self.width,
            self.height,
            self.bit_depth,
        )
    }

    /// Converts this frame to 8-bit RGBA for display, see [`Rgba`].
    ///
    /// # Errors
    /// - If the frame is luma-only
    pub fn to_rgba(&self) -> Result<Rgba, FrameError> {
        Rgba::try_from(self)
    }

    #[inline(always)]
    const fn luma_geometry(&self) -> PlaneGeometry {
        PlaneGeometry::new(self.width, self.height)
    }
}

fn infer_format<T: Pixel>(
    planes: &FramePlanes<T>,
    width: usize,
    height: usize,
) -> Result<ChromaFormat, FrameError> {
    let (u, v) = match (&planes.u, &planes.v) {
        (&None, &None) => return Ok(ChromaFormat::LumaOnly),
        (&Some(ref u), &Some(ref v)) => (u.len(), v.len()),
        (&Some(ref u), &None) => (u.len(), 0),
        (&None, &Some(ref v)) => (0, v.len()),
    };
    if u != v || planes.u.is_none() || planes.v.is_none() {
        return Err(FrameError::ChromaLengthMismatch { u, v });
    }

    if u == planes.y.len() {
        return Ok(ChromaFormat::Full);
    }

    let half = plane_geometry(PlaneGeometry::new(width, height), ChromaFormat::Half, PlaneKey::U)?;
    if half.sample_count() == Some(u) {
        if width % 2 != 0 || height % 2 != 0 {
            log::warn!(
                "4:2:0 frame with odd dimensions {}x{}, chroma planes are rounded up to {}x{}",
                width,
                height,
                half.width,
                half.height
            );
        }
        return Ok(ChromaFormat::Half);
    }

    Err(FrameError::InvalidFormat)
}
