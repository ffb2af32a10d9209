//! Conversion of YUV frames into 8-bit RGBA for display.
//!
//! Chroma is first brought to full resolution with nearest-neighbor
//! sampling, then every pixel goes through the BT.601 YUV to RGB matrix.

#![allow(clippy::many_single_char_names)]


use nalgebra::{Matrix3, Vector3};

use crate::{ChromaFormat, Frame, FrameError, Pixel};

/// An 8-bit RGBA image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rgba {
    data: Vec<[u8; 4]>,
    width: usize,
    height: usize,
}

impl Rgba {
    #[must_use]
    #[inline]
    pub fn data(&self) -> &[[u8; 4]] {
        &self.data
    }

    #[must_use]
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Flattens the image into `[R, G, B, A, R, G, B, A, ...]`.
    #[must_use]
    pub fn into_raw(self) -> Vec<u8> {
        self.data.into_iter().flatten().collect()
    }
}

impl<T: Pixel> TryFrom<Frame<T>> for Rgba {
    type Error = FrameError;

    fn try_from(frame: Frame<T>) -> Result<Self, Self::Error> {
        Self::try_from(&frame)
    }
}

impl<T: Pixel> TryFrom<&Frame<T>> for Rgba {
    type Error = FrameError;

    /// # Errors
    /// - If the frame is luma-only
    fn try_from(frame: &Frame<T>) -> Result<Self, Self::Error> {
        let full = frame.to_format(ChromaFormat::Full)?;
        let (Some(u), Some(v)) = (full.u(), full.v()) else {
            return Err(FrameError::UnsupportedConversion {
                from: frame.format(),
                to: ChromaFormat::Full,
            });
        };

        let max = max_value(full.bit_depth());
        // The alpha channel carries the bit depth maximum, truncated to 8 bits
        let alpha = max as u8;
        let scale = max as f32;
        let matrix = bt601_yuv_to_rgb_matrix();

        let data = full
            .y()
            .iter()
            .zip(u)
            .zip(v)
            .map(|((&y, &u), &v)| {
                let yuv = Vector3::new(
                    y.to_container() as f32 / scale,
                    u.to_container() as f32 / scale - 0.5,
                    v.to_container() as f32 / scale - 0.5,
                );
                let rgb = matrix * yuv;
                [to_u8(rgb[0]), to_u8(rgb[1]), to_u8(rgb[2]), alpha]
            })
            .collect();

        Ok(Self {
            data,
            width: frame.width(),
            height: frame.height(),
        })
    }
}

#[must_use]
#[inline(always)]
const fn max_value(bit_depth: u8) -> u64 {
    (1u64 << bit_depth) - 1
}

// BT.601, rows produce R, G and B from (Y, U - 0.5, V - 0.5)
#[rustfmt::skip]
fn bt601_yuv_to_rgb_matrix() -> Matrix3<f32> {
    Matrix3::new(
        1.0, 0.0, 1.402,
        1.0, -0.344, -0.714,
        1.0, 1.772, 0.0,
    )
}

#[inline(always)]
fn to_u8(channel: f32) -> u8 {
    (255.0 * channel.clamp(0.0, 1.0)) as u8
}
