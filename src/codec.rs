//! Packing of plane samples into little-endian byte containers.
//!
//! A sample of bit depth `n` occupies `ceil(n / 8)` bytes with the least
//! significant byte first. Values are not masked to the bit depth: a
//! 10-bit sample in a 2-byte container can carry any 16-bit value.


use crate::{FrameError, Pixel};

pub const MAX_BYTES_PER_SAMPLE: usize = 4;

/// Container width in bytes for samples of the given bit depth.
///
/// # Errors
/// - If `bit_depth` is 0 or above 32
pub fn bytes_per_sample(bit_depth: u8) -> Result<usize, FrameError> {
    let bytes = usize::from(bit_depth).div_ceil(8);
    if bytes == 0 || bytes > MAX_BYTES_PER_SAMPLE {
        return Err(FrameError::InvalidBitDepth(bit_depth));
    }
    Ok(bytes)
}

/// Reads `count` samples of `bytes` bytes each from the start of `raw`.
///
/// `raw` must hold at least `count * bytes` bytes and `bytes` must be in
/// `1..=T::BYTES`; container bits beyond the width of `T` are dropped.
#[must_use]
pub fn unpack<T: Pixel>(raw: &[u8], count: usize, bytes: usize) -> Vec<T> {
    debug_assert!((1..=MAX_BYTES_PER_SAMPLE).contains(&bytes));
    debug_assert!(raw.len() >= count * bytes);

    raw.chunks_exact(bytes)
        .take(count)
        .map(|container| {
            let value = container
                .iter()
                .enumerate()
                .fold(0u32, |acc, (k, &byte)| acc | (u32::from(byte) << (8 * k)));
            T::from_container(value)
        })
        .collect()
}

/// Writes the `bytes` low-order bytes of every sample, least significant
/// byte first.
#[must_use]
pub fn pack<T: Pixel>(samples: &[T], bytes: usize) -> Vec<u8> {
    debug_assert!((1..=MAX_BYTES_PER_SAMPLE).contains(&bytes));

    let mut raw = Vec::with_capacity(samples.len() * bytes);
    for &sample in samples {
        let value = sample.to_container();
        raw.extend((0..bytes).map(|k| ((value >> (8 * k)) & 0xFF) as u8));
    }
    raw
}
