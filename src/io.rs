//! Reading and writing frames of raw planar YUV files.
//!
//! A raw YUV file is a headerless sequence of frames. Each frame stores its
//! Y plane, then the U and V planes if the format has chroma. Planes are
//! row-major, samples use `ceil(bit_depth / 8)` little-endian bytes.


use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::{
    codec::{bytes_per_sample, pack, unpack},
    layout::{frame_byte_size, plane_geometry},
    locator::{frame_count, locate},
    ChromaFormat, Frame, FrameError, FramePlanes, Pixel, PlaneGeometry, PlaneKey,
};

/// Describes how to address a frame in a raw YUV source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameConfig {
    pub width: usize,
    pub height: usize,
    pub bit_depth: u8,
    pub format: ChromaFormat,
    pub frame_index: u64,
}

impl FrameConfig {
    /// A config for 8-bit 4:2:0 frames, addressing the first frame.
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bit_depth: 8,
            format: ChromaFormat::Half,
            frame_index: 0,
        }
    }

    #[must_use]
    pub const fn with_bit_depth(self, bit_depth: u8) -> Self {
        Self { bit_depth, ..self }
    }

    #[must_use]
    pub const fn with_format(self, format: ChromaFormat) -> Self {
        Self { format, ..self }
    }

    #[must_use]
    pub const fn with_frame_index(self, frame_index: u64) -> Self {
        Self { frame_index, ..self }
    }

    /// Size of one frame in bytes.
    ///
    /// # Errors
    /// - If the bit depth is 0 or above 32
    /// - If the frame size overflows
    pub fn frame_bytes(&self) -> Result<u64, FrameError> {
        let bytes = bytes_per_sample(self.bit_depth)?;
        let frame_bytes = frame_byte_size(self.geometry(), self.format, bytes)?;
        u64::try_from(frame_bytes).or(Err(FrameError::SizeOverflow))
    }

    #[inline(always)]
    const fn geometry(&self) -> PlaneGeometry {
        PlaneGeometry::new(self.width, self.height)
    }
}

/// Reads the frame addressed by `config` from `source`.
///
/// The frame index is checked against the source size before any plane is
/// read.
///
/// # Errors
/// - If the bit depth is 0, above 32, or too wide for `T`
/// - If the frame size overflows
/// - If the source does not hold the whole frame at `config.frame_index`
/// - If reading from `source` fails
pub fn read_frame<T: Pixel, R: Read + Seek>(
    source: &mut R,
    config: &FrameConfig,
) -> Result<Frame<T>, FrameError> {
    let bytes = bytes_per_sample(config.bit_depth)?;
    if bytes > T::BYTES {
        return Err(FrameError::SampleTypeTooNarrow {
            bit_depth: config.bit_depth,
            bytes,
        });
    }

    let frame_bytes = config.frame_bytes()?;
    let file_size = source.seek(SeekFrom::End(0))?;
    let offset = locate(file_size, frame_bytes, config.frame_index)?;
    log::debug!(
        "Reading frame {} ({} bytes) at offset {}",
        config.frame_index,
        frame_bytes,
        offset
    );

    source.seek(SeekFrom::Start(offset))?;
    let mut planes = FramePlanes::luma(Vec::new());
    let mut raw = Vec::new();
    for &key in config.format.planes() {
        let count = plane_geometry(config.geometry(), config.format, key)?
            .sample_count()
            .ok_or(FrameError::SizeOverflow)?;
        raw.resize(count.checked_mul(bytes).ok_or(FrameError::SizeOverflow)?, 0);
        source.read_exact(&mut raw)?;

        let samples = unpack(&raw, count, bytes);
        match key {
            PlaneKey::Y => planes.y = samples,
            PlaneKey::U => planes.u = Some(samples),
            PlaneKey::V => planes.v = Some(samples),
        }
    }

    Frame::new(planes, config.width, config.height, config.bit_depth)
}

/// Writes `frame` as frame `index` of `sink`.
///
/// Bytes before the frame are left untouched; a sink shorter than the
/// frame offset is extended. A failure part way leaves the planes written
/// so far in place.
///
/// # Errors
/// - If the frame offset overflows a `u64`
/// - If writing to `sink` fails
pub fn write_frame<T: Pixel, W: Write + Seek>(
    sink: &mut W,
    frame: &Frame<T>,
    index: u64,
) -> Result<(), FrameError> {
    let bytes = bytes_per_sample(frame.bit_depth())?;
    let frame_bytes = frame.bytes_per_frame() as u64;
    let offset = index
        .checked_mul(frame_bytes)
        .filter(|offset| offset.checked_add(frame_bytes).is_some())
        .ok_or(FrameError::SizeOverflow)?;
    log::debug!(
        "Writing {} frame {} ({} bytes) at offset {}",
        frame.format(),
        index,
        frame_bytes,
        offset
    );

    sink.seek(SeekFrom::Start(offset))?;
    for &key in frame.planes() {
        if let Some(plane) = frame.plane(key) {
            sink.write_all(&pack(plane, bytes))?;
        }
    }
    sink.flush()?;

    Ok(())
}

/// Writes `frame` as frame `index` of the file at `path`, creating the
/// file if it does not exist.
///
/// # Errors
/// - If the file cannot be opened or written
pub fn write_file<T: Pixel, P: AsRef<Path>>(
    path: P,
    frame: &Frame<T>,
    index: u64,
) -> Result<(), FrameError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;
    write_frame(&mut file, frame, index)
}

/// A raw YUV file opened for reading with a fixed frame layout.
#[derive(Debug)]
pub struct YuvReader {
    file: File,
    config: FrameConfig,
}

impl YuvReader {
    /// # Errors
    /// - If the bit depth is 0 or above 32
    /// - If the file cannot be opened
    pub fn open<P: AsRef<Path>>(path: P, config: FrameConfig) -> Result<Self, FrameError> {
        bytes_per_sample(config.bit_depth)?;
        let file = File::open(path)?;
        Ok(Self { file, config })
    }

    #[must_use]
    #[inline(always)]
    pub const fn config(&self) -> FrameConfig {
        self.config
    }

    #[must_use]
    #[inline(always)]
    pub const fn width(&self) -> usize {
        self.config.width
    }

    #[must_use]
    #[inline(always)]
    pub const fn height(&self) -> usize {
        self.config.height
    }

    #[must_use]
    #[inline(always)]
    pub const fn bit_depth(&self) -> u8 {
        self.config.bit_depth
    }

    #[must_use]
    #[inline(always)]
    pub const fn format(&self) -> ChromaFormat {
        self.config.format
    }

    /// Number of whole frames in the file.
    ///
    /// # Errors
    /// - If the file size cannot be queried
    pub fn frame_count(&self) -> Result<u64, FrameError> {
        let file_size = self.file.metadata()?.len();
        Ok(frame_count(file_size, self.config.frame_bytes()?))
    }

    /// Reads frame `index`, ignoring the frame index of the config.
    ///
    /// # Errors
    /// - If `T` cannot hold samples of the configured bit depth
    /// - If the file does not hold the whole frame at `index`
    /// - If reading the file fails
    pub fn read<T: Pixel>(&mut self, index: u64) -> Result<Frame<T>, FrameError> {
        let config = self.config.with_frame_index(index);
        read_frame(&mut self.file, &config)
    }
}
