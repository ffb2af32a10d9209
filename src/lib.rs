#![deny(clippy::all)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::inline_always)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::similar_names)]
#![allow(clippy::use_self)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(clippy::create_dir)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::default_numeric_fallback)]
#![warn(clippy::exit)]
#![warn(clippy::filetype_is_file)]
#![warn(clippy::float_cmp_const)]
#![warn(clippy::if_then_some_else_none)]
#![warn(clippy::lossy_float_literal)]
#![warn(clippy::map_err_ignore)]
#![warn(clippy::mem_forget)]
#![warn(clippy::mod_module_files)]
#![warn(clippy::multiple_inherent_impl)]
#![warn(clippy::pattern_type_mismatch)]
#![warn(clippy::rc_buffer)]
#![warn(clippy::rc_mutex)]
#![warn(clippy::rest_pat_in_fully_bound_structs)]
#![warn(clippy::same_name_method)]
#![warn(clippy::str_to_string)]
#![warn(clippy::string_to_string)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::unnecessary_self_imports)]
#![warn(clippy::unneeded_field_pattern)]
#![warn(clippy::use_debug)]
#![warn(clippy::verbose_file_reads)]

//! Raw planar YUV frames: addressing and packing frames inside headerless
//! `.yuv` files, converting between 4:4:4, 4:2:0 and 4:0:0, and turning
//! frames into 8-bit RGBA.
//!
//! ```no_run
//! use yuvio::{ChromaFormat, FrameConfig, YuvReader};
//!
//! let config = FrameConfig::new(320, 180).with_bit_depth(10);
//! let mut reader = YuvReader::open("fish_420_320x180_10.yuv", config)?;
//! let frame = reader.read::<u16>(reader.frame_count()? - 1)?;
//! let rgba = frame.to_format(ChromaFormat::Full)?.to_rgba()?;
//! # Ok::<(), yuvio::FrameError>(())
//! ```

// These are pub and doc hidden so the building blocks of the file codec
// stay reachable for benchmarks and tooling
#[doc(hidden)]
pub mod codec;
#[doc(hidden)]
pub mod locator;
#[doc(hidden)]
pub mod resize;

mod errors;
mod frame;
mod io;
mod layout;
mod pixel;
mod rgba;

pub use crate::errors::FrameError;
pub use crate::frame::{Frame, FramePlanes};
pub use crate::io::{read_frame, write_file, write_frame, FrameConfig, YuvReader};
pub use crate::layout::{frame_byte_size, plane_geometry, ChromaFormat, PlaneGeometry, PlaneKey};
pub use crate::pixel::Pixel;
pub use crate::rgba::Rgba;
