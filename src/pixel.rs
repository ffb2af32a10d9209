use std::fmt::Debug;

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// An unsigned integer type able to hold one plane sample in memory.
///
/// `BYTES` is the element width. Samples of a frame with a 3-byte
/// container on disk are held as `u32`.
pub trait Pixel:
    PrimInt + Unsigned + ToPrimitive + FromPrimitive + Default + Debug + Send + Sync + 'static
{
    const BYTES: usize;

    /// Truncates a container value to this type.
    fn from_container(value: u32) -> Self;

    fn to_container(self) -> u32;
}

macro_rules! impl_pixel {
    ($($t:ty => $bytes:expr),* $(,)?) => {
        $(
            impl Pixel for $t {
                const BYTES: usize = $bytes;

                #[inline(always)]
                fn from_container(value: u32) -> Self {
                    value as $t
                }

                #[inline(always)]
                fn to_container(self) -> u32 {
                    u32::from(self)
                }
            }
        )*
    };
}

impl_pixel!(u8 => 1, u16 => 2, u32 => 4);
