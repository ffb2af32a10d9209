
use crate::{Pixel, PlaneGeometry};

/// Scales a plane with nearest-neighbor sampling.
///
/// Each destination pixel takes the source pixel under its center, i.e.
/// `floor((x + 0.5) * src / dst)` on each axis. The resulting index is
/// clamped into the source plane, so the call never fails, even when
/// `plane` is shorter than `src` describes. An empty source yields a
/// zero-filled plane. `dst` must describe an addressable plane.
#[must_use]
pub fn nearest_neighbor<T: Pixel>(plane: &[T], src: PlaneGeometry, dst: PlaneGeometry) -> Vec<T> {
    let len = dst.sample_count().unwrap_or(0);
    let Some(last) = plane.len().checked_sub(1) else {
        return vec![T::zero(); len];
    };

    let mut output = Vec::with_capacity(len);
    for y in 0..dst.height {
        let ref_y = center_ref(y, src.height, dst.height);
        for x in 0..dst.width {
            let ref_x = center_ref(x, src.width, dst.width);
            let ref_idx = (ref_y * src.width + ref_x).min(last);
            output.push(plane[ref_idx]);
        }
    }
    output
}

// floor((coord + 0.5) * src / dst) in integer arithmetic
#[inline(always)]
const fn center_ref(coord: usize, src: usize, dst: usize) -> usize {
    (2 * coord + 1) * src / (2 * dst)
}
