use interpolate_name::interpolate_test;
use rand::Rng;

use super::*;

fn random_frame(width: usize, height: usize, format: ChromaFormat, bit_depth: u8) -> Frame<u16> {
    let max = ((1u32 << bit_depth) - 1) as u16;
    let mut rng = rand::thread_rng();
    let mut plane = |len: usize| -> Vec<u16> { (0..len).map(|_| rng.gen_range(0..=max)).collect() };

    let luma = PlaneGeometry::new(width, height);
    let planes = if format.has_chroma() {
        let chroma = plane_geometry(luma, format, PlaneKey::U)
            .unwrap()
            .sample_count()
            .unwrap();
        FramePlanes::yuv(plane(width * height), plane(chroma), plane(chroma))
    } else {
        FramePlanes::luma(plane(width * height))
    };
    Frame::new(planes, width, height, bit_depth).unwrap()
}

#[test]
fn has_y_u_and_v_planes() {
    let frame = Frame::new(FramePlanes::yuv(vec![0u8; 0], vec![], vec![]), 0, 0, 8).unwrap();
    assert_eq!(frame.planes(), &[PlaneKey::Y, PlaneKey::U, PlaneKey::V]);
}

#[test]
fn has_only_a_y_plane() {
    let frame = Frame::new(FramePlanes::luma(vec![0u8; 0]), 0, 0, 8).unwrap();
    assert_eq!(frame.planes(), &[PlaneKey::Y]);
    assert_eq!(frame.format(), ChromaFormat::LumaOnly);
    assert!(frame.plane(PlaneKey::U).is_none());
}

#[interpolate_test(empty_with_sample, 0, 0, 1)]
#[interpolate_test(single_without_sample, 1, 1, 0)]
#[interpolate_test(full_hd_plus_one, 1920, 1080, 1920 * 1080 + 1)]
#[interpolate_test(overflowing_area, usize::MAX, 2, 4)]
#[interpolate_test(wrapping_area, (1 << (usize::BITS - 1)) + 2, 2, 4)]
fn rejects_luma_length_mismatch(width: usize, height: usize, len: usize) {
    let result = Frame::new(FramePlanes::luma(vec![0u8; len]), width, height, 8);
    assert!(matches!(
        result,
        Err(FrameError::DimensionMismatch { len: l, .. }) if l == len
    ));
}

#[interpolate_test(empty, 0, 0)]
#[interpolate_test(single, 1, 1)]
#[interpolate_test(full_hd, 1920, 1080)]
fn accepts_matching_luma(width: usize, height: usize) {
    let frame = Frame::new(FramePlanes::luma(vec![0u8; width * height]), width, height, 8).unwrap();
    assert_eq!(frame.width(), width);
    assert_eq!(frame.height(), height);
}

#[interpolate_test(u_longer, (2, 4), (2, 4), (1, 4))]
#[interpolate_test(v_longer, (2, 4), (1, 4), (2, 4))]
fn rejects_chroma_length_mismatch(y: (usize, usize), u: (usize, usize), v: (usize, usize)) {
    let planes = FramePlanes::yuv(
        vec![0u8; y.0 * y.1],
        vec![0u8; u.0 * u.1],
        vec![0u8; v.0 * v.1],
    );
    assert!(matches!(
        Frame::new(planes, y.0, y.1, 8),
        Err(FrameError::ChromaLengthMismatch { .. })
    ));
}

#[test]
fn rejects_single_chroma_plane() {
    let planes = FramePlanes {
        y: vec![0u8; 4],
        u: Some(vec![0u8; 4]),
        v: None,
    };
    assert!(matches!(
        Frame::new(planes, 2, 2, 8),
        Err(FrameError::ChromaLengthMismatch { u: 4, v: 0 })
    ));
}

#[test]
fn rejects_invalid_format() {
    let planes = FramePlanes::yuv(vec![0u8; 8], vec![0u8; 4], vec![0u8; 4]);
    assert!(matches!(
        Frame::new(planes, 2, 4, 8),
        Err(FrameError::InvalidFormat)
    ));
}

#[test]
fn rejects_bit_depth_wider_than_sample_type() {
    assert!(matches!(
        Frame::new(FramePlanes::luma(vec![0u8; 4]), 2, 2, 10),
        Err(FrameError::SampleTypeTooNarrow {
            bit_depth: 10,
            bytes: 2
        })
    ));
    assert!(matches!(
        Frame::new(FramePlanes::luma(vec![0u32; 4]), 2, 2, 40),
        Err(FrameError::InvalidBitDepth(40))
    ));
    assert!(Frame::new(FramePlanes::luma(vec![0u32; 4]), 2, 2, 24).is_ok());
}

#[test]
fn infers_formats() {
    assert_eq!(random_frame(8, 6, ChromaFormat::Full, 8).format(), ChromaFormat::Full);
    assert_eq!(random_frame(8, 6, ChromaFormat::Half, 10).format(), ChromaFormat::Half);
    assert_eq!(random_frame(8, 6, ChromaFormat::LumaOnly, 16).format(), ChromaFormat::LumaOnly);
    // Odd dimensions round the chroma planes up
    assert_eq!(random_frame(5, 3, ChromaFormat::Half, 8).format(), ChromaFormat::Half);
}

#[test]
fn chroma_dimensions() {
    let frame = random_frame(320, 180, ChromaFormat::Half, 10);
    assert_eq!(frame.width_chroma().unwrap(), 160);
    assert_eq!(frame.height_chroma().unwrap(), 90);

    let frame = random_frame(280, 158, ChromaFormat::Full, 8);
    assert_eq!(frame.width_chroma().unwrap(), 280);
    assert_eq!(frame.height_chroma().unwrap(), 158);

    let frame = random_frame(4, 4, ChromaFormat::LumaOnly, 8);
    assert!(matches!(
        frame.width_chroma(),
        Err(FrameError::NoChromaComponent(ChromaFormat::LumaOnly))
    ));
    assert!(frame.height_chroma().is_err());
}

#[test]
fn bytes_per_frame_uses_container_width() {
    assert_eq!(random_frame(320, 180, ChromaFormat::Half, 10).bytes_per_frame(), 320 * 180 * 3);
    assert_eq!(random_frame(280, 158, ChromaFormat::Full, 8).bytes_per_frame(), 280 * 158 * 3);
    assert_eq!(random_frame(16, 8, ChromaFormat::LumaOnly, 8).bytes_per_frame(), 16 * 8);

    let frame = Frame::new(FramePlanes::luma(vec![0u32; 6]), 3, 2, 24).unwrap();
    assert_eq!(frame.bytes_per_frame(), 18);
}

#[interpolate_test(full, ChromaFormat::Full)]
#[interpolate_test(half, ChromaFormat::Half)]
#[interpolate_test(luma_only, ChromaFormat::LumaOnly)]
fn converting_to_own_format_is_identity(format: ChromaFormat) {
    let frame = random_frame(16, 8, format, 10);
    assert_eq!(frame.to_format(format).unwrap(), frame);
}

#[test]
fn half_to_full_and_back() {
    let frame = Frame::new(FramePlanes::yuv(vec![1u8; 4], vec![2], vec![3]), 2, 2, 8).unwrap();

    let full = frame.to_format(ChromaFormat::Full).unwrap();
    assert_eq!(full.format(), ChromaFormat::Full);
    assert_eq!(full.y(), &[1, 1, 1, 1]);
    assert_eq!(full.u().unwrap(), &[2, 2, 2, 2]);
    assert_eq!(full.v().unwrap(), &[3, 3, 3, 3]);

    let half = full.to_format(ChromaFormat::Half).unwrap();
    assert_eq!(half, frame);
}

#[test]
fn odd_half_to_full_and_back() {
    let frame = random_frame(5, 3, ChromaFormat::Half, 10);

    let full = frame.to_format(ChromaFormat::Full).unwrap();
    assert_eq!(full.format(), ChromaFormat::Full);
    assert_eq!(full.u().unwrap().len(), 15);
    assert_eq!(full.v().unwrap().len(), 15);
    assert_eq!(full.y(), frame.y());

    let half = full.to_format(ChromaFormat::Half).unwrap();
    assert_eq!(half.u().unwrap().len(), 6);
    assert_eq!(half.v().unwrap().len(), 6);
    assert_eq!(half, frame);
}

#[test]
fn upsampled_chroma_survives_downsampling() {
    let frame = random_frame(64, 32, ChromaFormat::Half, 10);
    let back = frame
        .to_format(ChromaFormat::Full)
        .and_then(|full| full.to_format(ChromaFormat::Half))
        .unwrap();
    assert_eq!(back, frame);
}

#[test]
fn drop_chroma_copies_luma() {
    for format in [ChromaFormat::Full, ChromaFormat::Half] {
        let frame = random_frame(6, 4, format, 8);
        let luma = frame.to_format(ChromaFormat::LumaOnly).unwrap();
        assert_eq!(luma.format(), ChromaFormat::LumaOnly);
        assert_eq!(luma.y(), frame.y());
        assert_eq!(luma.bit_depth(), frame.bit_depth());
        assert!(luma.u().is_none() && luma.v().is_none());
    }
}

#[interpolate_test(to_full, ChromaFormat::Full)]
#[interpolate_test(to_half, ChromaFormat::Half)]
fn luma_only_cannot_gain_chroma(format: ChromaFormat) {
    let frame = random_frame(4, 4, ChromaFormat::LumaOnly, 8);
    assert!(matches!(
        frame.to_format(format),
        Err(FrameError::UnsupportedConversion {
            from: ChromaFormat::LumaOnly,
            ..
        })
    ));
}

#[test]
fn into_planes_returns_buffers() {
    let planes = FramePlanes::yuv(vec![9u16; 16], vec![1; 4], vec![2; 4]);
    let frame = Frame::new(planes.clone(), 4, 4, 12).unwrap();
    assert_eq!(frame.into_planes(), planes);
}
