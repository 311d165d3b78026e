use crate::calibration::common::error::CalibrationError;
use crate::calibration::raw::{ColorFilter, RawFrame};
use crate::calibration::stats::{reduce, ChannelSums, SampleIndexing};

fn frame_samples(width: usize, height: usize, f: impl Fn(usize, usize) -> u16) -> Vec<u16> {
    let mut samples = vec![0u16; width * height];
    for row in 0..height {
        for col in 0..width {
            samples[row * width + col] = f(row, col);
        }
    }
    samples
}

#[test]
fn reduce_accumulates_per_quadrant() {
    // 4x4, distinct value per quadrant position
    let samples = frame_samples(4, 4, |row, col| match (row % 2, col % 2) {
        (0, 0) => 100,
        (0, 1) => 200,
        (1, 0) => 300,
        _ => 400,
    });
    let frame = RawFrame::new(&samples, 4, 4).unwrap();
    let sums = reduce(&frame, SampleIndexing::WidthStride).unwrap();

    assert_eq!(sums.top_left.sum(), 400);
    assert_eq!(sums.top_right.sum(), 800);
    assert_eq!(sums.bottom_left.sum(), 1200);
    assert_eq!(sums.bottom_right.sum(), 1600);
    assert_eq!(sums.top_left.count(), 4);
    assert_eq!(sums.top_right.count(), 4);
    assert_eq!(sums.bottom_left.count(), 4);
    assert_eq!(sums.bottom_right.count(), 4);
    assert!((sums.bottom_left.average() - 300.0).abs() < f32::EPSILON);
}

#[test]
fn indexing_modes_agree_on_square_frames() {
    let samples = frame_samples(8, 8, |row, col| (row * 8 + col) as u16);
    let frame = RawFrame::new(&samples, 8, 8).unwrap();

    let height_stride = reduce(&frame, SampleIndexing::HeightStride).unwrap();
    let width_stride = reduce(&frame, SampleIndexing::WidthStride).unwrap();
    assert_eq!(height_stride, width_stride);
}

#[test]
fn height_stride_addresses_beyond_tall_frames() {
    // 2x4 frame: height-stride addressing reaches past the 8 samples a
    // width-stride pass would need.
    let samples = vec![1u16; 8];
    let frame = RawFrame::new(&samples, 2, 4).unwrap();

    assert!(reduce(&frame, SampleIndexing::WidthStride).is_ok());
    let err = reduce(&frame, SampleIndexing::HeightStride).unwrap_err();
    assert!(matches!(err, CalibrationError::InvalidFrame(_)));
}

#[test]
fn frame_rejects_zero_and_odd_dimensions() {
    let samples = vec![0u16; 64];
    assert!(matches!(
        RawFrame::new(&samples, 0, 8),
        Err(CalibrationError::InvalidFrame(_))
    ));
    assert!(matches!(
        RawFrame::new(&samples, 8, 0),
        Err(CalibrationError::InvalidFrame(_))
    ));
    assert!(matches!(
        RawFrame::new(&samples, 3, 8),
        Err(CalibrationError::InvalidFrame(_))
    ));
}

#[test]
fn frame_rejects_short_buffer() {
    let samples = vec![0u16; 63];
    assert!(matches!(
        RawFrame::new(&samples, 8, 8),
        Err(CalibrationError::InvalidFrame(_))
    ));
}

#[test]
fn mapping_assigns_quadrants_per_filter() {
    let mut sums = ChannelSums::default();
    sums.accumulate(0, 0, 1); // top_left
    sums.accumulate(0, 1, 2); // top_right
    sums.accumulate(1, 0, 3); // bottom_left
    sums.accumulate(1, 1, 4); // bottom_right

    let rggb = sums.map(ColorFilter::Rggb);
    assert_eq!(rggb.r.sum(), 1);
    assert_eq!(rggb.gr.sum(), 2);
    assert_eq!(rggb.gb.sum(), 3);
    assert_eq!(rggb.b.sum(), 4);

    let grbg = sums.map(ColorFilter::Grbg);
    assert_eq!(grbg.gr.sum(), 1);
    assert_eq!(grbg.r.sum(), 2);
    assert_eq!(grbg.b.sum(), 3);
    assert_eq!(grbg.gb.sum(), 4);

    let gbrg = sums.map(ColorFilter::Gbrg);
    assert_eq!(gbrg.gb.sum(), 1);
    assert_eq!(gbrg.b.sum(), 2);
    assert_eq!(gbrg.r.sum(), 3);
    assert_eq!(gbrg.gr.sum(), 4);

    let bggr = sums.map(ColorFilter::Bggr);
    assert_eq!(bggr.b.sum(), 1);
    assert_eq!(bggr.gb.sum(), 2);
    assert_eq!(bggr.gr.sum(), 3);
    assert_eq!(bggr.r.sum(), 4);
}

#[test]
fn unknown_filter_codes_fall_back_to_bggr() {
    assert_eq!(ColorFilter::from_code(0), ColorFilter::Rggb);
    assert_eq!(ColorFilter::from_code(3), ColorFilter::Bggr);
    assert_eq!(ColorFilter::from_code(7), ColorFilter::Bggr);
    assert_eq!(ColorFilter::from_code(-1), ColorFilter::Bggr);
    assert_eq!(ColorFilter::from_pattern("GBRG"), ColorFilter::Gbrg);
    assert_eq!(ColorFilter::from_pattern("XTRANS"), ColorFilter::Bggr);
}
