use tracing::debug;

use crate::calibration::common::error::{CalibrationError, Result};
use crate::calibration::raw::RawFrame;
use crate::calibration::stats::types::{ChannelSums, SampleIndexing};

/// Scans a raw frame and accumulates per-quadrant pixel sums.
///
/// Every `(row, col)` position is visited once; the sample it contributes
/// is fetched at the index the selected [`SampleIndexing`] computes. With
/// `HeightStride` the highest address can exceed `width * height` on
/// frames taller than they are wide, so the span actually addressed is
/// validated up front.
pub fn reduce(frame: &RawFrame<'_>, indexing: SampleIndexing) -> Result<ChannelSums> {
    let width = frame.width();
    let height = frame.height();
    let samples = frame.samples();

    let required = match indexing {
        SampleIndexing::HeightStride => (height - 1) * height + width,
        SampleIndexing::WidthStride => width * height,
    };
    if samples.len() < required {
        return Err(CalibrationError::InvalidFrame(format!(
            "buffer holds {} samples, {:?} addressing of a {}x{} frame needs {}",
            samples.len(),
            indexing,
            width,
            height,
            required
        )));
    }

    let mut sums = ChannelSums::default();
    for row in 0..height {
        for col in 0..width {
            let idx = match indexing {
                SampleIndexing::HeightStride => row * height + col,
                SampleIndexing::WidthStride => row * width + col,
            };
            sums.accumulate(row, col, samples[idx]);
        }
    }

    debug!(
        top_left = sums.top_left.sum(),
        top_right = sums.top_right.sum(),
        bottom_left = sums.bottom_left.sum(),
        bottom_right = sums.bottom_right.sum(),
        "Reduced {}x{} frame",
        width,
        height
    );

    Ok(sums)
}
