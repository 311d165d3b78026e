use tracing::{debug, info};

use crate::calibration::common::error::{CalibrationError, Result};
use crate::calibration::raw::ColorFilter;
use crate::calibration::stats::{ChannelSums, ColorChannelSums};
use crate::calibration::wb::types::{GainStrategy, WbGain};

const NUM_OF_CHANNELS: f32 = 4.0;

/// Derives white-balance gains from one frame's quadrant sums.
///
/// The positional sums are first assigned to R/Gr/Gb/B channels per the
/// filter arrangement, then reduced to R and B gains relative to a green
/// anchor chosen by the strategy. A channel whose sum is zero (degenerate
/// all-black region) makes the result undefined and is reported as a
/// calibration failure rather than propagated as NaN.
pub fn estimate(
    sums: &ChannelSums,
    filter: ColorFilter,
    strategy: GainStrategy,
) -> Result<WbGain> {
    let channels = sums.map(filter);
    check_nonzero(&channels)?;

    let sum_r = channels.r.sum() as f32;
    let sum_gr = channels.gr.sum() as f32;
    let sum_gb = channels.gb.sum() as f32;
    let sum_b = channels.b.sum() as f32;

    let k = (sum_r + sum_gr + sum_gb + sum_b) / NUM_OF_CHANNELS;

    let gain = match strategy {
        GainStrategy::MinGreenAnchor => {
            let gain_r = k / sum_r;
            let gain_gr = k / sum_gr;
            let gain_gb = k / sum_gb;
            let gain_b = k / sum_b;
            let gain_g = gain_gr.min(gain_gb);
            debug!(
                "gains  r: {:.6}  gr: {:.6}  gb: {:.6}  b: {:.6}",
                gain_r / gain_g,
                gain_gr / gain_g,
                gain_gb / gain_g,
                gain_b / gain_g
            );
            WbGain {
                gain_r: gain_r / gain_g,
                gain_b: gain_b / gain_g,
            }
        }
        GainStrategy::AverageGreenAnchor => {
            let factor_r = k / sum_r;
            let factor_g = k / ((sum_gr + sum_gb) / 2.0);
            let factor_b = k / sum_b;
            debug!(
                "factors  r: {:.6}  g: {:.6}  b: {:.6}",
                factor_r, factor_g, factor_b
            );
            WbGain {
                gain_r: factor_r / factor_g,
                gain_b: factor_b / factor_g,
            }
        }
    };

    info!(gain_r = gain.gain_r, gain_b = gain.gain_b, "White-balance gains");
    Ok(gain)
}

fn check_nonzero(channels: &ColorChannelSums) -> Result<()> {
    if channels.r.sum() == 0 {
        return Err(CalibrationError::DivisionByZero("R"));
    }
    if channels.gr.sum() == 0 {
        return Err(CalibrationError::DivisionByZero("Gr"));
    }
    if channels.gb.sum() == 0 {
        return Err(CalibrationError::DivisionByZero("Gb"));
    }
    if channels.b.sum() == 0 {
        return Err(CalibrationError::DivisionByZero("B"));
    }
    Ok(())
}
