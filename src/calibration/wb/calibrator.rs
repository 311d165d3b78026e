use tracing::info;

use crate::calibration::common::error::{CalibrationError, Result};
use crate::calibration::raw::{ColorFilter, RawFrame};
use crate::calibration::stats::reduce;
use crate::calibration::wb::estimator::estimate;
use crate::calibration::wb::types::{CalibrationConfig, WbGain};

/// One-call white-balance calibration over raw sensor bytes.
///
/// Constructed once per sensor with the active array geometry and filter
/// arrangement; each [`calibrate`](Self::calibrate) call is an independent
/// pass that returns the gains by value. The calibrator holds no result
/// state, so a single instance may be shared across threads.
pub struct WbCalibrator {
    width: usize,
    height: usize,
    filter: ColorFilter,
    config: CalibrationConfig,
}

impl WbCalibrator {
    pub fn new(width: usize, height: usize, filter: ColorFilter) -> Self {
        Self::with_config(width, height, filter, CalibrationConfig::default())
    }

    pub fn with_config(
        width: usize,
        height: usize,
        filter: ColorFilter,
        config: CalibrationConfig,
    ) -> Self {
        Self {
            width,
            height,
            filter,
            config,
        }
    }

    /// Calibrates from raw little-endian 16-bit sample bytes.
    ///
    /// `raw` must hold at least `width * height * 2` bytes.
    pub fn calibrate(&self, raw: &[u8]) -> Result<WbGain> {
        if raw.len() < self.width * self.height * 2 {
            return Err(CalibrationError::InvalidFrame(format!(
                "buffer holds {} bytes, {}x{} 16-bit frame needs {}",
                raw.len(),
                self.width,
                self.height,
                self.width * self.height * 2
            )));
        }

        let samples: Vec<u16> = raw
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        self.calibrate_samples(&samples)
    }

    /// Calibrates from already-decoded 16-bit samples.
    pub fn calibrate_samples(&self, samples: &[u16]) -> Result<WbGain> {
        info!(
            "Sensor active array: {} x {}, color filter: {:?}",
            self.width, self.height, self.filter
        );

        let frame = RawFrame::new(samples, self.width, self.height)?;
        let sums = reduce(&frame, self.config.indexing)?;
        estimate(&sums, self.filter, self.config.strategy)
    }

    pub fn config(&self) -> &CalibrationConfig {
        &self.config
    }
}
