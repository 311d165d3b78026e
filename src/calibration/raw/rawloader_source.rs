//! Frame source backed by the rawloader library.
//!
//! Decodes any RAW format rawloader supports (ARW, CR2, NEF, DNG, ...) and
//! reshapes the result into the frame representation the calibration core
//! consumes, including the sensor's color filter arrangement.

use std::io::Cursor;
use std::path::Path;

use rawloader::RawImageData as RawloaderImageData;
use tracing::debug;

use crate::calibration::common::error::{CalibrationError, Result};
use crate::calibration::raw::source::RawFrameSource;
use crate::calibration::raw::types::{ColorFilter, SensorFrame};

/// Frame source that uses the rawloader library for decoding.
pub struct RawLoaderSource;

impl RawLoaderSource {
    /// Reads a RAW file from disk and decodes it into a [`SensorFrame`].
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<SensorFrame> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| {
            CalibrationError::InputReadError(format!("{}: {}", path.display(), e))
        })?;
        self.read_frame(&data)
    }
}

impl RawFrameSource for RawLoaderSource {
    /// Decodes raw file bytes into a sensor frame.
    ///
    /// Integer sensor data is carried through as-is; float data
    /// (normalized 0.0-1.0) is scaled to the u16 range. The decoded CFA
    /// pattern name is mapped to a [`ColorFilter`], falling back to BGGR
    /// for anything unrecognized.
    fn read_frame(&self, data: &[u8]) -> Result<SensorFrame> {
        debug!("Decoding raw frame, {} bytes", data.len());

        let decoded = rawloader::decode(&mut Cursor::new(data))
            .map_err(|e| CalibrationError::DecodeError(e.to_string()))?;

        let width = decoded.width;
        let height = decoded.height;
        let color_filter = ColorFilter::from_pattern(&decoded.cfa.name);

        debug!(
            "Decoded frame: {}x{}, CFA pattern {}",
            width, height, decoded.cfa.name
        );

        let samples: Vec<u16> = match decoded.data {
            RawloaderImageData::Integer(values) => {
                values.iter().map(|&v| v as u16).collect()
            }
            RawloaderImageData::Float(values) => values
                .iter()
                .map(|&v| (v * u16::MAX as f32) as u16)
                .collect(),
        };

        Ok(SensorFrame {
            width,
            height,
            samples,
            color_filter,
        })
    }
}
