//! Raw frame data types

use crate::calibration::common::error::{CalibrationError, Result};

/// The 2x2 repeating color filter arrangement of a Bayer sensor, as
/// reported by the camera's static metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorFilter {
    Rggb,
    Grbg,
    Gbrg,
    /// Also the fallback for unrecognized arrangements.
    #[default]
    Bggr,
}

impl ColorFilter {
    /// Maps the integer code carried in sensor metadata
    /// (0 = RGGB, 1 = GRBG, 2 = GBRG, 3 = BGGR) to a filter arrangement.
    /// Unknown codes fall back to BGGR.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ColorFilter::Rggb,
            1 => ColorFilter::Grbg,
            2 => ColorFilter::Gbrg,
            _ => ColorFilter::Bggr,
        }
    }

    /// Maps a CFA pattern name such as `"RGGB"` to a filter arrangement.
    /// Unknown names fall back to BGGR.
    pub fn from_pattern(name: &str) -> Self {
        match name {
            "RGGB" => ColorFilter::Rggb,
            "GRBG" => ColorFilter::Grbg,
            "GBRG" => ColorFilter::Gbrg,
            _ => ColorFilter::Bggr,
        }
    }
}

/// Immutable view over a contiguous buffer of 16-bit Bayer samples.
///
/// Dimensions must be even (the 2x2 filter tile must not be cut) and the
/// buffer must hold at least `width * height` samples.
#[derive(Debug, Clone, Copy)]
pub struct RawFrame<'a> {
    samples: &'a [u16],
    width: usize,
    height: usize,
}

impl<'a> RawFrame<'a> {
    pub fn new(samples: &'a [u16], width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CalibrationError::InvalidFrame(format!(
                "zero dimension: {width}x{height}"
            )));
        }
        if width % 2 != 0 || height % 2 != 0 {
            return Err(CalibrationError::InvalidFrame(format!(
                "odd dimension: {width}x{height}"
            )));
        }
        if samples.len() < width * height {
            return Err(CalibrationError::InvalidFrame(format!(
                "buffer holds {} samples, {}x{} needs {}",
                samples.len(),
                width,
                height,
                width * height
            )));
        }
        Ok(Self {
            samples,
            width,
            height,
        })
    }

    pub fn samples(&self) -> &'a [u16] {
        self.samples
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

/// Owned, decoded sensor frame as produced by a [`super::RawFrameSource`].
#[derive(Debug, Clone)]
pub struct SensorFrame {
    /// Width of the frame in pixels
    pub width: usize,
    /// Height of the frame in pixels
    pub height: usize,
    /// Raw pixel data (single channel Bayer pattern)
    pub samples: Vec<u16>,
    /// Color filter arrangement of the sensor
    pub color_filter: ColorFilter,
}

impl SensorFrame {
    /// Borrows the frame data as a [`RawFrame`] view for the reducer.
    pub fn view(&self) -> Result<RawFrame<'_>> {
        RawFrame::new(&self.samples, self.width, self.height)
    }
}
