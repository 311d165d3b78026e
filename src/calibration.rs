//! Image-calibration core
//!
//! Pure numeric routines for calibrating a camera sensor from its raw
//! output: per-channel Bayer statistics and white-balance gains, color
//! matrix saturation adaptation, and tone-curve generation. The capture
//! side (device handling, request plumbing, file saving) is expected to
//! live elsewhere and call into this module with raw buffers and level
//! settings.

pub mod color;
pub mod common;
pub mod raw;
pub mod stats;
pub mod tone;
pub mod wb;

pub use common::{CalibrationError, Result};

pub use raw::{ColorFilter, RawFrame, RawFrameSource, RawLoaderSource, SensorFrame};

pub use stats::{ChannelSums, ColorChannelSums, SampleIndexing, SampleSum};

pub use wb::{
    CalibrationConfig, CalibrationConfigBuilder, GainStrategy, WbCalibrator, WbGain,
};

pub use color::{ColorSpaceTransform, adapt_color_transform, transform_for_level};

pub use tone::ToneCurve;
