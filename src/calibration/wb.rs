//! White-balance gain estimation
//!
//! Consumes the reducer's per-quadrant sums and derives normalized R/B
//! gains (green is the reference at 1.0). [`WbCalibrator`] bundles the
//! full raw-bytes-to-gains path behind one call.

mod calibrator;
mod estimator;
mod types;


pub use calibrator::WbCalibrator;
pub use estimator::estimate;
pub use types::{CalibrationConfig, CalibrationConfigBuilder, GainStrategy, WbGain};
