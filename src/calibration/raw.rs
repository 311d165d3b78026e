//! Raw sensor frame types and frame sources
//!
//! The calibration core operates on borrowed [`RawFrame`] views. An owned
//! [`SensorFrame`] plus the [`RawFrameSource`] trait cover the file-based
//! path used by tooling and the demo binary.

mod rawloader_source;
mod source;
pub mod types;

pub use rawloader_source::RawLoaderSource;
pub use source::RawFrameSource;
pub use types::{ColorFilter, RawFrame, SensorFrame};
