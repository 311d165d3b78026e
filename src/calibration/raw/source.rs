use crate::calibration::common::error::Result;
use crate::calibration::raw::types::SensorFrame;

pub trait RawFrameSource {
    fn read_frame(&self, data: &[u8]) -> Result<SensorFrame>;
}
