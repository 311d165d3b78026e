use anyhow::Context;
use sensor_calib::calibration::tone;
use sensor_calib::calibration::{
    adapt_color_transform, transform_for_level, CalibrationConfig, RawFrameSource,
    RawLoaderSource, SampleIndexing, WbCalibrator,
};
use sensor_calib::logger;

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "input.arw".into());
    info!("Calibrating from {}", path);

    let data = std::fs::read(&path).with_context(|| format!("reading {path}"))?;
    let frame = RawLoaderSource
        .read_frame(&data)
        .with_context(|| format!("decoding {path}"))?;
    info!(
        "Frame: {}x{}, color filter {:?}",
        frame.width, frame.height, frame.color_filter
    );

    // File data is stored row-major, so address it with the width stride.
    let config = CalibrationConfig::builder()
        .indexing(SampleIndexing::WidthStride)
        .build();
    let calibrator =
        WbCalibrator::with_config(frame.width, frame.height, frame.color_filter, config);

    match calibrator.calibrate_samples(&frame.samples) {
        Ok(gain) => info!(gain_r = gain.gain_r, gain_b = gain.gain_b, "Calibration done"),
        Err(e) => error!("Calibration failed: {}", e),
    }

    let adapted = adapt_color_transform(transform_for_level(4), 1.2);
    info!("Adapted color transform: {:?}", adapted.elements());

    let curve = tone::generate(0, 2);
    info!("Tone curve: {} knots", curve.knots().len());

    Ok(())
}
