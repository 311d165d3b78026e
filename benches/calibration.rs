use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sensor_calib::calibration::{
    adapt_color_transform, tone, transform_for_level, CalibrationConfig, ColorFilter,
    GainStrategy, WbCalibrator,
};

fn generate_mock_frame(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height * 2);
    for y in 0..height {
        for x in 0..width {
            let value = ((x + y) % 1024) as u16;
            data.extend_from_slice(&value.to_le_bytes());
        }
    }
    data
}

fn benchmark_calibration_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("calibration_by_size");

    let sizes = vec![(256, "256x256"), (512, "512x512"), (1024, "1024x1024")];

    for (size, label) in sizes {
        let mock_data = generate_mock_frame(size, size);

        group.bench_with_input(BenchmarkId::from_parameter(label), &mock_data, |b, data| {
            let calibrator = WbCalibrator::new(size, size, ColorFilter::Rggb);
            b.iter(|| calibrator.calibrate(black_box(data)));
        });
    }

    group.finish();
}

fn benchmark_gain_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("gain_strategies");
    let mock_data = generate_mock_frame(512, 512);

    let strategies = vec![
        (GainStrategy::MinGreenAnchor, "min_green"),
        (GainStrategy::AverageGreenAnchor, "average_green"),
    ];

    for (strategy, label) in strategies {
        group.bench_with_input(BenchmarkId::from_parameter(label), &mock_data, |b, data| {
            let config = CalibrationConfig::builder().strategy(strategy).build();
            let calibrator = WbCalibrator::with_config(512, 512, ColorFilter::Rggb, config);
            b.iter(|| calibrator.calibrate(black_box(data)));
        });
    }

    group.finish();
}

fn benchmark_matrix_adaptation(c: &mut Criterion) {
    c.bench_function("adapt_color_transform", |b| {
        let base = transform_for_level(4);
        b.iter(|| adapt_color_transform(black_box(base), black_box(1.2)));
    });
}

fn benchmark_tone_curve(c: &mut Criterion) {
    c.bench_function("generate_tone_curve", |b| {
        b.iter(|| tone::generate(black_box(0), black_box(2)));
    });
}

criterion_group!(
    benches,
    benchmark_calibration_sizes,
    benchmark_gain_strategies,
    benchmark_matrix_adaptation,
    benchmark_tone_curve
);
criterion_main!(benches);
