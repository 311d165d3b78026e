use tracing::debug;

use crate::calibration::tone::types::{ToneCurve, TONE_CURVE_KNOTS};

/// The fixed base curve, a mild S-curve over [0,1]x[0,1], as 32
/// interleaved (input, output) pairs.
const BASE_CURVE: [f32; TONE_CURVE_KNOTS * 2] = [
    0.0,         0.0,         0.032258064, 0.08993158,  0.06451613,  0.19061583,  0.09677419,  0.27077225,
    0.12903225,  0.3431085,   0.16129032,  0.39687195,  0.19354838,  0.44770283,  0.22580644,  0.4907136,
    0.2580645,   0.5356794,   0.29032257,  0.57087,     0.32258064,  0.6041056,   0.3548387,   0.6344086,
    0.38709676,  0.6656892,   0.41935483,  0.6911046,   0.4516129,   0.714565,    0.48387095,  0.7380254,
    0.516129,    0.7614858,   0.5483871,   0.7820137,   0.58064514,  0.80254155,  0.61290324,  0.82013685,
    0.6451613,   0.83968717,  0.67741936,  0.856305,    0.7096774,   0.87194526,  0.7419355,   0.88856304,
    0.7741935,   0.9042033,   0.8064516,   0.9178886,   0.83870965,  0.9325513,   0.87096775,  0.94525903,
    0.9032258,   0.9599218,   0.9354839,   0.97262955,  0.9677419,   0.98533726,  1.0,         1.0,
];

/// The base curve, unmodified.
pub fn base_curve() -> ToneCurve {
    ToneCurve::from_flat(&BASE_CURVE)
}

/// Generates a tone curve for brightness and contrast levels, both
/// nominally in [-4, +4].
///
/// This is the path capture configuration uses: the contrast level maps
/// to a factor of `1.0 + contrast * 0.08` and the base curve is remapped
/// with [`apply_contrast`]. The brightness level does not move this
/// curve; see [`generate_with_brightness`] for the variant that folds a
/// brightness offset into the remap.
pub fn generate(brightness: i32, contrast: i32) -> ToneCurve {
    debug!(brightness, contrast, "Generating tone curve");
    let contrast_factor = 1.0 + contrast as f32 * 0.08;
    apply_contrast(&base_curve(), contrast_factor)
}

/// Remaps a curve's outputs around the 0.5 midpoint by a contrast factor.
///
/// The factor's valid range is [0.5, 1.5] and it is clamped to that range
/// here. Outputs are pinned to ±0.5 around the midpoint, so the result
/// never leaves [0, 1]; inputs pass through unchanged.
pub fn apply_contrast(curve: &ToneCurve, contrast_factor: f32) -> ToneCurve {
    let valid_factor = contrast_factor.clamp(0.5, 1.5);

    let input = curve.to_flat();
    let mut output = input;
    for idx in (0..input.len()).step_by(2) {
        output[idx + 1] = ((input[idx + 1] - 0.5) * valid_factor).clamp(-0.5, 0.5) + 0.5;
    }

    ToneCurve::from_flat(&output)
}

/// Alternate generator that also shifts the curve by a fixed per-level
/// brightness offset.
///
/// Unlike [`apply_contrast`], the contrast factor is used as computed,
/// without the [0.5, 1.5] clamp; only the final output value is pinned
/// to ±0.5 around the midpoint. Levels outside [-4, +4] contribute no
/// offset.
pub fn generate_with_brightness(brightness: i32, contrast: i32) -> ToneCurve {
    debug!(brightness, contrast, "Generating brightness-offset tone curve");

    let contrast_factor = 1.0 + contrast as f32 * 0.08;
    let brightness_factor = brightness_offset(brightness);

    let mut result = BASE_CURVE;
    for idx in (0..BASE_CURVE.len()).step_by(2) {
        result[idx + 1] = ((BASE_CURVE[idx + 1] - 0.5) * contrast_factor + brightness_factor)
            .clamp(-0.5, 0.5)
            + 0.5;
    }

    ToneCurve::from_flat(&result)
}

fn brightness_offset(level: i32) -> f32 {
    match level {
        -4 => -0.24,
        -3 => -0.18,
        -2 => -0.12,
        -1 => -0.06,
        0 => 0.0,
        1 => 0.06,
        2 => 0.12,
        3 => 0.18,
        4 => 0.24,
        _ => 0.0,
    }
}
