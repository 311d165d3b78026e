//! Saturation adaptation of a color-correction matrix
//!
//! The base matrix is taken to YUV, the two chroma axes are scaled by the
//! saturation factor, and the result is brought back to RGB. The final
//! transpose is part of the transform's element-order convention.

use tracing::debug;

use crate::calibration::color::types::ColorSpaceTransform;

const RGB_TO_YUV: [f32; 9] = [
    0.299, -0.169, 0.5,
    0.587, -0.331, -0.419,
    0.114, 0.5, -0.081,
];

const YUV_TO_RGB: [f32; 9] = [
    1.0, 1.0, 1.0,
    -0.00093, -0.3437, 1.77216,
    1.401687, -0.71417, 0.00099,
];

/// Adapts a color-correction matrix for a saturation factor.
///
/// Luma is left unscaled; the chroma axes are multiplied by `saturation`.
/// A factor of 1.0 reproduces the base matrix up to quantization.
pub fn adapt_color_transform(
    base: &ColorSpaceTransform,
    saturation: f32,
) -> ColorSpaceTransform {
    debug!(saturation, "Adapting color transform");

    let cc = base.coefficients();
    let adjust: [f32; 9] = [
        1.0, 0.0, 0.0,
        0.0, saturation, 0.0,
        0.0, 0.0, saturation,
    ];

    let rgb = transpose(&multiply(
        &multiply(&multiply(&cc, &RGB_TO_YUV), &adjust),
        &YUV_TO_RGB,
    ));
    ColorSpaceTransform::from_coefficients(&rgb)
}

fn multiply(m1: &[f32; 9], m2: &[f32; 9]) -> [f32; 9] {
    let mut result = [0.0f32; 9];
    for i in 0..3 {
        for j in 0..3 {
            result[i * 3 + j] =
                m1[i * 3] * m2[j] + m1[i * 3 + 1] * m2[j + 3] + m1[i * 3 + 2] * m2[j + 6];
        }
    }
    result
}

fn transpose(m: &[f32; 9]) -> [f32; 9] {
    let mut result = [0.0f32; 9];
    for i in 0..3 {
        for j in 0..3 {
            result[i * 3 + j] = m[j * 3 + i];
        }
    }
    result
}
