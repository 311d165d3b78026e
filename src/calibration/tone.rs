//! Tone-curve generation
//!
//! Produces 32-knot tone-mapping curves from brightness/contrast levels.
//! Callers typically apply the same curve to all three color channels.

mod generator;
mod types;


pub use generator::{apply_contrast, base_curve, generate, generate_with_brightness};
pub use types::{ToneCurve, TONE_CURVE_KNOTS};
