//! White-balance types and calibration configuration

use crate::calibration::stats::SampleIndexing;

/// White-balance gains with green normalized to 1.0.
///
/// Only meaningful as the product of one full calibration pass; the caller
/// threads the value into subsequent capture configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WbGain {
    pub gain_r: f32,
    pub gain_b: f32,
}

/// Gain estimation strategy.
///
/// Two non-equivalent estimators exist and call sites depend on their
/// exact behavior, so the choice is explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GainStrategy {
    /// Per-channel gains `K / sum`; the smaller of the two green gains is
    /// the normalization anchor. Biases toward not over-amplifying the
    /// weaker green channel.
    #[default]
    MinGreenAnchor,
    /// The green factor is computed from the mean of the two green sums
    /// and used as the anchor directly.
    AverageGreenAnchor,
}

/// Configuration for a calibration pass
#[derive(Debug, Clone, Default)]
pub struct CalibrationConfig {
    /// Gain estimation strategy to use
    pub strategy: GainStrategy,
    /// Raw buffer addressing scheme
    pub indexing: SampleIndexing,
}

impl CalibrationConfig {
    pub fn builder() -> CalibrationConfigBuilder {
        CalibrationConfigBuilder::default()
    }
}

/// Builder for CalibrationConfig
#[derive(Default)]
pub struct CalibrationConfigBuilder {
    strategy: Option<GainStrategy>,
    indexing: Option<SampleIndexing>,
}

impl CalibrationConfigBuilder {
    pub fn strategy(mut self, strategy: GainStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn indexing(mut self, indexing: SampleIndexing) -> Self {
        self.indexing = Some(indexing);
        self
    }

    pub fn build(self) -> CalibrationConfig {
        let default = CalibrationConfig::default();
        CalibrationConfig {
            strategy: self.strategy.unwrap_or(default.strategy),
            indexing: self.indexing.unwrap_or(default.indexing),
        }
    }
}
