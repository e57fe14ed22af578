use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{ActivationError, Result};

/// Sampling window and display rounding for a pair of series.
///
/// The domain is half-open: `start` is sampled, `end` is not. Values only
/// come out of [`SamplingConfigBuilder::build`], which is also the path
/// deserialization takes, so the window is always non-empty with a positive
/// step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSamplingConfig")]
pub struct SamplingConfig {
    start: f64,
    end: f64,
    step: f64,
    activation_precision: Option<u32>,
    derivative_precision: Option<u32>,
}

/// Unvalidated wire form of [`SamplingConfig`].
#[derive(Deserialize)]
struct RawSamplingConfig {
    start: f64,
    end: f64,
    step: f64,
    #[serde(default)]
    activation_precision: Option<u32>,
    #[serde(default)]
    derivative_precision: Option<u32>,
}

impl TryFrom<RawSamplingConfig> for SamplingConfig {
    type Error = ActivationError;

    fn try_from(raw: RawSamplingConfig) -> Result<Self> {
        SamplingConfigBuilder::new()
            .range(raw.start, raw.end)
            .step(raw.step)
            .activation_precision(raw.activation_precision)
            .derivative_precision(raw.derivative_precision)
            .build()
    }
}

impl SamplingConfig {
    pub fn builder() -> SamplingConfigBuilder {
        SamplingConfigBuilder::new()
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    /// Exclusive upper bound.
    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Decimal places kept for activation values; `None` keeps them raw.
    pub fn activation_precision(&self) -> Option<u32> {
        self.activation_precision
    }

    /// Decimal places kept for derivative values; `None` keeps them raw.
    pub fn derivative_precision(&self) -> Option<u32> {
        self.derivative_precision
    }

    /// Same window, no rounding.
    pub fn raw(mut self) -> Self {
        self.activation_precision = None;
        self.derivative_precision = None;
        self
    }

    /// The x values to evaluate, `start, start + step, ...` below `end`.
    pub fn domain(&self) -> Array1<f64> {
        Array1::range(self.start, self.end, self.step)
    }

    pub fn len(&self) -> usize {
        self.domain().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        SamplingConfig {
            start: -10.0,
            end: 10.0,
            step: 0.5,
            activation_precision: Some(0),
            derivative_precision: Some(3),
        }
    }
}

/// Builder for SamplingConfig
pub struct SamplingConfigBuilder {
    config: SamplingConfig,
}

impl SamplingConfigBuilder {
    /// Create a new sampling config builder with the default window
    pub fn new() -> Self {
        SamplingConfigBuilder {
            config: SamplingConfig::default(),
        }
    }

    /// Set the half-open range `[start, end)`
    pub fn range(mut self, start: f64, end: f64) -> Self {
        self.config.start = start;
        self.config.end = end;
        self
    }

    /// Set the distance between samples
    pub fn step(mut self, step: f64) -> Self {
        self.config.step = step;
        self
    }

    pub fn activation_precision(mut self, digits: Option<u32>) -> Self {
        self.config.activation_precision = digits;
        self
    }

    pub fn derivative_precision(mut self, digits: Option<u32>) -> Self {
        self.config.derivative_precision = digits;
        self
    }

    /// Disable rounding for both series
    pub fn raw(mut self) -> Self {
        self.config = self.config.raw();
        self
    }

    /// Build the sampling config
    pub fn build(self) -> Result<SamplingConfig> {
        let SamplingConfig { start, end, step, .. } = self.config;

        if !start.is_finite() || !end.is_finite() {
            return Err(ActivationError::invalid_parameter(
                "range".to_string(),
                format!("bounds must be finite, got [{}, {})", start, end),
            ));
        }

        if start >= end {
            return Err(ActivationError::invalid_parameter(
                "range".to_string(),
                format!("start {} must be below end {}", start, end),
            ));
        }

        if !step.is_finite() || step <= 0.0 {
            return Err(ActivationError::invalid_parameter(
                "step".to_string(),
                format!("must be positive and finite, got {}", step),
            ));
        }

        Ok(self.config)
    }
}

impl Default for SamplingConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
