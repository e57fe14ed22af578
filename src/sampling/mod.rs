//! # Sampling
//!
//! Evaluates activation functions over a fixed window to produce plottable
//! series. The functions themselves keep no record of what was sampled; the
//! series belong to the caller.
//!
//! The default window is `x` in `[-10, 10)` with a step of `0.5`, activation
//! values rounded to whole numbers and derivatives to three decimals (ties to
//! even). Use [`SamplingConfig::raw`] for unrounded values.

pub mod config;
pub mod series;

pub use config::{SamplingConfig, SamplingConfigBuilder};
pub use series::{SamplePoint, SampledSeries, SeriesKind, SeriesPair};

use tracing::debug;

use crate::activations::ActivationFunction;
use crate::registry::ActivationRegistry;

/// Sample both curves of `function` over the configured domain.
pub fn sample_function(function: &dyn ActivationFunction, config: &SamplingConfig) -> SeriesPair {
    let domain = config.domain();
    let name = function.name().to_string();

    let activation = domain
        .iter()
        .map(|&x| SamplePoint {
            x,
            y: round_to(function.activate(x), config.activation_precision()),
        })
        .collect();

    let derivative = domain
        .iter()
        .map(|&x| SamplePoint {
            x,
            y: round_to(function.derivate(x), config.derivative_precision()),
        })
        .collect();

    debug!(function = %name, points = domain.len(), "sampled activation");

    SeriesPair {
        activation: SampledSeries {
            name: name.clone(),
            kind: SeriesKind::Activation,
            points: activation,
        },
        derivative: SampledSeries {
            name,
            kind: SeriesKind::Derivative,
            points: derivative,
        },
    }
}

/// Sample every registry entry, in registry order.
pub fn sample_registry(registry: &ActivationRegistry, config: &SamplingConfig) -> Vec<SeriesPair> {
    registry
        .iter()
        .map(|function| sample_function(function, config))
        .collect()
}

/// Round to `digits` decimals, ties to even. Non-finite values pass through.
pub fn round_to(value: f64, digits: Option<u32>) -> f64 {
    match digits {
        None => value,
        Some(_) if !value.is_finite() => value,
        Some(0) => value.round_ties_even(),
        Some(digits) => {
            let factor = 10f64.powi(digits as i32);
            (value * factor).round_ties_even() / factor
        }
    }
}
