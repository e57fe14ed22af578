use std::fmt::Debug;

use super::params::ActivationParams;

/// Step used by [`ActivationFunction::derivate_light_default`].
pub const DEFAULT_DERIVATIVE_OFFSET: f64 = 0.001;

/// The contract every activation function variant implements.
///
/// `activate` and `derivate` are total over the reals and never panic for
/// finite input. Infinities and NaN flow through the underlying `exp`/`ln`
/// calls unchanged.
pub trait ActivationFunction: Debug + Send + Sync {
    /// Stable, non-empty identifier of the variant.
    fn name(&self) -> &'static str;

    /// Free-text explanation. Some variants only carry a placeholder.
    fn description(&self) -> &'static str;

    /// Shape parameters the function was constructed with.
    fn params(&self) -> &ActivationParams;

    /// Value of the function at `x`.
    fn activate(&self, x: f64) -> f64;

    /// Slope of the function at `x`, exact or approximated.
    fn derivate(&self, x: f64) -> f64;

    #[inline]
    fn alpha(&self) -> f64 {
        self.params().alpha()
    }

    #[inline]
    fn beta(&self) -> f64 {
        self.params().beta()
    }

    /// Cheap derivative estimate for variants without a closed form.
    ///
    /// Computes `(f(x*alpha + offset) + f(x*alpha - offset)) / (2*offset)`.
    /// The two samples are added, not subtracted, so this is not a central
    /// difference. GeLU's reported derivative depends on this exact form.
    fn derivate_light(&self, x: f64, offset: f64) -> f64 {
        let alpha = self.alpha();
        let a = self.activate(x * alpha + offset);
        let b = self.activate(x * alpha - offset);

        (a + b) / (offset * 2.0)
    }

    fn derivate_light_default(&self, x: f64) -> f64 {
        self.derivate_light(x, DEFAULT_DERIVATIVE_OFFSET)
    }
}
