#![allow(clippy::upper_case_acronyms)]

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::contract::ActivationFunction;
use super::params::ActivationParams;
use crate::error::Result;

/// Scale constant (lambda) of SeLU.
pub const SELU_LAMBDA: f64 = 1.0507;
/// Saturation constant (alpha) of SeLU, distinct from the shape parameter.
pub const SELU_ALPHA: f64 = 1.6733;
/// Default `beta` of [`Tanh`] when built from `alpha` alone.
pub const TANH_DEFAULT_BETA: f64 = 2.0 / 3.0;
/// Step GeLU hands to [`ActivationFunction::derivate_light`].
pub const GELU_DERIVATIVE_OFFSET: f64 = 1.0;

/// Declares a variant struct holding only its parameters, with the usual
/// `new`/`try_new` constructors and its name and description constants.
macro_rules! activation_variant {
    ($(#[$meta:meta])* $name:ident, $label:expr, $description:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            params: ActivationParams,
        }

        impl $name {
            pub const NAME: &'static str = $label;
            pub const DESCRIPTION: &'static str = $description;

            pub fn new(alpha: f64) -> Self {
                $name { params: ActivationParams::new(alpha) }
            }

            /// Like `new`, but rejects a non-finite `alpha`.
            pub fn try_new(alpha: f64) -> Result<Self> {
                Ok($name { params: ActivationParams::try_new(alpha)? })
            }
        }
    };
}

/// Implements the bookkeeping half of [`ActivationFunction`]; the two
/// formulas follow as a block.
macro_rules! impl_activation {
    ($name:ident { $($formulas:tt)* }) => {
        impl ActivationFunction for $name {
            fn name(&self) -> &'static str {
                Self::NAME
            }

            fn description(&self) -> &'static str {
                Self::DESCRIPTION
            }

            fn params(&self) -> &ActivationParams {
                &self.params
            }

            $($formulas)*
        }
    };
}

activation_variant!(
    /// Logistic sigmoid with slope `alpha`.
    Sigmoid,
    "Sigmoid",
    "Typically used for models that must predict a probability as output. Since a probability \
     only exists in the range 0 to 1, the sigmoid is the right choice because of its range. The \
     function is differentiable and gives a smooth gradient, preventing jumps in the output \
     values. This is represented by the S-shape of the sigmoid activation function."
);

impl_activation!(Sigmoid {
    fn activate(&self, x: f64) -> f64 {
        1.0 / (1.0 + (self.alpha() * -x).exp())
    }

    fn derivate(&self, x: f64) -> f64 {
        let f = self.activate(x);
        self.alpha() * f * (1.0 - f)
    }
});

/// Hyperbolic tangent of `alpha * x`.
///
/// Carries a `beta` that the formulas never read. It defaults to
/// [`TANH_DEFAULT_BETA`]; convenient values are `alpha = 1.7159`, `beta = 2/3`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tanh {
    params: ActivationParams,
}

impl Tanh {
    pub const NAME: &'static str = "Tanh";
    // Shares the sigmoid text.
    pub const DESCRIPTION: &'static str = Sigmoid::DESCRIPTION;

    pub fn new(alpha: f64) -> Self {
        Self::with_beta(alpha, TANH_DEFAULT_BETA)
    }

    pub fn with_beta(alpha: f64, beta: f64) -> Self {
        Tanh { params: ActivationParams::with_beta(alpha, beta) }
    }

    pub fn try_new(alpha: f64) -> Result<Self> {
        Self::try_with_beta(alpha, TANH_DEFAULT_BETA)
    }

    pub fn try_with_beta(alpha: f64, beta: f64) -> Result<Self> {
        Ok(Tanh { params: ActivationParams::try_with_beta(alpha, beta)? })
    }
}

impl_activation!(Tanh {
    fn activate(&self, x: f64) -> f64 {
        let alpha = self.alpha();
        ((alpha * x).exp() - (alpha * -x).exp()) / ((alpha * x).exp() + (alpha * -x).exp())
    }

    // Ignores alpha.
    fn derivate(&self, x: f64) -> f64 {
        1.0 - x.tanh().powi(2)
    }
});

activation_variant!(
    /// Rectifier whose negative side is scaled by `alpha`.
    ReLU,
    "ReLU",
    "Since only a certain number of neurons are activated, ReLU is far more computationally \
     efficient than the sigmoid and tanh functions. ReLU speeds up the convergence of gradient \
     descent towards the global minimum of the loss function thanks to its linear, \
     non-saturating property."
);

impl_activation!(ReLU {
    fn activate(&self, x: f64) -> f64 {
        if x < 0.0 { self.alpha() * x } else { x }
    }

    fn derivate(&self, x: f64) -> f64 {
        if x < 0.0 { -self.alpha() } else { 1.0 }
    }
});

activation_variant!(
    /// Leaky rectifier. The branch compares `x` against `x * 0.1`, not a
    /// fixed threshold.
    LeakyReLU,
    "LeakyReLU",
    "Like ReLU, but keeps back-propagation working even for negative input values."
);

impl_activation!(LeakyReLU {
    fn activate(&self, x: f64) -> f64 {
        leaky_activate(self.alpha(), x)
    }

    fn derivate(&self, x: f64) -> f64 {
        leaky_derivate(self.alpha(), x)
    }
});

activation_variant!(
    /// Parametric rectifier. Same formulas as [`LeakyReLU`], kept as its own
    /// catalog entry.
    ParametricReLU,
    "ParametricReLU",
    "Like ReLU, but keeps back-propagation working even for negative input values. The \
     parametric ReLU is used when the leaky ReLU still fails to solve the dead neuron problem \
     and the relevant information is not passed on to the next layer."
);

impl_activation!(ParametricReLU {
    fn activate(&self, x: f64) -> f64 {
        leaky_activate(self.alpha(), x)
    }

    fn derivate(&self, x: f64) -> f64 {
        leaky_derivate(self.alpha(), x)
    }
});

#[inline]
fn leaky_activate(alpha: f64, x: f64) -> f64 {
    if x < x * 0.1 { alpha * x } else { x }
}

#[inline]
fn leaky_derivate(alpha: f64, x: f64) -> f64 {
    if x < x * 0.1 { -alpha } else { 1.0 }
}

activation_variant!(
    /// Exponential linear unit.
    ELU,
    "ELU",
    "ELU smooths out slowly until its output equals -alpha, whereas ReLU flattens sharply. It \
     avoids the dead ReLU problem by introducing a logarithmic curve for negative inputs, which \
     helps the network push weights and biases in the right direction."
);

impl_activation!(ELU {
    fn activate(&self, x: f64) -> f64 {
        if x < 0.0 { self.alpha() * (x.exp() - 1.0) } else { x }
    }

    fn derivate(&self, x: f64) -> f64 {
        if x < 0.0 {
            (self.alpha() * (x.exp() - 1.0)) + self.alpha()
        } else {
            1.0
        }
    }
});

activation_variant!(
    /// Smooth rectifier `ln(1 + e^(alpha*x))`.
    SoftPlus,
    "SoftPlus",
    "???"
);

impl_activation!(SoftPlus {
    fn activate(&self, x: f64) -> f64 {
        (1.0 + (self.alpha() * x).exp()).ln()
    }

    fn derivate(&self, x: f64) -> f64 {
        self.alpha() / (1.0 + (-x * self.alpha()).exp())
    }
});

activation_variant!(
    /// Self-gated `x * sigmoid(alpha*x)`.
    Swish,
    "Swish",
    "A self-gated activation function developed by researchers at Google. Swish consistently \
     matches or outperforms ReLU on deep networks applied to demanding domains such as image \
     classification and machine translation."
);

impl_activation!(Swish {
    fn activate(&self, x: f64) -> f64 {
        x / (1.0 + (self.alpha() * -x).exp())
    }

    fn derivate(&self, x: f64) -> f64 {
        let f = self.activate(x);
        self.alpha() * f / (1.0 + (self.alpha() * -x).exp()) * (1.0 - f)
    }
});

activation_variant!(
    /// Gaussian error linear unit, tanh approximation scaled by `alpha`.
    ///
    /// Has no closed-form derivative here: [`ActivationFunction::derivate`]
    /// is [`ActivationFunction::derivate_light`] with a step of
    /// [`GELU_DERIVATIVE_OFFSET`].
    GeLU,
    "GeLU",
    "The GELU nonlinearity outperforms ReLU and ELU activations and improves results across \
     computer vision, natural language processing and speech recognition tasks."
);

impl_activation!(GeLU {
    fn activate(&self, x: f64) -> f64 {
        let inner = (2.0 / PI).sqrt() * (x + 0.044715 * x.powf(3.0));
        0.5 * x * self.alpha() * (1.0 + inner.tanh())
    }

    fn derivate(&self, x: f64) -> f64 {
        self.derivate_light(x, GELU_DERIVATIVE_OFFSET)
    }
});

activation_variant!(
    /// Scaled exponential linear unit with the fixed [`SELU_LAMBDA`] and
    /// [`SELU_ALPHA`] constants.
    SeLU,
    "SeLU",
    "SELU is a relatively new activation function and needs further work on architectures such \
     as CNNs and RNNs, where it has been studied comparatively little."
);

impl_activation!(SeLU {
    fn activate(&self, x: f64) -> f64 {
        if x < 0.0 {
            SELU_LAMBDA * SELU_ALPHA * ((self.alpha() * x).exp() - 1.0)
        } else {
            SELU_LAMBDA * x * self.alpha()
        }
    }

    fn derivate(&self, x: f64) -> f64 {
        if x < 0.0 {
            SELU_LAMBDA * SELU_ALPHA * (self.alpha() * x).exp()
        } else {
            SELU_LAMBDA
        }
    }
});
