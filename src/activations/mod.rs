//! # Activation Functions Module
//!
//! This module provides the scalar activation functions of the catalog. Every
//! variant implements [`ActivationFunction`]: a name, a description, a forward
//! evaluation (`activate`) and a derivative (`derivate`).
//!
//! ## Available Activations
//!
//! - **Sigmoid**: `1 / (1 + e^(-alpha*x))`
//! - **Tanh**: Hyperbolic tangent of `alpha*x`
//! - **ReLU**: `x` for `x >= 0`, `alpha*x` otherwise
//! - **LeakyReLU** / **ParametricReLU**: ReLU branching on `x < x*0.1`
//! - **ELU** (Exponential Linear Unit): `alpha*(e^x - 1)` on the negative side
//! - **SoftPlus**: `ln(1 + e^(alpha*x))`
//! - **Swish**: `x / (1 + e^(-alpha*x))`
//! - **GeLU** (Gaussian Error Linear Unit): tanh approximation, approximate derivative
//! - **SeLU** (Scaled ELU): fixed `1.0507` / `1.6733` constants
//!
//! ## Usage Example
//!
//! ```rust
//! use activation_zoo::activations::{ActivationFunction, Sigmoid};
//!
//! let sigmoid = Sigmoid::new(1.0);
//! assert_eq!(sigmoid.activate(0.0), 0.5);
//! assert_eq!(sigmoid.derivate(0.0), 0.25);
//! ```
//!
//! ## Approximate Derivatives
//!
//! [`ActivationFunction::derivate_light`] is available on every variant. It
//! adds the two samples around `x*alpha` instead of subtracting them, so it
//! does not estimate a slope in the calculus sense. GeLU uses it with a step
//! of `1`.

pub mod contract;
pub mod functions;
pub mod kind;
pub mod params;

pub use contract::{ActivationFunction, DEFAULT_DERIVATIVE_OFFSET};
pub use functions::{
    ELU, GeLU, LeakyReLU, ParametricReLU, ReLU, SeLU, Sigmoid, SoftPlus, Swish, Tanh,
};
pub use kind::ActivationKind;
pub use params::ActivationParams;
