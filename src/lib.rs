//! # activation_zoo - Scalar Activation Functions for Neural Network Design
//!
//! activation_zoo is a small catalog of scalar activation functions. Every
//! function exposes a forward evaluation, a derivative and identifying
//! metadata, and the whole catalog can be enumerated without naming the
//! individual types.
//!
//! ## Key Features
//!
//! - **Ten Variants**: Sigmoid, Tanh, ReLU, LeakyReLU, ParametricReLU, ELU, SoftPlus, Swish, GeLU, SeLU
//! - **Shape Parameters**: `alpha` (and `beta` for Tanh), fixed at construction
//! - **Approximate Derivative**: shared fallback for variants without a closed form
//! - **Registry**: one instance of every variant, discovered from a single catalog
//! - **Sampling & Plots**: sample curves over a window, render ASCII plots, export CSV/JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use activation_zoo::registry::list_activation_functions;
//! use activation_zoo::sampling::{sample_function, SamplingConfig};
//!
//! let config = SamplingConfig::default();
//! for function in list_activation_functions() {
//!     let pair = sample_function(&*function, &config);
//!     assert_eq!(pair.activation.len(), 40);
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - The activation function contract and its variants
//! - [`error`] - Error types and result handling
//! - [`registry`] - Enumeration of every known variant
//! - [`sampling`] - Sampled series over a fixed window
//! - [`visualization`] - Text plots and CSV/JSON export

#[macro_use]
mod macros;

pub mod activations;
pub mod error;
pub mod registry;
pub mod sampling;
pub mod visualization;

pub use activations::{ActivationFunction, ActivationKind, ActivationParams};
pub use error::{ActivationError, Result};
pub use registry::{list_activation_functions, ActivationRegistry, RegistryBuilder};

#[cfg(test)]
mod tests;
