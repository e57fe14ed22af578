use serde::{Deserialize, Serialize};

use crate::error::{ActivationError, Result};

/// Shape parameters of an activation function.
///
/// `alpha` is the primary parameter every variant reads. `beta` is only
/// meaningful for [`Tanh`](super::functions::Tanh) and is `0.0` when unset.
/// Both are fixed once the owning function is constructed: there are no
/// setters, only accessors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivationParams {
    alpha: f64,
    #[serde(default)]
    beta: f64,
}

impl ActivationParams {
    /// Parameters with the given `alpha` and an unset `beta`.
    pub fn new(alpha: f64) -> Self {
        ActivationParams { alpha, beta: 0.0 }
    }

    pub fn with_beta(alpha: f64, beta: f64) -> Self {
        ActivationParams { alpha, beta }
    }

    /// Like [`ActivationParams::new`], but rejects a non-finite `alpha`.
    pub fn try_new(alpha: f64) -> Result<Self> {
        check_finite("alpha", alpha)?;
        Ok(Self::new(alpha))
    }

    /// Like [`ActivationParams::with_beta`], but rejects non-finite values.
    pub fn try_with_beta(alpha: f64, beta: f64) -> Result<Self> {
        check_finite("alpha", alpha)?;
        check_finite("beta", beta)?;
        Ok(Self::with_beta(alpha, beta))
    }

    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

fn check_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ActivationError::invalid_parameter(
            name.to_string(),
            format!("must be finite, got {}", value),
        ))
    }
}
