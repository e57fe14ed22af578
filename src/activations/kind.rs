#![allow(clippy::upper_case_acronyms)]

use std::fmt;
use std::str::FromStr;

use super::functions::{
    ELU, GeLU, LeakyReLU, ParametricReLU, ReLU, SeLU, Sigmoid, SoftPlus, Swish, Tanh,
};
use crate::error::ActivationError;

activation_catalog! {
    Sigmoid => Sigmoid::try_new,
    Tanh => Tanh::try_new,
    ReLU => ReLU::try_new,
    LeakyReLU => LeakyReLU::try_new,
    ParametricReLU => ParametricReLU::try_new,
    ELU => ELU::try_new,
    SoftPlus => SoftPlus::try_new,
    Swish => Swish::try_new,
    GeLU => GeLU::try_new,
    SeLU => SeLU::try_new,
}

impl fmt::Display for ActivationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivationKind {
    type Err = ActivationError;

    /// Case-insensitive lookup by variant name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivationKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ActivationError::UnknownActivation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_match_functions() {
        for kind in ActivationKind::ALL {
            let function = kind.construct(1.0).unwrap();
            assert_eq!(function.name(), kind.name());
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("gelu".parse::<ActivationKind>().unwrap(), ActivationKind::GeLU);
        assert_eq!(" ParametricReLU ".parse::<ActivationKind>().unwrap(), ActivationKind::ParametricReLU);
        assert_eq!(
            "Softmax".parse::<ActivationKind>().unwrap_err(),
            ActivationError::UnknownActivation("Softmax".to_string())
        );
    }

    #[test]
    fn test_construct_reports_failure() {
        let err = ActivationKind::Swish.construct(f64::NAN).unwrap_err();
        match err {
            ActivationError::ConstructionFailed { kind, reason } => {
                assert_eq!(kind, "Swish");
                assert!(reason.contains("alpha"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_kind_serializes_as_name() {
        assert_eq!(serde_json::to_string(&ActivationKind::SeLU).unwrap(), "\"SeLU\"");
    }
}
