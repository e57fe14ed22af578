use std::collections::HashSet;

use crate::activations::functions::TANH_DEFAULT_BETA;
use crate::activations::ActivationKind;
use crate::error::ActivationError;
use crate::registry::{list_activation_functions, ActivationRegistry, RegistryBuilder, DEFAULT_ALPHA};

#[test]
fn test_one_instance_per_variant() {
    let functions = list_activation_functions();
    assert_eq!(functions.len(), ActivationKind::ALL.len());
    assert_eq!(functions.len(), 10);

    let names: HashSet<&str> = functions.iter().map(|f| f.name()).collect();
    assert_eq!(names.len(), functions.len());
    for kind in ActivationKind::ALL {
        assert!(names.contains(kind.name()), "missing {}", kind);
    }
}

#[test]
fn test_default_parameters() {
    for function in list_activation_functions() {
        assert_eq!(function.alpha(), DEFAULT_ALPHA);
        if function.name() == "Tanh" {
            assert_eq!(function.beta(), TANH_DEFAULT_BETA);
            assert_eq!(function.beta(), 2.0 / 3.0);
        } else {
            assert_eq!(function.beta(), 0.0);
        }
    }
}

#[test]
fn test_names_and_descriptions_present() {
    let registry = ActivationRegistry::new();
    for function in registry.iter() {
        assert!(!function.name().is_empty());
        assert!(!function.description().is_empty());
    }
    assert_eq!(registry.get("SoftPlus").unwrap().description(), "???");
}

#[test]
fn test_lookup() {
    let registry = ActivationRegistry::new();
    let sigmoid = registry.get("Sigmoid").unwrap();
    assert_eq!(sigmoid.activate(0.0), 0.5);
    assert_eq!(registry.get_kind(ActivationKind::SeLU).unwrap().name(), "SeLU");
    assert!(registry.get("sigmoid").is_none());
    assert!(registry.get("Softmax").is_none());
}

#[test]
fn test_custom_alpha() {
    let registry = RegistryBuilder::new().default_alpha(0.25).build();
    assert_eq!(registry.len(), 10);
    assert!(registry.iter().all(|f| f.alpha() == 0.25));
    assert_eq!(registry.get("ReLU").unwrap().activate(-4.0), -1.0);
}

#[test]
fn test_exclude() {
    let registry = ActivationRegistry::builder()
        .exclude(ActivationKind::GeLU)
        .exclude(ActivationKind::GeLU)
        .build();
    assert_eq!(registry.len(), 9);
    assert!(registry.get("GeLU").is_none());
    assert!(registry.failures().is_empty());
}

#[test]
fn test_construction_failure_is_reported_not_fatal() {
    let registry = RegistryBuilder::new().default_alpha(f64::NAN).build();
    assert!(registry.is_empty());
    assert_eq!(registry.failures().len(), ActivationKind::ALL.len());

    let (kind, err) = &registry.failures()[0];
    assert_eq!(*kind, ActivationKind::ALL[0]);
    assert!(matches!(err, ActivationError::ConstructionFailed { .. }));
}

#[test]
fn test_build_strict() {
    assert!(RegistryBuilder::new().build_strict().is_ok());

    let err = RegistryBuilder::new().default_alpha(f64::INFINITY).build_strict().unwrap_err();
    assert!(err.to_string().starts_with("Failed to construct Sigmoid"));
}

#[test]
fn test_registry_iterates_by_reference() {
    let registry = ActivationRegistry::default();
    let mut count = 0;
    for function in &registry {
        assert!(function.activate(1.0).is_finite());
        count += 1;
    }
    assert_eq!(count, registry.functions().len());
}
