#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;
    use activation_zoo::activations::{ActivationFunction, ELU, LeakyReLU, ParametricReLU, Sigmoid};
    use activation_zoo::registry::ActivationRegistry;

    // Finite inputs inside the range where no formula overflows
    fn input_strategy() -> impl Strategy<Value = f64> {
        -50.0f64..50.0
    }

    fn alpha_strategy() -> impl Strategy<Value = f64> {
        (-5.0f64..5.0).prop_filter("finite", |a| a.is_finite())
    }

    proptest! {
        #[test]
        fn test_evaluation_is_deterministic(x in input_strategy(), alpha in alpha_strategy()) {
            let registry = ActivationRegistry::builder().default_alpha(alpha).build();
            for function in registry.iter() {
                prop_assert_eq!(function.activate(x).to_bits(), function.activate(x).to_bits());
                prop_assert_eq!(function.derivate(x).to_bits(), function.derivate(x).to_bits());
            }
        }

        #[test]
        fn test_leaky_and_parametric_relu_agree(x in any::<f64>(), alpha in any::<f64>()) {
            let leaky = LeakyReLU::new(alpha);
            let parametric = ParametricReLU::new(alpha);
            prop_assert_eq!(leaky.activate(x).to_bits(), parametric.activate(x).to_bits());
            prop_assert_eq!(leaky.derivate(x).to_bits(), parametric.derivate(x).to_bits());
        }

        #[test]
        fn test_elu_identity_on_non_negative(x in 0.0f64..1e6, alpha in alpha_strategy()) {
            let elu = ELU::new(alpha);
            prop_assert_eq!(elu.activate(x), x);
            prop_assert_eq!(elu.derivate(x), 1.0);
        }

        #[test]
        fn test_sigmoid_bounded_outputs(x in -100.0f64..100.0) {
            let value = Sigmoid::new(1.0).activate(x);
            prop_assert!((0.0..=1.0).contains(&value), "Sigmoid output out of bounds: {}", value);
        }

        #[test]
        fn test_finite_inputs_do_not_panic(x in -700.0f64..700.0) {
            let registry = ActivationRegistry::new();
            for function in registry.iter() {
                let _ = function.activate(x);
                let _ = function.derivate(x);
                let _ = function.derivate_light_default(x);
            }
        }
    }
}

#[test]
fn test_concurrent_read_only_evaluation() {
    use activation_zoo::registry::ActivationRegistry;

    let registry = ActivationRegistry::new();
    let xs: Vec<f64> = (-40..40).map(|i| i as f64 * 0.25).collect();
    let expected: Vec<Vec<(u64, u64)>> = registry
        .iter()
        .map(|f| xs.iter().map(|&x| (f.activate(x).to_bits(), f.derivate(x).to_bits())).collect())
        .collect();

    let threads = num_cpus::get().max(2);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                scope.spawn(|| {
                    registry
                        .iter()
                        .map(|f| xs.iter().map(|&x| (f.activate(x).to_bits(), f.derivate(x).to_bits())).collect())
                        .collect::<Vec<Vec<(u64, u64)>>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
