use crate::activations::{ReLU, Sigmoid};
use crate::registry::{ActivationRegistry, RegistryBuilder};
use crate::sampling::{sample_function, SampledSeries, SamplingConfig, SeriesKind};
use crate::visualization::{catalog_summary, plot_pair, plot_series};

#[test]
fn test_plot_series() {
    let pair = sample_function(&Sigmoid::new(1.0), &SamplingConfig::default().raw());
    let plot = plot_series(&pair.activation, 50, 12);

    let lines: Vec<&str> = plot.lines().collect();
    assert_eq!(lines[0], "Activation Sigmoid");
    assert!(lines[1].starts_with("Max: "));
    // Title, max, 12 plot rows, min, footer.
    assert_eq!(lines.len(), 16);
    assert!(lines[13].starts_with('+'));
    assert!(plot.contains('*'));
    assert!(plot.ends_with("Points: 40\n"));
}

#[test]
fn test_plot_pair_marks_both_curves() {
    let pair = sample_function(&Sigmoid::new(1.0), &SamplingConfig::default().raw());
    let plot = plot_pair(&pair, 60, 15);
    assert!(plot.starts_with("Sigmoid (* activation, . derivative)"));
    assert!(plot.contains('*'));
    assert!(plot.contains('.'));
    assert!(plot.contains("Points: 80"));
}

#[test]
fn test_plot_invalid_dimensions() {
    let pair = sample_function(&Sigmoid::new(1.0), &SamplingConfig::default());
    assert_eq!(plot_series(&pair.activation, 5, 12), "Activation Sigmoid: Invalid data or dimensions");

    let empty = SampledSeries {
        name: "Empty".to_string(),
        kind: SeriesKind::Derivative,
        points: Vec::new(),
    };
    assert_eq!(plot_series(&empty, 40, 10), "Derivative Empty: Invalid data or dimensions");
}

#[test]
fn test_plot_constant_series() {
    // With alpha = -1 both branches of the ReLU derivative are 1.
    let pair = sample_function(&ReLU::new(-1.0), &SamplingConfig::default());
    assert_eq!(plot_series(&pair.derivative, 40, 10), "Derivative ReLU: All values are 1.0000");
}

#[test]
fn test_catalog_summary() {
    let summary = catalog_summary(&ActivationRegistry::new());
    assert!(summary.starts_with("Activation Catalog\n"));
    for name in ["Sigmoid", "Tanh", "ParametricReLU", "SeLU"] {
        assert!(summary.contains(name), "missing {}", name);
    }

    let broken = catalog_summary(&RegistryBuilder::new().default_alpha(f64::NAN).build());
    assert!(broken.contains("GeLU             unavailable: "));
}
