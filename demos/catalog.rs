//! Prints the activation catalog and an ASCII plot of every function.
//!
//! Run with `cargo run --example catalog [name]`.

use activation_zoo::registry::ActivationRegistry;
use activation_zoo::sampling::{sample_function, SamplingConfig};
use activation_zoo::visualization::{catalog_summary, plot_pair};
use activation_zoo::{ActivationKind, Result};

fn main() -> Result<()> {
    let registry = ActivationRegistry::new();
    println!("{}", catalog_summary(&registry));

    let only: Option<ActivationKind> = std::env::args().nth(1).map(|name| name.parse::<ActivationKind>()).transpose()?;
    let config = SamplingConfig::default().raw();

    for function in registry.iter() {
        if only.is_some_and(|kind| kind.name() != function.name()) {
            continue;
        }
        println!("{}", function.description());
        println!("{}", plot_pair(&sample_function(function, &config), 72, 20));
    }

    Ok(())
}
