//! # Activation Registry
//!
//! Builds one instance of every variant in the [`ActivationKind`] catalog.
//! The registry never names variant types itself; it walks
//! [`ActivationKind::ALL`], so a variant added to the catalog shows up here
//! without further changes.
//!
//! ```rust
//! use activation_zoo::registry::list_activation_functions;
//!
//! for function in list_activation_functions() {
//!     println!("{}: f(1) = {}", function.name(), function.activate(1.0));
//! }
//! ```

use tracing::{debug, warn};

use crate::activations::{ActivationFunction, ActivationKind};
use crate::error::{ActivationError, Result};

/// `alpha` every registry entry is built with unless configured otherwise.
pub const DEFAULT_ALPHA: f64 = 1.0;

/// One instance per catalog variant, built once and then only read.
#[derive(Debug)]
pub struct ActivationRegistry {
    functions: Vec<Box<dyn ActivationFunction>>,
    failures: Vec<(ActivationKind, ActivationError)>,
}

impl ActivationRegistry {
    /// Build every catalog variant with `alpha = 1`.
    pub fn new() -> Self {
        RegistryBuilder::new().build()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn functions(&self) -> &[Box<dyn ActivationFunction>] {
        &self.functions
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn ActivationFunction> {
        self.functions.iter().map(|function| &**function as &dyn ActivationFunction)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Look up an entry by its exact name.
    pub fn get(&self, name: &str) -> Option<&dyn ActivationFunction> {
        self.iter().find(|function| function.name() == name)
    }

    pub fn get_kind(&self, kind: ActivationKind) -> Option<&dyn ActivationFunction> {
        self.get(kind.name())
    }

    /// Variants that could not be built, with the reason.
    pub fn failures(&self) -> &[(ActivationKind, ActivationError)] {
        &self.failures
    }

    pub fn into_functions(self) -> Vec<Box<dyn ActivationFunction>> {
        self.functions
    }
}

impl Default for ActivationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ActivationRegistry {
    type Item = &'a Box<dyn ActivationFunction>;
    type IntoIter = std::slice::Iter<'a, Box<dyn ActivationFunction>>;

    fn into_iter(self) -> Self::IntoIter {
        self.functions.iter()
    }
}

/// Builder for ActivationRegistry
pub struct RegistryBuilder {
    default_alpha: f64,
    excluded: Vec<ActivationKind>,
}

impl RegistryBuilder {
    /// Create a new registry builder
    pub fn new() -> Self {
        RegistryBuilder {
            default_alpha: DEFAULT_ALPHA,
            excluded: Vec::new(),
        }
    }

    /// Set the alpha every entry is constructed with
    pub fn default_alpha(mut self, alpha: f64) -> Self {
        self.default_alpha = alpha;
        self
    }

    /// Leave a variant out of the registry
    pub fn exclude(mut self, kind: ActivationKind) -> Self {
        if !self.excluded.contains(&kind) {
            self.excluded.push(kind);
        }
        self
    }

    /// Build the registry in a single pass over the catalog.
    ///
    /// A variant that fails to construct is logged, recorded in
    /// [`ActivationRegistry::failures`] and skipped; the remaining variants
    /// are still built.
    pub fn build(self) -> ActivationRegistry {
        let mut functions = Vec::with_capacity(ActivationKind::ALL.len());
        let mut failures = Vec::new();

        for &kind in ActivationKind::ALL {
            if self.excluded.contains(&kind) {
                debug!(kind = kind.name(), "activation excluded from registry");
                continue;
            }

            match kind.construct(self.default_alpha) {
                Ok(function) => functions.push(function),
                Err(err) => {
                    warn!(kind = kind.name(), error = %err, "skipping activation");
                    failures.push((kind, err));
                }
            }
        }

        debug!(
            built = functions.len(),
            failed = failures.len(),
            alpha = self.default_alpha,
            "activation registry ready"
        );

        ActivationRegistry { functions, failures }
    }

    /// Build the registry, failing on the first variant that cannot be constructed.
    pub fn build_strict(self) -> Result<ActivationRegistry> {
        let registry = self.build();
        match registry.failures.first() {
            Some((_, err)) => Err(err.clone()),
            None => Ok(registry),
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of every known activation function, each built with `alpha = 1`.
pub fn list_activation_functions() -> Vec<Box<dyn ActivationFunction>> {
    ActivationRegistry::new().into_functions()
}
