/// A macro to declare the catalog of activation function variants.
///
/// Each line names a variant type and a fallible single-`alpha`
/// constructor for it. The macro generates the `ActivationKind` enum with
/// one entry per line, the `ActivationKind::ALL` list the registry walks,
/// and `ActivationKind::construct` which builds a boxed trait object.
///
/// ```ignore
/// activation_catalog! {
///     Sigmoid => Sigmoid::try_new,
///     Tanh => Tanh::try_new,
/// }
/// ```
///
/// Registering a new variant is one more line here; the registry itself
/// never lists types. A type without a compatible constructor does not
/// compile into the catalog.
macro_rules! activation_catalog {
    ($( $(#[$meta:meta])* $variant:ident => $ctor:path ),+ $(,)?) => {
        /// Every activation function variant known to the crate.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum ActivationKind {
            $( $(#[$meta])* $variant ),+
        }

        impl ActivationKind {
            /// All variants, in declaration order.
            pub const ALL: &'static [ActivationKind] = &[ $( ActivationKind::$variant ),+ ];

            /// Name shared with the variant's `ActivationFunction::name`.
            pub fn name(&self) -> &'static str {
                match self {
                    $( ActivationKind::$variant => stringify!($variant) ),+
                }
            }

            /// Build this variant with the given `alpha` and default secondary parameters.
            pub fn construct(
                &self,
                alpha: f64,
            ) -> $crate::error::Result<Box<dyn $crate::activations::ActivationFunction>> {
                match self {
                    $(
                        ActivationKind::$variant => {
                            let function = $ctor(alpha).map_err(|err| {
                                $crate::error::ActivationError::construction_failed(
                                    stringify!($variant).to_string(),
                                    err.to_string(),
                                )
                            })?;
                            Ok(Box::new(function))
                        }
                    ),+
                }
            }
        }
    };
}
