use std::fmt;

/// Result type for activation_zoo operations
pub type Result<T> = std::result::Result<T, ActivationError>;

/// Main error type for the activation_zoo library
#[derive(Debug, Clone, PartialEq)]
pub enum ActivationError {
    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// No activation function is registered under this name
    UnknownActivation(String),

    /// A variant could not be built from the registry's default parameters
    ConstructionFailed {
        kind: String,
        reason: String,
    },

    /// IO errors (file operations)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),
}

impl fmt::Display for ActivationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            ActivationError::UnknownActivation(name) => {
                write!(f, "Unknown activation function: {}", name)
            }
            ActivationError::ConstructionFailed { kind, reason } => {
                write!(f, "Failed to construct {}: {}", kind, reason)
            }
            ActivationError::IoError(msg) => write!(f, "IO error: {}", msg),
            ActivationError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ActivationError {}

// Conversion from std::io::Error
impl From<std::io::Error> for ActivationError {
    fn from(err: std::io::Error) -> Self {
        ActivationError::IoError(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ActivationError {
    fn from(err: serde_json::Error) -> Self {
        ActivationError::SerializationError(err.to_string())
    }
}

// Helper functions for common error patterns
impl ActivationError {
    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        ActivationError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn construction_failed<S: Into<String>>(kind: S, reason: S) -> Self {
        ActivationError::ConstructionFailed {
            kind: kind.into(),
            reason: reason.into(),
        }
    }
}
