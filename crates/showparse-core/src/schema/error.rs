use thiserror::Error;

/// Reasons a result tree fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Nothing was extracted: either the output was empty or no line
    /// matched any pattern.
    #[error("Parser output is empty")]
    Empty,

    #[error("Missing required key: {path}")]
    MissingKey { path: String },

    #[error("Type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Key not allowed by schema: {path}")]
    UnsupportedKey { path: String },
}

impl SchemaError {
    /// Dotted path of the offending key, if the error has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            SchemaError::Empty => None,
            SchemaError::MissingKey { path }
            | SchemaError::TypeMismatch { path, .. }
            | SchemaError::UnsupportedKey { path } => Some(path),
        }
    }
}
