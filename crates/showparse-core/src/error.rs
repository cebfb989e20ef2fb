//! Caller-facing error type.

use thiserror::Error;

use crate::device::TransportError;
use crate::parser::Platform;
use crate::schema::SchemaError;

/// Errors returned when parsing a command's output.
#[derive(Debug, Error)]
pub enum ParserError {
    /// The extracted tree did not satisfy the command's schema.
    #[error("{command}: {source}")]
    Schema {
        command: String,
        #[source]
        source: SchemaError,
    },

    /// No registered parser handles the command on this platform.
    #[error("No parser for '{command}' on {platform}")]
    NoParser { platform: Platform, command: String },

    /// A command template needs an argument the caller did not supply.
    #[error("Missing argument '{argument}' for command '{template}'")]
    MissingArgument { template: String, argument: String },

    /// The transport could not produce output for the command.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ParserError {
    /// True when the command produced no data (or nothing in it matched).
    pub fn is_empty(&self) -> bool {
        matches!(
            self,
            ParserError::Schema {
                source: SchemaError::Empty,
                ..
            }
        )
    }

    /// The underlying schema error, if this is a validation failure.
    pub fn schema_error(&self) -> Option<&SchemaError> {
        match self {
            ParserError::Schema { source, .. } => Some(source),
            _ => None,
        }
    }
}
