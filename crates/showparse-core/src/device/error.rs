use thiserror::Error;

/// Errors raised by a transport while fetching command output.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{command} returned status {status}: {message}")]
    Status {
        command: String,
        status: u16,
        message: String,
    },

    #[error("No output available for '{0}'")]
    NoOutput(String),

    #[error("Missing configuration: {0}")]
    MissingConfig(String),
}
