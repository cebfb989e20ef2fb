use std::collections::HashMap;

use super::error::TransportError;

/// Source of raw command output.
///
/// The only contract between a device connection and the parsers: given a
/// fully formatted command, return its raw text (or a JSON body for REST
/// resources).
pub trait Transport {
    fn execute(&self, command: &str) -> Result<String, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, command: &str) -> Result<String, TransportError> {
        (**self).execute(command)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, command: &str) -> Result<String, TransportError> {
        (**self).execute(command)
    }
}

/// Transport replaying canned output keyed by command.
///
/// Used to parse captured output and in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticTransport {
    outputs: HashMap<String, String>,
}

impl StaticTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with_output(mut self, command: impl Into<String>, output: impl Into<String>) -> Self {
        self.insert(command, output);
        self
    }

    pub fn insert(&mut self, command: impl Into<String>, output: impl Into<String>) {
        self.outputs.insert(normalize(&command.into()), output.into());
    }
}

impl Transport for StaticTransport {
    fn execute(&self, command: &str) -> Result<String, TransportError> {
        self.outputs
            .get(&normalize(command))
            .cloned()
            .ok_or_else(|| TransportError::NoOutput(command.to_string()))
    }
}

fn normalize(command: &str) -> String {
    command.split_whitespace().collect::<Vec<_>>().join(" ")
}
