//! Devices and the transports that feed them output.

mod error;
mod rest;
mod transport;

pub use error::TransportError;
pub use rest::RestTransport;
pub use transport::{StaticTransport, Transport};

use std::sync::Arc;

use tracing::info;

use crate::error::ParserError;
use crate::parser::{ParserRegistry, Platform};
use crate::tree::Tree;

/// A named device reachable through a transport.
///
/// `parse` is the whole pipeline: find the parser for the command, fetch
/// the raw output, extract, validate.
pub struct Device<T: Transport> {
    name: String,
    platform: Platform,
    transport: T,
    registry: Arc<ParserRegistry>,
}

impl<T: Transport> Device<T> {
    /// Creates a device using the bundled parsers.
    pub fn new(name: impl Into<String>, platform: Platform, transport: T) -> Self {
        Self::with_registry(name, platform, transport, Arc::new(ParserRegistry::new()))
    }

    /// Creates a device sharing an existing registry.
    pub fn with_registry(
        name: impl Into<String>,
        platform: Platform,
        transport: T,
        registry: Arc<ParserRegistry>,
    ) -> Self {
        Self {
            name: name.into(),
            platform,
            transport,
            registry,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Run `command` on the device and parse its output.
    pub fn parse(&self, command: &str) -> Result<Tree, ParserError> {
        let (parser, args) = self
            .registry
            .lookup(self.platform, command)
            .ok_or_else(|| ParserError::NoParser {
                platform: self.platform,
                command: command.to_string(),
            })?;

        info!(device = %self.name, command, "executing");
        let output = self.transport.execute(command)?;
        parser.parse(&output, &args)
    }

    /// Parse output captured earlier instead of executing the command.
    pub fn parse_output(&self, command: &str, output: &str) -> Result<Tree, ParserError> {
        self.registry.parse(self.platform, command, output)
    }
}
