//! Command parser infrastructure.
//!
//! Provides a `CommandParser` trait tying a command's rule table to its
//! schema, and a `ParserRegistry` that finds the parser for a concrete
//! command string on a given platform.
//!
//! ## Components
//!
//! - `CommandParser` trait - Common interface for all command parsers
//! - `ParserRegistry` - Maps platform + command templates to parsers
//! - `CommandTemplate` - `{placeholder}` templates, rendering and matching
//! - `Platform` - Supported device operating systems

mod command;
mod platform;
mod registry;
mod traits;

pub use command::{CommandArgs, CommandTemplate};
pub use platform::Platform;
pub use registry::ParserRegistry;
pub use traits::{CommandParser, OutputSource};
