pub mod config;
pub mod device;
pub mod error;
pub mod extract;
pub mod parser;
pub mod parsers;
pub mod schema;
pub mod tree;

pub use config::{Config, ConfigError, OutputFormat};
pub use device::{Device, RestTransport, StaticTransport, Transport, TransportError};
pub use error::ParserError;
pub use extract::{Fields, LineExtractor, NodePath, PatternRule, TreeBuilder};
pub use parser::{
    CommandArgs, CommandParser, CommandTemplate, OutputSource, ParserRegistry, Platform,
};
pub use schema::{MapSchema, Schema, SchemaError, SchemaNode};
pub use tree::{to_json, Key, Tree, Value};
