//! Result tree produced by the line extractor.
//!
//! A parse call builds one [`Tree`]: a nested mapping from [`Key`]s to
//! [`Value`]s. Maps are `IndexMap`s and keep entries in the order the
//! matching lines appeared, so peers, routes and neighbors render in input
//! order and sequential next-hop indices stay 1, 2, 3.
//!
//! Trees serialize untagged through serde, which makes them render directly
//! as JSON or YAML. Integer keys become string keys in JSON.

mod key;
mod value;

pub use key::Key;
pub use value::Value;

use indexmap::IndexMap;

/// Nested mapping produced by a parser.
pub type Tree = IndexMap<Key, Value>;

/// Convert a tree into a `serde_json::Value`.
pub fn to_json(tree: &Tree) -> serde_json::Value {
    serde_json::to_value(tree).unwrap_or(serde_json::Value::Null)
}
