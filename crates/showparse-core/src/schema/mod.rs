//! Post-hoc validation of extracted trees.
//!
//! Each command declares its [`Schema`] once. After extraction the tree is
//! checked in a single deterministic pre-order walk:
//!
//! 1. an empty root fails with [`SchemaError::Empty`];
//! 2. in every map, required keys are checked in declaration order;
//! 3. then present entries are checked in insertion order, recursing into each.
//!
//! The first violation is returned. Validation never mutates the tree.

mod error;
mod node;

pub use error::SchemaError;
pub use node::{FieldSchema, MapSchema, ScalarType, SchemaNode};

use std::fmt::Write;

use crate::tree::{Key, Tree, Value};

/// Validation schema for one command's output.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    root: SchemaNode,
}

impl Schema {
    pub fn new(root: impl Into<SchemaNode>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &SchemaNode {
        &self.root
    }

    /// Check `tree` against the schema.
    pub fn validate(&self, tree: &Tree) -> Result<(), SchemaError> {
        if tree.is_empty() {
            return Err(SchemaError::Empty);
        }
        let mut path = Vec::new();
        check_map_node(&self.root, tree, &mut path)
    }
}

/// Path segment used while walking the tree.
#[derive(Debug, Clone)]
enum Segment {
    Key(Key),
    Index(usize),
}

fn render(path: &[Segment]) -> String {
    let mut out = String::new();
    for segment in path {
        match segment {
            Segment::Key(key) if out.is_empty() => {
                let _ = write!(out, "{}", key);
            }
            Segment::Key(key) => {
                let _ = write!(out, ".{}", key);
            }
            Segment::Index(index) => {
                let _ = write!(out, "[{}]", index);
            }
        }
    }
    out
}

fn mismatch(node: &SchemaNode, value: &Value, path: &[Segment]) -> SchemaError {
    SchemaError::TypeMismatch {
        path: render(path),
        expected: node.expected(),
        found: value.type_name(),
    }
}

fn check(node: &SchemaNode, value: &Value, path: &mut Vec<Segment>) -> Result<(), SchemaError> {
    match (node, value) {
        (SchemaNode::Any, _) => Ok(()),
        (SchemaNode::Scalar(ScalarType::Str), Value::Str(_))
        | (SchemaNode::Scalar(ScalarType::Int), Value::Int(_))
        | (SchemaNode::Scalar(ScalarType::Bool), Value::Bool(_))
        | (SchemaNode::Scalar(ScalarType::Float), Value::Float(_) | Value::Int(_)) => Ok(()),
        (SchemaNode::List(item), Value::List(items)) => {
            for (index, element) in items.iter().enumerate() {
                path.push(Segment::Index(index));
                check(item, element, path)?;
                path.pop();
            }
            Ok(())
        }
        (SchemaNode::Map(_) | SchemaNode::Wildcard(_), Value::Map(map)) => {
            check_map_node(node, map, path)
        }
        _ => Err(mismatch(node, value, path)),
    }
}

fn check_map_node(node: &SchemaNode, map: &Tree, path: &mut Vec<Segment>) -> Result<(), SchemaError> {
    match node {
        SchemaNode::Map(schema) => check_map(schema, map, path),
        SchemaNode::Wildcard(inner) => check_entries(map, path, |_| Some(inner.as_ref())),
        SchemaNode::Any => Ok(()),
        _ => Err(SchemaError::TypeMismatch {
            path: render(path),
            expected: node.expected(),
            found: "map",
        }),
    }
}

fn check_map(schema: &MapSchema, map: &Tree, path: &mut Vec<Segment>) -> Result<(), SchemaError> {
    for field in schema.fields().iter().filter(|f| f.required) {
        let key = Key::from(field.name.as_str());
        if !map.contains_key(&key) {
            path.push(Segment::Key(key));
            let err = SchemaError::MissingKey { path: render(path) };
            path.pop();
            return Err(err);
        }
    }

    check_entries(map, path, |key| {
        key.as_str()
            .and_then(|name| schema.field(name))
            .map(|f| &f.node)
            .or_else(|| schema.rest_node())
    })
}

fn check_entries<'s>(
    map: &Tree,
    path: &mut Vec<Segment>,
    node_for: impl Fn(&Key) -> Option<&'s SchemaNode>,
) -> Result<(), SchemaError> {
    for (key, value) in map {
        path.push(Segment::Key(key.clone()));
        match node_for(key) {
            Some(node) => check(node, value, path)?,
            None => return Err(SchemaError::UnsupportedKey { path: render(path) }),
        }
        path.pop();
    }
    Ok(())
}
