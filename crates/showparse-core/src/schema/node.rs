//! Declarative shape descriptors.

use std::fmt;

/// Scalar types a leaf value may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Str,
    Int,
    Bool,
    /// Accepts integers as well as floats.
    Float,
}

impl ScalarType {
    pub fn name(&self) -> &'static str {
        match self {
            ScalarType::Str => "str",
            ScalarType::Int => "int",
            ScalarType::Bool => "bool",
            ScalarType::Float => "float",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Recursive description of the shape a tree node must have.
///
/// Used only for validation, never to build trees.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Leaf of a given scalar type.
    Scalar(ScalarType),
    /// Ordered list whose every element matches the inner node.
    List(Box<SchemaNode>),
    /// Map with named required/optional keys.
    Map(MapSchema),
    /// Map with arbitrary keys whose every value matches the inner node.
    Wildcard(Box<SchemaNode>),
    /// Anything goes.
    Any,
}

impl SchemaNode {
    pub fn str() -> Self {
        SchemaNode::Scalar(ScalarType::Str)
    }

    pub fn int() -> Self {
        SchemaNode::Scalar(ScalarType::Int)
    }

    pub fn boolean() -> Self {
        SchemaNode::Scalar(ScalarType::Bool)
    }

    pub fn float() -> Self {
        SchemaNode::Scalar(ScalarType::Float)
    }

    pub fn list(item: impl Into<SchemaNode>) -> Self {
        SchemaNode::List(Box::new(item.into()))
    }

    pub fn wildcard(value: impl Into<SchemaNode>) -> Self {
        SchemaNode::Wildcard(Box::new(value.into()))
    }

    pub fn any() -> Self {
        SchemaNode::Any
    }

    /// Start a map schema; add keys with [`MapSchema::required`] and
    /// [`MapSchema::optional`].
    pub fn map() -> MapSchema {
        MapSchema::default()
    }

    /// Short description used in type mismatch errors.
    pub fn expected(&self) -> &'static str {
        match self {
            SchemaNode::Scalar(t) => t.name(),
            SchemaNode::List(_) => "list",
            SchemaNode::Map(_) | SchemaNode::Wildcard(_) => "map",
            SchemaNode::Any => "any",
        }
    }
}

/// One named key of a [`MapSchema`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub name: String,
    pub required: bool,
    pub node: SchemaNode,
}

/// Map with a fixed set of named keys, and optionally a node that all other
/// keys must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapSchema {
    fields: Vec<FieldSchema>,
    rest: Option<Box<SchemaNode>>,
}

impl MapSchema {
    pub fn required(mut self, name: impl Into<String>, node: impl Into<SchemaNode>) -> Self {
        self.fields.push(FieldSchema {
            name: name.into(),
            required: true,
            node: node.into(),
        });
        self
    }

    pub fn optional(mut self, name: impl Into<String>, node: impl Into<SchemaNode>) -> Self {
        self.fields.push(FieldSchema {
            name: name.into(),
            required: false,
            node: node.into(),
        });
        self
    }

    /// Accept keys not named above, provided their values match `node`.
    pub fn rest(mut self, node: impl Into<SchemaNode>) -> Self {
        self.rest = Some(Box::new(node.into()));
        self
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn rest_node(&self) -> Option<&SchemaNode> {
        self.rest.as_deref()
    }
}

impl From<MapSchema> for SchemaNode {
    fn from(map: MapSchema) -> Self {
        SchemaNode::Map(map)
    }
}
