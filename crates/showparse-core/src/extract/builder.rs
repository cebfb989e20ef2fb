//! Explicit builder for the result tree.

use tracing::warn;

use super::path::{NodePath, Step};
use crate::tree::{Key, Tree, Value};

/// Owns the result tree while lines are consumed.
///
/// Handlers never hold references into the tree; they hold [`NodePath`]
/// handles returned by the builder and pass them back in. All operations
/// only add or update keys.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    root: Tree,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set-default a chain of maps below `at` and return the deepest one.
    ///
    /// Existing maps along the chain are reused, so calling this twice with
    /// the same keys returns the same node.
    pub fn descend<K, I>(&mut self, at: &NodePath, keys: I) -> NodePath
    where
        K: Into<Key>,
        I: IntoIterator<Item = K>,
    {
        let mut path = at.clone();
        let Some(mut node) = resolve_mut(&mut self.root, at.steps()) else {
            warn!(path = %at, "cursor does not resolve, skipping descend");
            return path;
        };

        for key in keys {
            let key = key.into();
            debug_assert_single_rendering(node, &key);
            let entry = node
                .entry(key.clone())
                .or_insert_with(|| Value::Map(Tree::new()));
            path = path.child(key);
            match entry {
                Value::Map(child) => node = child,
                other => {
                    warn!(path = %path, found = other.type_name(), "expected a map");
                    return path;
                }
            }
        }

        path
    }

    /// Insert or overwrite one field of the node at `at`.
    pub fn set(&mut self, at: &NodePath, key: impl Into<Key>, value: impl Into<Value>) {
        match resolve_mut(&mut self.root, at.steps()) {
            Some(node) => {
                let key = key.into();
                debug_assert_single_rendering(node, &key);
                node.insert(key, value.into());
            }
            None => warn!(path = %at, "cursor does not resolve, dropping field"),
        }
    }

    /// Merge captured fields into the node at `at`.
    pub fn merge(&mut self, at: &NodePath, fields: Tree) {
        match resolve_mut(&mut self.root, at.steps()) {
            Some(node) => {
                for key in fields.keys() {
                    debug_assert_single_rendering(node, key);
                }
                node.extend(fields);
            }
            None => warn!(path = %at, "cursor does not resolve, dropping fields"),
        }
    }

    /// Append `entry` to the ordered list stored under `list_key` and
    /// return a handle to the new element.
    pub fn push(&mut self, at: &NodePath, list_key: impl Into<Key>, entry: Tree) -> NodePath {
        let list_key = list_key.into();
        let Some(node) = resolve_mut(&mut self.root, at.steps()) else {
            warn!(path = %at, "cursor does not resolve, dropping list entry");
            return at.clone();
        };

        let slot = node
            .entry(list_key.clone())
            .or_insert_with(|| Value::List(Vec::new()));
        match slot {
            Value::List(items) => {
                items.push(Value::Map(entry));
                at.element(list_key, items.len() - 1)
            }
            other => {
                warn!(path = %at, key = %list_key, found = other.type_name(), "expected a list");
                at.clone()
            }
        }
    }

    /// Insert `entry` under the next sequential integer key of the node at
    /// `at` (1 for the first entry) and return a handle to it.
    ///
    /// Existing entries are never overwritten.
    pub fn push_indexed(&mut self, at: &NodePath, entry: Tree) -> NodePath {
        let Some(node) = resolve_mut(&mut self.root, at.steps()) else {
            warn!(path = %at, "cursor does not resolve, dropping indexed entry");
            return at.clone();
        };

        let index = next_index(node);
        debug_assert_single_rendering(node, &Key::Int(index));
        node.insert(Key::Int(index), Value::Map(entry));
        at.child(Key::Int(index))
    }

    /// Look up the node a handle names.
    pub fn get(&self, at: &NodePath) -> Option<&Tree> {
        resolve(&self.root, at.steps())
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Hand over the finished tree.
    pub fn finish(self) -> Tree {
        self.root
    }
}

/// An int key and its string twin would collide once rendered.
fn debug_assert_single_rendering(node: &Tree, key: &Key) {
    debug_assert!(
        key.rendering_twin().map_or(true, |twin| !node.contains_key(&twin)),
        "key {} already present with the other key type",
        key
    );
}

fn next_index(node: &Tree) -> i64 {
    node.keys()
        .filter_map(Key::as_int)
        .max()
        .map_or(1, |max| max + 1)
}

fn resolve<'a>(root: &'a Tree, steps: &[Step]) -> Option<&'a Tree> {
    let mut node = root;
    let mut steps = steps.iter();
    while let Some(step) = steps.next() {
        let Step::Key(key) = step else {
            return None;
        };
        node = match node.get(key)? {
            Value::Map(child) => child,
            Value::List(items) => match steps.next()? {
                Step::Index(index) => items.get(*index)?.as_map()?,
                Step::Key(_) => return None,
            },
            _ => return None,
        };
    }
    Some(node)
}

fn resolve_mut<'a>(root: &'a mut Tree, steps: &[Step]) -> Option<&'a mut Tree> {
    let mut node = root;
    let mut steps = steps.iter();
    while let Some(step) = steps.next() {
        let Step::Key(key) = step else {
            return None;
        };
        node = match node.get_mut(key)? {
            Value::Map(child) => child,
            Value::List(items) => match steps.next()? {
                Step::Index(index) => match items.get_mut(*index)? {
                    Value::Map(child) => child,
                    _ => return None,
                },
                Step::Key(_) => return None,
            },
            _ => return None,
        };
    }
    Some(node)
}
