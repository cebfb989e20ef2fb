use std::fmt;

use crate::tree::Key;

/// One step from a node to one of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Child map stored under a key.
    Key(Key),
    /// Map element of a list stored under the preceding key.
    Index(usize),
}

/// Handle naming a node of the tree under construction.
///
/// Handles are only handed out by [`TreeBuilder`](super::TreeBuilder), so a
/// handle held in cursor state always names a node that exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePath {
    steps: Vec<Step>,
}

impl NodePath {
    /// The root of the tree.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    pub(crate) fn child(&self, key: Key) -> Self {
        let mut steps = self.steps.clone();
        steps.push(Step::Key(key));
        Self { steps }
    }

    pub(crate) fn element(&self, list_key: Key, index: usize) -> Self {
        let mut steps = self.steps.clone();
        steps.push(Step::Key(list_key));
        steps.push(Step::Index(index));
        Self { steps }
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return write!(f, "<root>");
        }
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                Step::Key(key) if i == 0 => write!(f, "{}", key)?,
                Step::Key(key) => write!(f, ".{}", key)?,
                Step::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let path = NodePath::root()
            .child(Key::from("route-information"))
            .element(Key::from("route-table"), 0)
            .child(Key::Int(3));
        assert_eq!(path.to_string(), "route-information.route-table[0].3");
        assert_eq!(NodePath::root().to_string(), "<root>");
    }
}
