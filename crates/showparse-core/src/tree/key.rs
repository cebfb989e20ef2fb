use serde::Serialize;
use std::fmt;

/// Map key in a result tree.
///
/// Most keys are strings taken from the schema or from captured text.
/// Integer keys are used for sequential entries (1-based next-hop indices)
/// and for numeric identifiers such as MPLS labels.
///
/// `Int(16001)` and `Str("16001")` are distinct keys but render as the same
/// JSON object key, so one map must never hold both. A parser picks one
/// form per map.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Returns the string form if this is a string key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            Key::Int(_) => None,
        }
    }

    /// Returns the integer form if this is an integer key.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(i) => Some(*i),
            Key::Str(_) => None,
        }
    }

    /// The key of the other variant that renders to the same text, if any.
    pub(crate) fn rendering_twin(&self) -> Option<Key> {
        match self {
            Key::Int(i) => Some(Key::Str(i.to_string())),
            Key::Str(s) => s
                .parse::<i64>()
                .ok()
                .filter(|i| i.to_string() == *s)
                .map(Key::Int),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Key::Str(s.clone())
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{}", i),
            Key::Str(s) => write!(f, "{}", s),
        }
    }
}
