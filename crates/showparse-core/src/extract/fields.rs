//! Named captures of a matched line.

use regex::{Captures, Regex};

use crate::tree::{Key, Tree, Value};

/// Named fields captured from one line.
///
/// Groups that did not participate in the match, or matched an empty
/// string, are left out. A node built from `Fields` therefore only contains
/// fields that were actually observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    entries: Vec<(String, String)>,
}

impl Fields {
    /// Collect the non-empty named groups of `caps`, in group order.
    pub fn from_captures(regex: &Regex, caps: &Captures<'_>) -> Self {
        let entries = regex
            .capture_names()
            .flatten()
            .filter_map(|name| {
                caps.name(name)
                    .map(|m| m.as_str())
                    .filter(|s| !s.is_empty())
                    .map(|s| (name.to_string(), s.to_string()))
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Remove a field and return its value.
    pub fn take(&mut self, name: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    /// Read a field as an integer.
    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(|v| v.parse().ok())
    }

    /// Remove a field and return it as an integer.
    pub fn take_int(&mut self, name: &str) -> Option<i64> {
        self.take(name).and_then(|v| v.parse().ok())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// All remaining fields as string values keyed by group name.
    pub fn into_tree(self) -> Tree {
        self.entries
            .into_iter()
            .map(|(n, v)| (Key::Str(n), Value::Str(v)))
            .collect()
    }

    /// Like [`into_tree`](Self::into_tree), with `_` in group names turned
    /// into `-` (JUNOS XML-style keys such as `table-name`).
    pub fn into_hyphenated_tree(self) -> Tree {
        self.entries
            .into_iter()
            .map(|(n, v)| (Key::Str(n.replace('_', "-")), Value::Str(v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(pattern: &str, line: &str) -> Fields {
        let re = Regex::new(pattern).unwrap();
        let caps = re.captures(line).unwrap();
        Fields::from_captures(&re, &caps)
    }

    #[test]
    fn test_absent_groups_are_omitted() {
        let fields = capture(
            r"^(?P<dest>\S+) +(?P<tag>\*)?\[(?P<proto>\w+)/(?P<pref>\d+)/?(?P<pref2>\d+)?\]",
            "10.64.4.4/32 *[LDP/9] 03:40:50",
        );
        assert_eq!(fields.get("dest"), Some("10.64.4.4/32"));
        assert_eq!(fields.get("tag"), Some("*"));
        assert!(!fields.contains("pref2"));
        assert_eq!(fields.len(), 4);
    }

    #[test]
    fn test_empty_groups_are_omitted() {
        let fields = capture(r"^(?P<best>>*)\s*to (?P<to>\S+)$", "to 10.0.0.1");
        assert!(!fields.contains("best"));
        assert_eq!(fields.get("to"), Some("10.0.0.1"));
    }

    #[test]
    fn test_take_and_int() {
        let mut fields = capture(r"^(?P<name>\S+): (?P<count>\d+)$", "inet.0: 12");
        assert_eq!(fields.int("count"), Some(12));
        assert_eq!(fields.take("name"), Some("inet.0".to_string()));
        assert_eq!(fields.take("name"), None);
        assert_eq!(fields.take_int("count"), Some(12));
        assert!(fields.is_empty());
    }

    #[test]
    fn test_hyphenated_tree() {
        let fields = capture(r"^(?P<table_name>\S+)$", "default.inet");
        let tree = fields.into_hyphenated_tree();
        assert_eq!(tree.get(&Key::from("table-name")), Some(&Value::from("default.inet")));
    }
}
