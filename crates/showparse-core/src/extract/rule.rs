use once_cell::sync::Lazy;
use regex::Regex;

use super::builder::TreeBuilder;
use super::fields::Fields;

/// Handler applied when a rule's pattern matches a line.
///
/// `C` is the parser's cursor state: the handles that say where the next
/// matched line's data goes.
pub type Handler<C> = fn(&mut TreeBuilder, &mut C, Fields);

/// A line pattern paired with the handler that records what it captured.
///
/// Rule tables are plain `static` arrays; their order is the priority
/// order, outer structure before inner detail.
pub struct PatternRule<C> {
    name: &'static str,
    pattern: &'static Lazy<Regex>,
    handler: Handler<C>,
}

impl<C> PatternRule<C> {
    pub const fn new(name: &'static str, pattern: &'static Lazy<Regex>, handler: Handler<C>) -> Self {
        Self {
            name,
            pattern,
            handler,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &Regex {
        self.pattern
    }

    /// Match `line`; on success return the captured fields.
    pub fn capture(&self, line: &str) -> Option<Fields> {
        let re: &Regex = self.pattern;
        re.captures(line).map(|caps| Fields::from_captures(re, &caps))
    }

    pub(crate) fn apply(&self, tree: &mut TreeBuilder, cursor: &mut C, fields: Fields) {
        (self.handler)(tree, cursor, fields)
    }
}

impl<C> std::fmt::Debug for PatternRule<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternRule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}
