//! Line-oriented stateful extraction.
//!
//! A parser is a table of [`PatternRule`]s plus a cursor struct. The
//! [`LineExtractor`] walks the input one line at a time, applies the first
//! rule whose pattern matches, and lets its handler grow the tree through a
//! [`TreeBuilder`]. Unmatched lines are skipped; there is no lookahead and
//! no backtracking, so anything that spans lines has to live in the cursor.
//!
//! ## Components
//!
//! - `PatternRule` - pattern + handler pair, ordered by priority
//! - `TreeBuilder` - owns the tree, hands out `NodePath` handles
//! - `Fields` - named captures, empty groups omitted
//! - `LineExtractor` - runs a rule table over a text blob

mod builder;
mod fields;
mod path;
mod rule;

pub use builder::TreeBuilder;
pub use fields::Fields;
pub use path::{NodePath, Step};
pub use rule::{Handler, PatternRule};

use tracing::{debug, trace};

use crate::tree::Tree;

/// Runs a rule table over raw command output.
#[derive(Debug)]
pub struct LineExtractor<'r, C> {
    rules: &'r [PatternRule<C>],
}

impl<'r, C: Default> LineExtractor<'r, C> {
    pub fn new(rules: &'r [PatternRule<C>]) -> Self {
        Self { rules }
    }

    /// Extract a tree, starting from a fresh cursor.
    ///
    /// Empty or whitespace-only input yields an empty tree; emptiness is
    /// reported by the schema validator, not here.
    pub fn extract(&self, text: &str) -> Tree {
        let mut cursor = C::default();
        let mut tree = TreeBuilder::new();
        let mut seen = 0usize;
        let mut matched = 0usize;

        for (line_idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            seen += 1;

            for rule in self.rules {
                if let Some(fields) = rule.capture(line) {
                    trace!(line = line_idx + 1, rule = rule.name(), "matched");
                    rule.apply(&mut tree, &mut cursor, fields);
                    matched += 1;
                    break;
                }
            }
        }

        debug!(lines = seen, matched, skipped = seen - matched, "extraction finished");
        tree.finish()
    }
}
