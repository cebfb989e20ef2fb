//! Command templates such as `show route table {table}`.

use std::collections::BTreeMap;

use crate::error::ParserError;

/// Arguments filling a template's `{placeholder}` tokens.
pub type CommandArgs = BTreeMap<String, String>;

/// A command string whose `{name}` tokens stand for caller arguments.
///
/// A placeholder always spans exactly one whitespace-separated token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandTemplate<'a>(&'a str);

impl<'a> CommandTemplate<'a> {
    pub fn new(template: &'a str) -> Self {
        Self(template)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Placeholder names in order of appearance.
    pub fn placeholders(&self) -> Vec<&'a str> {
        self.0.split_whitespace().filter_map(placeholder).collect()
    }

    /// Fill in the placeholders from `args`.
    pub fn render(&self, args: &CommandArgs) -> Result<String, ParserError> {
        let mut tokens = Vec::new();
        for token in self.0.split_whitespace() {
            match placeholder(token) {
                Some(name) => {
                    let value = args.get(name).ok_or_else(|| ParserError::MissingArgument {
                        template: self.0.to_string(),
                        argument: name.to_string(),
                    })?;
                    tokens.push(value.as_str());
                }
                None => tokens.push(token),
            }
        }
        Ok(tokens.join(" "))
    }

    /// Match a concrete command against the template, token by token,
    /// returning the arguments bound to the placeholders.
    pub fn match_command(&self, command: &str) -> Option<CommandArgs> {
        let template: Vec<&str> = self.0.split_whitespace().collect();
        let concrete: Vec<&str> = command.split_whitespace().collect();
        if template.len() != concrete.len() {
            return None;
        }

        let mut args = CommandArgs::new();
        for (expected, actual) in template.iter().zip(&concrete) {
            match placeholder(expected) {
                Some(name) => {
                    args.insert(name.to_string(), actual.to_string());
                }
                None if expected.eq_ignore_ascii_case(actual) => {}
                None => return None,
            }
        }
        Some(args)
    }

    /// Pick the most specific template whose placeholders are all supplied.
    ///
    /// Fails with the first missing argument of the least demanding
    /// template when none can be rendered.
    pub fn select<'t>(templates: &[&'t str], args: &CommandArgs) -> Result<&'t str, ParserError> {
        let chosen = templates
            .iter()
            .copied()
            .filter(|t| {
                CommandTemplate::new(t)
                    .placeholders()
                    .iter()
                    .all(|p| args.contains_key(*p))
            })
            .max_by_key(|t| CommandTemplate::new(t).placeholders().len());

        if let Some(template) = chosen {
            return Ok(template);
        }

        let fallback = templates
            .iter()
            .copied()
            .min_by_key(|t| CommandTemplate::new(t).placeholders().len())
            .unwrap_or_default();
        let missing = CommandTemplate::new(fallback)
            .placeholders()
            .into_iter()
            .find(|p| !args.contains_key(*p))
            .unwrap_or_default();
        Err(ParserError::MissingArgument {
            template: fallback.to_string(),
            argument: missing.to_string(),
        })
    }
}

fn placeholder(token: &str) -> Option<&str> {
    token
        .strip_prefix('{')
        .and_then(|t| t.strip_suffix('}'))
        .filter(|name| !name.is_empty())
}
