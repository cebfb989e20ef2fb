//! Core parser trait for command output.

use tracing::debug;

use super::command::{CommandArgs, CommandTemplate};
use super::platform::Platform;
use crate::error::ParserError;
use crate::schema::Schema;
use crate::tree::Tree;

/// Where a command's raw output comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSource {
    /// Text captured from the device CLI.
    Cli,
    /// JSON body of a REST resource.
    Rest,
}

/// Parser for one command (or a family of near-identical commands).
///
/// Implementations provide the rule table and schema; extraction and
/// validation are shared.
///
/// # Example Implementation
///
/// ```ignore
/// impl CommandParser for ShowLispSession {
///     fn name(&self) -> &'static str { "ShowLispSession" }
///     fn platform(&self) -> Platform { Platform::Iosxe }
///     fn commands(&self) -> &'static [&'static str] { &["show lisp session"] }
///     fn schema(&self) -> &Schema { &SCHEMA }
///     fn extract(&self, output: &str, _args: &CommandArgs) -> Tree {
///         LineExtractor::new(&RULES).extract(output)
///     }
/// }
/// ```
pub trait CommandParser: Send + Sync {
    /// Parser name, used in error messages.
    fn name(&self) -> &'static str;

    /// Platform whose output this parser understands.
    fn platform(&self) -> Platform;

    /// Command templates this parser handles, least specific first.
    fn commands(&self) -> &'static [&'static str];

    /// Schema the extracted tree must satisfy.
    fn schema(&self) -> &Schema;

    /// Kind of output the parser expects.
    fn source(&self) -> OutputSource {
        OutputSource::Cli
    }

    /// Build the result tree from raw output. Never fails: unrecognized
    /// lines are skipped and an unusable blob yields an empty tree.
    fn extract(&self, output: &str, args: &CommandArgs) -> Tree;

    /// Extract and validate.
    fn parse(&self, output: &str, args: &CommandArgs) -> Result<Tree, ParserError> {
        let tree = self.extract(output, args);
        debug!(parser = self.name(), keys = tree.len(), "validating");
        self.schema()
            .validate(&tree)
            .map_err(|source| ParserError::Schema {
                command: self.name().to_string(),
                source,
            })?;
        Ok(tree)
    }

    /// Render the command to send to the device for `args`.
    fn command_for(&self, args: &CommandArgs) -> Result<String, ParserError> {
        let template = CommandTemplate::select(self.commands(), args)?;
        CommandTemplate::new(template).render(args)
    }
}
