//! Parser registry for looking up command parsers.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::command::{CommandArgs, CommandTemplate};
use super::platform::Platform;
use super::traits::CommandParser;
use crate::error::ParserError;
use crate::parsers::bigip::SysSnmp;
use crate::parsers::iosxe::{ShowLispPlatform, ShowLispSession};
use crate::parsers::iosxr::{ShowIsisNeighbors, ShowIsisSegmentRoutingLabelTable};
use crate::parsers::junos::{ShowRouteForwardingTableSummary, ShowRouteSummary, ShowRouteTable};
use crate::tree::Tree;

/// Registry of command parsers.
///
/// Maps each platform to the parsers registered for it. Registers all
/// bundled parsers on creation.
pub struct ParserRegistry {
    parsers: HashMap<Platform, Vec<Arc<dyn CommandParser>>>,
}

impl ParserRegistry {
    /// Create a new registry with all bundled parsers.
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register(Arc::new(ShowRouteTable));
        registry.register(Arc::new(ShowRouteSummary));
        registry.register(Arc::new(ShowRouteForwardingTableSummary));
        registry.register(Arc::new(ShowLispSession));
        registry.register(Arc::new(ShowLispPlatform));
        registry.register(Arc::new(ShowIsisNeighbors));
        registry.register(Arc::new(ShowIsisSegmentRoutingLabelTable));
        registry.register(Arc::new(SysSnmp));

        registry
    }

    /// Create a registry with no parsers.
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Register a parser under its platform.
    pub fn register(&mut self, parser: Arc<dyn CommandParser>) {
        self.parsers.entry(parser.platform()).or_default().push(parser);
    }

    /// Find the parser for a concrete command.
    ///
    /// When several templates match, the one with the fewest placeholders
    /// (the most literal one) wins.
    pub fn lookup(
        &self,
        platform: Platform,
        command: &str,
    ) -> Option<(Arc<dyn CommandParser>, CommandArgs)> {
        let candidates = self.parsers.get(&platform)?;

        let mut best: Option<(usize, &Arc<dyn CommandParser>, CommandArgs)> = None;
        for parser in candidates {
            for template in parser.commands() {
                let Some(args) = CommandTemplate::new(template).match_command(command) else {
                    continue;
                };
                if best.as_ref().map_or(true, |(n, _, _)| args.len() < *n) {
                    best = Some((args.len(), parser, args));
                }
            }
        }

        let (_, parser, args) = best?;
        debug!(%platform, command, parser = parser.name(), "parser lookup");
        Some((Arc::clone(parser), args))
    }

    /// Check if any parser handles the command.
    pub fn can_parse(&self, platform: Platform, command: &str) -> bool {
        self.lookup(platform, command).is_some()
    }

    /// Parse already-captured output of `command`.
    pub fn parse(&self, platform: Platform, command: &str, output: &str) -> Result<Tree, ParserError> {
        let (parser, args) = self
            .lookup(platform, command)
            .ok_or_else(|| ParserError::NoParser {
                platform,
                command: command.to_string(),
            })?;
        parser.parse(output, &args)
    }

    /// List registered parsers for a platform with their command templates.
    pub fn list_parsers(&self, platform: Platform) -> Vec<(&'static str, &'static [&'static str])> {
        self.parsers
            .get(&platform)
            .map(|parsers| parsers.iter().map(|p| (p.name(), p.commands())).collect())
            .unwrap_or_default()
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_bundled_parsers() {
        let registry = ParserRegistry::new();
        assert!(registry.can_parse(Platform::Junos, "show route table inet.0"));
        assert!(registry.can_parse(Platform::Junos, "show route summary"));
        assert!(registry.can_parse(Platform::Junos, "show route forwarding-table summary"));
        assert!(registry.can_parse(Platform::Iosxe, "show lisp session"));
        assert!(registry.can_parse(Platform::Iosxe, "show lisp platform"));
        assert!(registry.can_parse(Platform::Iosxr, "show isis neighbors"));
        assert!(registry.can_parse(Platform::Iosxr, "show isis segment-routing label table"));
        assert!(registry.can_parse(Platform::Bigip, "/mgmt/tm/sys/snmp"));
    }

    #[test]
    fn test_lookup_is_platform_scoped() {
        let registry = ParserRegistry::new();
        assert!(!registry.can_parse(Platform::Iosxe, "show route summary"));
        assert!(!registry.can_parse(Platform::Junos, "show lisp session"));
    }

    #[test]
    fn test_lookup_binds_arguments() {
        let registry = ParserRegistry::new();
        let (parser, args) = registry
            .lookup(Platform::Junos, "show route table inet.3 10.64.4.4/32")
            .unwrap();
        assert_eq!(parser.name(), "ShowRouteTable");
        assert_eq!(args.get("table").map(String::as_str), Some("inet.3"));
        assert_eq!(args.get("prefix").map(String::as_str), Some("10.64.4.4/32"));
    }

    struct CatchAll;

    static CATCH_ALL_SCHEMA: once_cell::sync::Lazy<crate::schema::Schema> =
        once_cell::sync::Lazy::new(|| crate::schema::Schema::new(crate::schema::SchemaNode::any()));

    impl CommandParser for CatchAll {
        fn name(&self) -> &'static str {
            "CatchAll"
        }
        fn platform(&self) -> Platform {
            Platform::Junos
        }
        fn commands(&self) -> &'static [&'static str] {
            &["show route {what}"]
        }
        fn schema(&self) -> &crate::schema::Schema {
            &CATCH_ALL_SCHEMA
        }
        fn extract(&self, _output: &str, _args: &CommandArgs) -> Tree {
            Tree::new()
        }
    }

    #[test]
    fn test_literal_template_beats_placeholder() {
        let mut registry = ParserRegistry::new();
        registry.register(Arc::new(CatchAll));

        let (parser, args) = registry.lookup(Platform::Junos, "show route summary").unwrap();
        assert_eq!(parser.name(), "ShowRouteSummary");
        assert!(args.is_empty());

        let (parser, args) = registry.lookup(Platform::Junos, "show route brief").unwrap();
        assert_eq!(parser.name(), "CatchAll");
        assert_eq!(args.get("what").map(String::as_str), Some("brief"));
    }

    #[test]
    fn test_parse_unknown_command() {
        let registry = ParserRegistry::new();
        let err = registry
            .parse(Platform::Junos, "show chassis hardware", "")
            .unwrap_err();
        assert!(matches!(err, ParserError::NoParser { .. }));
    }

    #[test]
    fn test_list_parsers() {
        let registry = ParserRegistry::new();
        let names: Vec<_> = registry
            .list_parsers(Platform::Iosxr)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["ShowIsisNeighbors", "ShowIsisSegmentRoutingLabelTable"]);
        assert!(ParserRegistry::empty().list_parsers(Platform::Junos).is_empty());
    }
}
