//! `show route summary` and `show route forwarding-table summary`.
//!
//! Both follow the JUNOS XML layout: hyphenated keys, string values and
//! ordered lists of table records.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::{Fields, LineExtractor, NodePath, PatternRule, TreeBuilder};
use crate::parser::{CommandArgs, CommandParser, Platform};
use crate::schema::{Schema, SchemaNode};
use crate::tree::Tree;

const SUMMARY_ROOT: &str = "route-summary-information";
const FORWARDING_ROOT: &str = "forwarding-table-information";

static ROUTE_SUMMARY_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    let protocol = SchemaNode::map()
        .required("active-route-count", SchemaNode::str())
        .required("protocol-name", SchemaNode::str())
        .required("protocol-route-count", SchemaNode::str());

    let table = SchemaNode::map()
        .required("active-route-count", SchemaNode::str())
        .required("destination-count", SchemaNode::str())
        .required("hidden-route-count", SchemaNode::str())
        .required("holddown-route-count", SchemaNode::str())
        .optional("protocols", SchemaNode::list(protocol))
        .required("table-name", SchemaNode::str())
        .required("total-route-count", SchemaNode::str());

    Schema::new(
        SchemaNode::map()
            .optional("@xmlns:junos", SchemaNode::str())
            .required(
                SUMMARY_ROOT,
                SchemaNode::map()
                    .optional("@xmlns", SchemaNode::str())
                    .required("as-number", SchemaNode::str())
                    .required("route-table", SchemaNode::list(table))
                    .required("router-id", SchemaNode::str()),
            ),
    )
});

// Autonomous system number: 65171
static AS_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Autonomous +system +number: +(?P<as_number>\d+)$").unwrap());

// Router ID: 10.189.5.252
static ROUTER_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Router +ID: +(?P<router_id>\S+)$").unwrap());

// inet.0: 929 destinations, 1615 routes (929 active, 0 holddown, 0 hidden)
static SUMMARY_TABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<table_name>\S+): +(?P<destination_count>\d+) +destinations, +(?P<total_route_count>\d+) +routes +\((?P<active_route_count>\d+) +active, +(?P<holddown_route_count>\d+) +holddown, +(?P<hidden_route_count>\d+) +hidden\)$",
    )
    .unwrap()
});

// Direct:      6 routes,      6 active
static PROTOCOL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<protocol_name>\S+): +(?P<protocol_route_count>\d+) +routes, +(?P<active_route_count>\d+) +\w+$",
    )
    .unwrap()
});

#[derive(Debug, Default)]
struct SummaryCursor {
    table: Option<NodePath>,
}

fn summary_info(tree: &mut TreeBuilder) -> NodePath {
    tree.descend(&NodePath::root(), [SUMMARY_ROOT])
}

fn on_as_number(tree: &mut TreeBuilder, _cursor: &mut SummaryCursor, fields: Fields) {
    let info = summary_info(tree);
    tree.merge(&info, fields.into_hyphenated_tree());
}

fn on_router_id(tree: &mut TreeBuilder, _cursor: &mut SummaryCursor, fields: Fields) {
    let info = summary_info(tree);
    tree.merge(&info, fields.into_hyphenated_tree());
}

fn on_summary_table(tree: &mut TreeBuilder, cursor: &mut SummaryCursor, fields: Fields) {
    let info = summary_info(tree);
    cursor.table = Some(tree.push(&info, "route-table", fields.into_hyphenated_tree()));
}

fn on_protocol(tree: &mut TreeBuilder, cursor: &mut SummaryCursor, fields: Fields) {
    if let Some(table) = &cursor.table {
        tree.push(table, "protocols", fields.into_hyphenated_tree());
    }
}

static SUMMARY_RULES: [PatternRule<SummaryCursor>; 4] = [
    PatternRule::new("as_number", &AS_NUMBER_RE, on_as_number),
    PatternRule::new("router_id", &ROUTER_ID_RE, on_router_id),
    PatternRule::new("route_table", &SUMMARY_TABLE_RE, on_summary_table),
    PatternRule::new("protocol", &PROTOCOL_RE, on_protocol),
];

/// Parser for `show route summary`.
pub struct ShowRouteSummary;

impl CommandParser for ShowRouteSummary {
    fn name(&self) -> &'static str {
        "ShowRouteSummary"
    }

    fn platform(&self) -> Platform {
        Platform::Junos
    }

    fn commands(&self) -> &'static [&'static str] {
        &["show route summary"]
    }

    fn schema(&self) -> &Schema {
        &ROUTE_SUMMARY_SCHEMA
    }

    fn extract(&self, output: &str, _args: &CommandArgs) -> Tree {
        LineExtractor::new(&SUMMARY_RULES).extract(output)
    }
}

static FORWARDING_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    let summary = SchemaNode::map()
        .required("route-count", SchemaNode::str())
        .required("route-table-type", SchemaNode::str());

    let table = SchemaNode::map()
        .required("address-family", SchemaNode::str())
        .optional("enabled-protocols", SchemaNode::str())
        .required("route-table-summary", SchemaNode::list(summary))
        .required("table-name", SchemaNode::str());

    Schema::new(
        SchemaNode::map()
            .optional("@xmlns:junos", SchemaNode::str())
            .required(
                FORWARDING_ROOT,
                SchemaNode::map()
                    .optional("@xmlns", SchemaNode::str())
                    .required("route-table", SchemaNode::list(table)),
            ),
    )
});

// Routing table: default.inet
static ROUTING_TABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Routing +table: +(?P<table_name>\S+)$").unwrap());

// Enabled protocols: Bridging, All VLANs,
static ENABLED_PROTOCOLS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Enabled +protocols: +(?P<enabled_protocols>.+)$").unwrap());

// Internet:
// DHCP Snooping:
static ADDRESS_FAMILY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<address_family>\S+(?: +\S+)?):$").unwrap());

// perm:          1 routes
static ROUTE_COUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<route_table_type>\S+): +(?P<route_count>\d+) +routes$").unwrap()
});

#[derive(Debug, Default)]
struct ForwardingCursor {
    table: Option<NodePath>,
}

fn on_routing_table(tree: &mut TreeBuilder, cursor: &mut ForwardingCursor, fields: Fields) {
    let info = tree.descend(&NodePath::root(), [FORWARDING_ROOT]);
    cursor.table = Some(tree.push(&info, "route-table", fields.into_hyphenated_tree()));
}

fn on_table_attribute(tree: &mut TreeBuilder, cursor: &mut ForwardingCursor, fields: Fields) {
    if let Some(table) = &cursor.table {
        tree.merge(table, fields.into_hyphenated_tree());
    }
}

fn on_route_count(tree: &mut TreeBuilder, cursor: &mut ForwardingCursor, fields: Fields) {
    if let Some(table) = &cursor.table {
        tree.push(table, "route-table-summary", fields.into_hyphenated_tree());
    }
}

static FORWARDING_RULES: [PatternRule<ForwardingCursor>; 4] = [
    PatternRule::new("routing_table", &ROUTING_TABLE_RE, on_routing_table),
    PatternRule::new("enabled_protocols", &ENABLED_PROTOCOLS_RE, on_table_attribute),
    PatternRule::new("address_family", &ADDRESS_FAMILY_RE, on_table_attribute),
    PatternRule::new("route_count", &ROUTE_COUNT_RE, on_route_count),
];

/// Parser for `show route forwarding-table summary`.
pub struct ShowRouteForwardingTableSummary;

impl CommandParser for ShowRouteForwardingTableSummary {
    fn name(&self) -> &'static str {
        "ShowRouteForwardingTableSummary"
    }

    fn platform(&self) -> Platform {
        Platform::Junos
    }

    fn commands(&self) -> &'static [&'static str] {
        &["show route forwarding-table summary"]
    }

    fn schema(&self) -> &Schema {
        &FORWARDING_SCHEMA
    }

    fn extract(&self, output: &str, _args: &CommandArgs) -> Tree {
        LineExtractor::new(&FORWARDING_RULES).extract(output)
    }
}
