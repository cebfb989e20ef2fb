//! `show route table {table}` and its prefix variants.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::{Fields, LineExtractor, NodePath, PatternRule, TreeBuilder};
use crate::parser::{CommandArgs, CommandParser, Platform};
use crate::schema::{Schema, SchemaNode};
use crate::tree::Tree;

static SCHEMA: Lazy<Schema> = Lazy::new(|| {
    let next_hop = SchemaNode::map()
        .required("to", SchemaNode::str())
        .required("via", SchemaNode::str())
        .optional("mpls_label", SchemaNode::str())
        .optional("best_route", SchemaNode::str());

    let route = SchemaNode::map()
        .optional("active_tag", SchemaNode::str())
        .required("protocol_name", SchemaNode::str())
        .required("preference", SchemaNode::str())
        .optional("preference2", SchemaNode::str())
        .required("age", SchemaNode::str())
        .optional("metric", SchemaNode::str())
        .optional(
            "next_hop",
            SchemaNode::map().required("next_hop_list", SchemaNode::wildcard(next_hop)),
        );

    let table = SchemaNode::map()
        .required("destination_count", SchemaNode::int())
        .required("total_route_count", SchemaNode::int())
        .required("active_route_count", SchemaNode::int())
        .required("holddown_route_count", SchemaNode::int())
        .required("hidden_route_count", SchemaNode::int())
        .optional("routes", SchemaNode::wildcard(route));

    Schema::new(SchemaNode::map().required("table_name", SchemaNode::wildcard(table)))
});

// inet.3: 3 destinations, 3 routes (3 active, 0 holddown, 0 hidden)
static TABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<table_name>\S+): +(?P<destination_count>\d+) +destinations, +(?P<total_route_count>\d+) +routes +\((?P<active_route_count>\d+) +active, +(?P<holddown_route_count>\d+) +holddown, +(?P<hidden_route_count>\d+) +hidden\)$",
    )
    .unwrap()
});

// 10.64.4.4/32         *[LDP/9] 03:40:50, metric 110
// 10.64.4.4/32   *[L-OSPF/9/5] 1d 02:16:51, metric 110
// 118420             *[VPN/170] 31w3d 20:13:54
static ROUTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<rt_destination>\S+) +(?P<active_tag>[*+\-])?\[(?P<protocol_name>[\w\-]+)/(?P<preference>\d+)(?:/(?P<preference2>\d+))?\] +(?P<age>[^,]+)(?:, +metric +(?P<metric>\d+))?$",
    )
    .unwrap()
});

// > to 192.168.220.6 via ge-0/0/1.0
// > to 192.168.220.6 via ge-0/0/1.0, Push 305550
// to 10.2.94.2 via lt-1/2/0.49
static NEXT_HOP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<best_route>>)?\s*to +(?P<to>\S+) +via +(?P<via>[\w/\-.]+),?\s*(?P<mpls_label>.+)?$",
    )
    .unwrap()
});

#[derive(Debug, Default)]
struct Cursor {
    table: Option<NodePath>,
    route: Option<NodePath>,
}

fn on_table(tree: &mut TreeBuilder, cursor: &mut Cursor, mut fields: Fields) {
    let Some(name) = fields.take("table_name") else {
        return;
    };
    let table = tree.descend(&NodePath::root(), ["table_name", name.as_str()]);
    for counter in [
        "destination_count",
        "total_route_count",
        "active_route_count",
        "holddown_route_count",
        "hidden_route_count",
    ] {
        if let Some(n) = fields.int(counter) {
            tree.set(&table, counter, n);
        }
    }
    cursor.table = Some(table);
    cursor.route = None;
}

fn on_route(tree: &mut TreeBuilder, cursor: &mut Cursor, mut fields: Fields) {
    let (Some(table), Some(destination)) = (&cursor.table, fields.take("rt_destination")) else {
        return;
    };
    let route = tree.descend(table, ["routes", destination.as_str()]);
    tree.merge(&route, fields.into_tree());
    cursor.route = Some(route);
}

fn on_next_hop(tree: &mut TreeBuilder, cursor: &mut Cursor, fields: Fields) {
    let Some(route) = &cursor.route else {
        return;
    };
    let hops = tree.descend(route, ["next_hop", "next_hop_list"]);
    tree.push_indexed(&hops, fields.into_tree());
}

static RULES: [PatternRule<Cursor>; 3] = [
    PatternRule::new("table", &TABLE_RE, on_table),
    PatternRule::new("route", &ROUTE_RE, on_route),
    PatternRule::new("next_hop", &NEXT_HOP_RE, on_next_hop),
];

/// Parser for:
///     * show route table {table}
///     * show route table {table} {prefix}
///     * show route table {table} {prefix} {destination}
pub struct ShowRouteTable;

impl CommandParser for ShowRouteTable {
    fn name(&self) -> &'static str {
        "ShowRouteTable"
    }

    fn platform(&self) -> Platform {
        Platform::Junos
    }

    fn commands(&self) -> &'static [&'static str] {
        &[
            "show route table {table}",
            "show route table {table} {prefix}",
            "show route table {table} {prefix} {destination}",
        ]
    }

    fn schema(&self) -> &Schema {
        &SCHEMA
    }

    fn extract(&self, output: &str, _args: &CommandArgs) -> Tree {
        LineExtractor::new(&RULES).extract(output)
    }
}
