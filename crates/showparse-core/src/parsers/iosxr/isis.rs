//! IS-IS neighbor and segment-routing label parsers.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::{Fields, LineExtractor, NodePath, PatternRule, TreeBuilder};
use crate::parser::{CommandArgs, CommandParser, Platform};
use crate::parsers::expand_interface_name;
use crate::schema::{Schema, SchemaNode};
use crate::tree::Tree;

static NEIGHBORS_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    let neighbor = SchemaNode::map()
        .required("snpa", SchemaNode::str())
        .required("state", SchemaNode::str())
        .required("holdtime", SchemaNode::str())
        .required("type", SchemaNode::str())
        .required("ietf_nsf", SchemaNode::str());

    let interface = SchemaNode::map().required("neighbors", SchemaNode::wildcard(neighbor));

    let vrf = SchemaNode::map()
        .optional("interfaces", SchemaNode::wildcard(interface))
        .optional("total_neighbor_count", SchemaNode::int());

    Schema::new(SchemaNode::map().required(
        "isis",
        SchemaNode::wildcard(SchemaNode::map().required("vrf", SchemaNode::wildcard(vrf))),
    ))
});

// IS-IS test neighbors:
static INSTANCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^IS-IS +(?P<instance>\S+) +neighbors:$").unwrap());

// R1_xe          Gi0/0/0/0.115    fa16.3eab.a39d Up    24       L1L2 Capable
static NEIGHBOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<system_id>\S+) +(?P<interface>\S+) +(?P<snpa>\S+) +(?P<state>Up|Down|Init|Failed) +(?P<holdtime>\d+|None) +(?P<type>L1L2|L1|L2|None) +(?P<ietf_nsf>\S+)$",
    )
    .unwrap()
});

// Total neighbor count: 2
static TOTAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Total +neighbor +count: +(?P<count>\d+)$").unwrap());

#[derive(Debug, Default)]
struct NeighborCursor {
    vrf: Option<NodePath>,
}

fn on_instance(tree: &mut TreeBuilder, cursor: &mut NeighborCursor, fields: Fields) {
    if let Some(instance) = fields.get("instance") {
        cursor.vrf = Some(tree.descend(
            &NodePath::root(),
            ["isis", instance, "vrf", "default"],
        ));
    }
}

fn on_neighbor(tree: &mut TreeBuilder, cursor: &mut NeighborCursor, mut fields: Fields) {
    let Some(vrf) = &cursor.vrf else {
        return;
    };
    let (Some(system_id), Some(interface)) = (fields.take("system_id"), fields.take("interface"))
    else {
        return;
    };
    let interface = expand_interface_name(&interface);
    let neighbor = tree.descend(
        vrf,
        ["interfaces", interface.as_str(), "neighbors", system_id.as_str()],
    );
    tree.merge(&neighbor, fields.into_tree());
}

fn on_total(tree: &mut TreeBuilder, cursor: &mut NeighborCursor, fields: Fields) {
    if let (Some(vrf), Some(count)) = (&cursor.vrf, fields.int("count")) {
        tree.set(vrf, "total_neighbor_count", count);
    }
}

static NEIGHBOR_RULES: [PatternRule<NeighborCursor>; 3] = [
    PatternRule::new("instance", &INSTANCE_RE, on_instance),
    PatternRule::new("total", &TOTAL_RE, on_total),
    PatternRule::new("neighbor", &NEIGHBOR_RE, on_neighbor),
];

/// Parser for `show isis neighbors`.
pub struct ShowIsisNeighbors;

impl CommandParser for ShowIsisNeighbors {
    fn name(&self) -> &'static str {
        "ShowIsisNeighbors"
    }

    fn platform(&self) -> Platform {
        Platform::Iosxr
    }

    fn commands(&self) -> &'static [&'static str] {
        &["show isis neighbors"]
    }

    fn schema(&self) -> &Schema {
        &NEIGHBORS_SCHEMA
    }

    fn extract(&self, output: &str, _args: &CommandArgs) -> Tree {
        LineExtractor::new(&NEIGHBOR_RULES).extract(output)
    }
}

static LABEL_TABLE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    let label = SchemaNode::map().required("prefix_interface", SchemaNode::str());
    Schema::new(SchemaNode::map().required(
        "instance",
        SchemaNode::wildcard(SchemaNode::map().optional("label", SchemaNode::wildcard(label))),
    ))
});

// IS-IS SR IS Label Table
static LABEL_TABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^IS-IS +(?P<instance>\S+) +IS +Label +Table$").unwrap());

// 16001         Loopback0
static LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<label>\d+) +(?P<prefix_interface>\S+)$").unwrap());

#[derive(Debug, Default)]
struct LabelCursor {
    instance: Option<NodePath>,
}

fn on_label_table(tree: &mut TreeBuilder, cursor: &mut LabelCursor, fields: Fields) {
    if let Some(instance) = fields.get("instance") {
        cursor.instance = Some(tree.descend(&NodePath::root(), ["instance", instance]));
    }
}

fn on_label(tree: &mut TreeBuilder, cursor: &mut LabelCursor, mut fields: Fields) {
    let (Some(instance), Some(label)) = (&cursor.instance, fields.take_int("label")) else {
        return;
    };
    let labels = tree.descend(instance, ["label"]);
    let entry = tree.descend(&labels, [label]);
    tree.merge(&entry, fields.into_tree());
}

static LABEL_RULES: [PatternRule<LabelCursor>; 2] = [
    PatternRule::new("label_table", &LABEL_TABLE_RE, on_label_table),
    PatternRule::new("label", &LABEL_RE, on_label),
];

/// Parser for `show isis segment-routing label table`.
pub struct ShowIsisSegmentRoutingLabelTable;

impl CommandParser for ShowIsisSegmentRoutingLabelTable {
    fn name(&self) -> &'static str {
        "ShowIsisSegmentRoutingLabelTable"
    }

    fn platform(&self) -> Platform {
        Platform::Iosxr
    }

    fn commands(&self) -> &'static [&'static str] {
        &["show isis segment-routing label table"]
    }

    fn schema(&self) -> &Schema {
        &LABEL_TABLE_SCHEMA
    }

    fn extract(&self, output: &str, _args: &CommandArgs) -> Tree {
        LineExtractor::new(&LABEL_RULES).extract(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{to_json, Key};
    use serde_json::json;

    #[test]
    fn test_neighbors_golden() {
        let output = "
            +++ R2_xr: executing command 'show isis neighbors' +++
            show isis neighbors
            Wed Apr 17 16:21:30.075 UTC

            IS-IS test neighbors:
            System Id      Interface        SNPA           State Holdtime Type IETF-NSF
            R1_xe          Gi0/0/0/0.115    fa16.3eab.a39d Up    24       L1L2 Capable
            R3_nx          Gi0/0/0/1.115    5e00.4002.0007 Up    25       L1L2 Capable

            Total neighbor count: 2
        ";
        let tree = ShowIsisNeighbors.parse(output, &CommandArgs::new()).unwrap();
        assert_eq!(
            to_json(&tree),
            json!({"isis": {"test": {"vrf": {"default": {
                "interfaces": {
                    "GigabitEthernet0/0/0/0.115": {"neighbors": {"R1_xe": {
                        "snpa": "fa16.3eab.a39d",
                        "state": "Up",
                        "holdtime": "24",
                        "type": "L1L2",
                        "ietf_nsf": "Capable",
                    }}},
                    "GigabitEthernet0/0/0/1.115": {"neighbors": {"R3_nx": {
                        "snpa": "5e00.4002.0007",
                        "state": "Up",
                        "holdtime": "25",
                        "type": "L1L2",
                        "ietf_nsf": "Capable",
                    }}},
                },
                "total_neighbor_count": 2,
            }}}}})
        );
    }

    #[test]
    fn test_neighbors_instance_without_rows() {
        let output = "
            IS-IS test neighbors:
            System Id      Interface        SNPA           State Holdtime Type IETF-NSF
            R1_xe          Gi0/0/0/0.115    fa16.3eab.a39d Up    22       L1L2 Capable
            Total neighbor count: 1

            IS-IS test1 neighbors:
            System Id      Interface        SNPA           State Holdtime Type IETF-NSF
        ";
        let tree = ShowIsisNeighbors.parse(output, &CommandArgs::new()).unwrap();
        let json = to_json(&tree);
        assert_eq!(json["isis"]["test1"], json!({"vrf": {"default": {}}}));
        assert_eq!(json["isis"]["test"]["vrf"]["default"]["total_neighbor_count"], 1);
    }

    #[test]
    fn test_neighbors_empty() {
        let err = ShowIsisNeighbors.parse("", &CommandArgs::new()).unwrap_err();
        assert!(err.is_empty());
    }

    #[test]
    fn test_label_table_golden() {
        let output = "
            RP/0/RP0/CPU0:iosxrv9000-1#show isis segment-routing label table
            Mon Sep 30 13:22:32.921 EDT

            IS-IS SR IS Label Table
            Label         Prefix/Interface
            ----------    ----------------
            16001         Loopback0
            16002         10.2.2.2/32
            16003         10.3.3.3/32
        ";
        let tree = ShowIsisSegmentRoutingLabelTable
            .parse(output, &CommandArgs::new())
            .unwrap();
        assert_eq!(
            to_json(&tree),
            json!({"instance": {"SR": {"label": {
                "16001": {"prefix_interface": "Loopback0"},
                "16002": {"prefix_interface": "10.2.2.2/32"},
                "16003": {"prefix_interface": "10.3.3.3/32"},
            }}}})
        );

        let labels = tree[&Key::from("instance")].as_map().unwrap()[&Key::from("SR")]
            .as_map()
            .unwrap()[&Key::from("label")]
            .as_map()
            .unwrap();
        assert!(labels.contains_key(&Key::Int(16001)));
        assert!(!labels.contains_key(&Key::from("16001")));
    }

    #[test]
    fn test_label_table_empty() {
        let err = ShowIsisSegmentRoutingLabelTable
            .parse("", &CommandArgs::new())
            .unwrap_err();
        assert!(err.is_empty());
    }
}
