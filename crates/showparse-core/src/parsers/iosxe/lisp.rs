//! LISP session and platform parsers.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::{Fields, LineExtractor, NodePath, PatternRule, TreeBuilder};
use crate::parser::{CommandArgs, CommandParser, Platform};
use crate::schema::{Schema, SchemaNode};
use crate::tree::Tree;

static SESSION_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    let peer = SchemaNode::map()
        .required("state", SchemaNode::str())
        .required("time", SchemaNode::str())
        .required("total_in", SchemaNode::int())
        .required("total_out", SchemaNode::int())
        .required("users", SchemaNode::int());

    let sessions = SchemaNode::map()
        .required("total", SchemaNode::int())
        .required("established", SchemaNode::int())
        .optional("peers", SchemaNode::wildcard(peer));

    Schema::new(SchemaNode::map().required(
        "vrf",
        SchemaNode::wildcard(SchemaNode::map().required("sessions", sessions)),
    ))
});

// Sessions for VRF default, total: 3, established: 3
static SESSIONS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Sessions +for +VRF +(?P<vrf>\S+), +total: +(?P<total>\d+), +established: +(?P<established>\d+)$",
    )
    .unwrap()
});

// 2.2.2.2                        Up         00:51:38        8/13     3
static PEER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<peer>[\da-fA-F.:]+) +(?P<state>Up|Down|Init) +(?P<time>\S+) +(?P<total_in>\d+)/(?P<total_out>\d+) +(?P<users>\d+)$",
    )
    .unwrap()
});

#[derive(Debug, Default)]
struct SessionCursor {
    sessions: Option<NodePath>,
}

fn on_sessions(tree: &mut TreeBuilder, cursor: &mut SessionCursor, mut fields: Fields) {
    let Some(vrf) = fields.take("vrf") else {
        return;
    };
    let sessions = tree.descend(&NodePath::root(), ["vrf", vrf.as_str(), "sessions"]);
    for counter in ["total", "established"] {
        if let Some(n) = fields.int(counter) {
            tree.set(&sessions, counter, n);
        }
    }
    cursor.sessions = Some(sessions);
}

fn on_peer(tree: &mut TreeBuilder, cursor: &mut SessionCursor, mut fields: Fields) {
    let (Some(sessions), Some(peer_addr)) = (&cursor.sessions, fields.take("peer")) else {
        return;
    };
    let peer = tree.descend(sessions, ["peers", peer_addr.as_str()]);
    if let Some(state) = fields.get("state") {
        tree.set(&peer, "state", state.to_lowercase());
    }
    if let Some(time) = fields.get("time") {
        tree.set(&peer, "time", time);
    }
    for counter in ["total_in", "total_out", "users"] {
        if let Some(n) = fields.int(counter) {
            tree.set(&peer, counter, n);
        }
    }
}

static SESSION_RULES: [PatternRule<SessionCursor>; 2] = [
    PatternRule::new("sessions", &SESSIONS_RE, on_sessions),
    PatternRule::new("peer", &PEER_RE, on_peer),
];

/// Parser for `show lisp session`.
pub struct ShowLispSession;

impl CommandParser for ShowLispSession {
    fn name(&self) -> &'static str {
        "ShowLispSession"
    }

    fn platform(&self) -> Platform {
        Platform::Iosxe
    }

    fn commands(&self) -> &'static [&'static str] {
        &["show lisp session"]
    }

    fn schema(&self) -> &Schema {
        &SESSION_SCHEMA
    }

    fn extract(&self, output: &str, _args: &CommandArgs) -> Tree {
        LineExtractor::new(&SESSION_RULES).extract(output)
    }
}

static PLATFORM_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    let support = || {
        SchemaNode::map()
            .required("ipv4", SchemaNode::str())
            .required("ipv6", SchemaNode::str())
            .required("mac", SchemaNode::str())
    };

    Schema::new(
        SchemaNode::map()
            .required("parallel_lisp_instance_limit", SchemaNode::int())
            .required(
                "rloc_forwarding_support",
                SchemaNode::map()
                    .required("local", support())
                    .required("remote", support()),
            )
            .required("latest_supported_config_style", SchemaNode::str())
            .required("current_config_style", SchemaNode::str()),
    )
});

// Parallel LISP instance limit:      2000
static INSTANCE_LIMIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Parallel +LISP +instance +limit: +(?P<limit>\d+)$").unwrap()
});

// IPv4 RLOC, local:                 OK
// MAC RLOC, remote:                 Unsupported
static RLOC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<family>IPv4|IPv6|MAC) +RLOC, +(?P<side>local|remote): +(?P<status>.+)$")
        .unwrap()
});

// Latest supported config style:    Service and instance
static LATEST_STYLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Latest +supported +config +style: +(?P<style>.+)$").unwrap()
});

// Current config style:             Service and instance
static CURRENT_STYLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Current +config +style: +(?P<style>.+)$").unwrap());

fn on_instance_limit(tree: &mut TreeBuilder, _cursor: &mut (), fields: Fields) {
    if let Some(limit) = fields.int("limit") {
        tree.set(&NodePath::root(), "parallel_lisp_instance_limit", limit);
    }
}

fn on_rloc(tree: &mut TreeBuilder, _cursor: &mut (), fields: Fields) {
    let (Some(family), Some(side), Some(status)) =
        (fields.get("family"), fields.get("side"), fields.get("status"))
    else {
        return;
    };
    let node = tree.descend(&NodePath::root(), ["rloc_forwarding_support", side]);
    tree.set(&node, family.to_lowercase(), status.to_lowercase());
}

fn config_style(tree: &mut TreeBuilder, key: &str, fields: &Fields) {
    if let Some(style) = fields.get("style") {
        tree.set(&NodePath::root(), key, style.to_lowercase());
    }
}

fn on_latest_style(tree: &mut TreeBuilder, _cursor: &mut (), fields: Fields) {
    config_style(tree, "latest_supported_config_style", &fields);
}

fn on_current_style(tree: &mut TreeBuilder, _cursor: &mut (), fields: Fields) {
    config_style(tree, "current_config_style", &fields);
}

static PLATFORM_RULES: [PatternRule<()>; 4] = [
    PatternRule::new("instance_limit", &INSTANCE_LIMIT_RE, on_instance_limit),
    PatternRule::new("rloc", &RLOC_RE, on_rloc),
    PatternRule::new("latest_style", &LATEST_STYLE_RE, on_latest_style),
    PatternRule::new("current_style", &CURRENT_STYLE_RE, on_current_style),
];

/// Parser for `show lisp platform`.
pub struct ShowLispPlatform;

impl CommandParser for ShowLispPlatform {
    fn name(&self) -> &'static str {
        "ShowLispPlatform"
    }

    fn platform(&self) -> Platform {
        Platform::Iosxe
    }

    fn commands(&self) -> &'static [&'static str] {
        &["show lisp platform"]
    }

    fn schema(&self) -> &Schema {
        &PLATFORM_SCHEMA
    }

    fn extract(&self, output: &str, _args: &CommandArgs) -> Tree {
        LineExtractor::new(&PLATFORM_RULES).extract(output)
    }
}
