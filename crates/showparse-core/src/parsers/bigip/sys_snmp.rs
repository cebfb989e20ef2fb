//! `/mgmt/tm/sys/snmp` resource.

use once_cell::sync::Lazy;
use tracing::warn;

use crate::parser::{CommandArgs, CommandParser, OutputSource, Platform};
use crate::schema::{Schema, SchemaNode};
use crate::tree::{Tree, Value};

static SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(
        SchemaNode::map()
            .required("kind", SchemaNode::str())
            .required("selfLink", SchemaNode::str())
            .optional("agentAddresses", SchemaNode::list(SchemaNode::str()))
            .optional("agentTrap", SchemaNode::str())
            .optional("allowedAddresses", SchemaNode::list(SchemaNode::str()))
            .optional("authTrap", SchemaNode::str())
            .optional("bigipTraps", SchemaNode::str())
            .optional("l2forwardVlan", SchemaNode::str())
            .optional("loadMax1", SchemaNode::int())
            .optional("loadMax5", SchemaNode::int())
            .optional("loadMax15", SchemaNode::int())
            .optional("snmpv1", SchemaNode::str())
            .optional("snmpv2c", SchemaNode::str())
            .optional("sysContact", SchemaNode::str())
            .optional("sysLocation", SchemaNode::str())
            .optional("sysServices", SchemaNode::int())
            .rest(SchemaNode::any()),
    )
});

/// Decode a REST body into a tree. Anything that is not a JSON object
/// yields an empty tree.
pub(crate) fn json_body_to_tree(command: &str, body: &str) -> Tree {
    if body.trim().is_empty() {
        return Tree::new();
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => match Value::from(json) {
            Value::Map(tree) => tree,
            other => {
                warn!(command, found = other.type_name(), "REST body is not an object");
                Tree::new()
            }
        },
        Err(e) => {
            warn!(command, error = %e, "REST body is not valid JSON");
            Tree::new()
        }
    }
}

/// Parser for the `/mgmt/tm/sys/snmp` resource.
pub struct SysSnmp;

impl CommandParser for SysSnmp {
    fn name(&self) -> &'static str {
        "SysSnmp"
    }

    fn platform(&self) -> Platform {
        Platform::Bigip
    }

    fn commands(&self) -> &'static [&'static str] {
        &["/mgmt/tm/sys/snmp"]
    }

    fn schema(&self) -> &Schema {
        &SCHEMA
    }

    fn source(&self) -> OutputSource {
        OutputSource::Rest
    }

    fn extract(&self, output: &str, _args: &CommandArgs) -> Tree {
        json_body_to_tree(self.commands()[0], output)
    }
}
