//! Juniper JUNOS parsers.

mod route;
mod summary;

pub use route::ShowRouteTable;
pub use summary::{ShowRouteForwardingTableSummary, ShowRouteSummary};
