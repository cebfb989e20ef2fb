//! Cisco IOS-XR parsers.

mod isis;

pub use isis::{ShowIsisNeighbors, ShowIsisSegmentRoutingLabelTable};
