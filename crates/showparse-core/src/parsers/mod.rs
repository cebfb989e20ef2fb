//! Bundled command parsers.
//!
//! Each parser pairs a static rule table and cursor struct with a schema.
//! Rules are listed outermost first: a table or session header must be
//! tried before the detail lines that belong to it.

pub mod bigip;
pub mod iosxe;
pub mod iosxr;
pub mod junos;

mod common;

pub use common::expand_interface_name;
