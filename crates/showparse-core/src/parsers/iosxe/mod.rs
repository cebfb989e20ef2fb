//! Cisco IOS-XE parsers.

mod lisp;

pub use lisp::{ShowLispPlatform, ShowLispSession};
