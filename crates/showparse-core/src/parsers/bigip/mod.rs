//! F5 BIG-IP iControl REST resources.

mod sys_snmp;

pub use sys_snmp::SysSnmp;
