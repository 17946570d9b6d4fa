//! Port traits the domain depends on.

pub mod config_port;
pub mod report_source;
pub mod result_sink;
