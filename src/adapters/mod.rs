//! Concrete adapter implementations for ports.

pub mod csv_sink;
pub mod file_config_adapter;
pub mod xlsx_report_source;
pub mod xlsx_sink;
