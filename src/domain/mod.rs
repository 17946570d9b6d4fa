//! Core domain types and logic.

pub mod aggregate;
pub mod calendar;
pub mod error;
pub mod extract;
pub mod report;
pub mod request;
pub mod row;
pub mod settings;
