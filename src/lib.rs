//! gfim-history: historical GFIM bond prices and yields.
//!
//! Walks a date range of daily GFIM trading reports, keeps the rows for the
//! requested ISINs and writes them to a single spreadsheet.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`].

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod logging;
pub mod ports;
