//! Analyzer module for delivery-report aggregation.
//!
//! Provides functionality for:
//! - Sequential reading of a packet delivery report
//! - Per-line extraction of `observed/expected` counter pairs
//! - Summing the pairs into the final report totals

pub mod line_parser;
pub mod log_loader;
pub mod report;
pub mod types;

pub use report::{MalformedPolicy, aggregate_report, render_summary};
