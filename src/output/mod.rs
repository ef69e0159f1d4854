//! Report rendering: console, JSON, Markdown and HTML

pub mod report;
pub mod formatter;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::AtsReport;
