//! ATS checker library
//!
//! Scores resume text for applicant-tracking-system compatibility. The
//! scoring engine in [`processing`] is pure and synchronous; file extraction
//! ([`input`]), the rewrite service ([`rewrite`]) and report rendering
//! ([`output`]) sit around it.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod rewrite;
pub mod output;

pub use config::Config;
pub use error::{AtsCheckerError, Result};
pub use input::file_detector::FileMetadata;
pub use processing::{analyze, AnalysisEngine, AnalysisRequest, AnalysisResult};
