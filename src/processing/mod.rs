//! Text processing and analysis module
//! Tokenization, section detection, individual checks and scoring

pub mod lexicon;
pub mod text_processor;
pub mod sections;
pub mod checks;
pub mod keywords;
pub mod scoring;
pub mod analyzer;

pub use analyzer::{analyze, AnalysisEngine, AnalysisRequest, AnalysisResult, TextStats};
