//! upv-audit: audits production line-number lists against UPVF/UPVC file
//! pairs.
//!
//! The core is one pure function, [`analyze`]: feed it two newline-delimited
//! text blocks (line numbers, filenames) and get back per-line-number match
//! records, orphan files, and aggregate stats. [`io`] wraps the two exchange
//! formats around it: a delimited two-column loader and a CSV results
//! exporter.

pub mod core;
pub mod io;

pub use crate::core::{
    analyze, AnalysisReport, AnalysisStats, AnalyzeError, FileKind, Identifier, InputSide,
    MatchRecord, MatchStatus, OrphanFile,
};
